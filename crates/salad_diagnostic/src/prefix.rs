//! Recognize the `file:line:col: ` lead of a diagnostic line.

use std::sync::OnceLock;

use regex::Regex;

/// Lazy head up to the first `:<digits>:<digits>: `, then the body with its
/// leading spaces captured separately.
const LOCATION_PATTERN: &str = r"^(.*?:[0-9]+:[0-9]+: )(( *)(.*))";

#[expect(clippy::expect_used, reason = "literal pattern always compiles")]
fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(LOCATION_PATTERN).expect("location pattern compiles"))
}

/// A diagnostic line split at its location lead.
///
/// All fields borrow from the parsed line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocatedPrefix<'a> {
    /// `file:line:col: `, trailing space included.
    pub lead: &'a str,
    /// Everything after the lead, leading spaces included.
    pub body: &'a str,
    /// The run of spaces that opens `body`.
    pub indent: &'a str,
}

impl<'a> LocatedPrefix<'a> {
    /// `body` without its leading spaces.
    pub fn text(&self) -> &'a str {
        &self.body[self.indent.len()..]
    }
}

/// Split `line` at its location lead, if it has one.
///
/// The first `:<digits>:<digits>: ` found scanning left to right ends the
/// lead, so a body that itself looks located stays in the body.
///
/// ```
/// use salad_diagnostic::parse_prefix;
///
/// let prefix = parse_prefix("doc.yml:2:1:   inner.yml:9:9: bad").unwrap();
/// assert_eq!(prefix.lead, "doc.yml:2:1: ");
/// assert_eq!(prefix.indent, "  ");
/// assert_eq!(prefix.text(), "inner.yml:9:9: bad");
/// ```
pub fn parse_prefix(line: &str) -> Option<LocatedPrefix<'_>> {
    let captures = pattern().captures(line)?;
    Some(LocatedPrefix {
        lead: captures.get(1)?.as_str(),
        body: captures.get(2)?.as_str(),
        indent: captures.get(3)?.as_str(),
    })
}

/// Whether `line` already starts with a location lead.
pub fn is_located(line: &str) -> bool {
    pattern().is_match(line)
}
