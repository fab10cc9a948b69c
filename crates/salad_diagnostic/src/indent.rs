//! Nest diagnostics under one another without moving their leads.

use crate::parse_prefix;

/// How [`indent`] marks the lines of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndentOptions<'a> {
    /// Leave the first line untouched and only shift the rest.
    pub nolead: bool,
    /// Inserted before every line but the first.
    pub shift: &'a str,
    /// Inserted before the first line.
    pub bullet: &'a str,
}

impl Default for IndentOptions<'_> {
    fn default() -> Self {
        IndentOptions {
            nolead: false,
            shift: "  ",
            bullet: "  ",
        }
    }
}

/// Indent each line of `text`.
///
/// On located lines the marker goes between the lead and the body, so
/// leads stay flush-left and [`crate::format_diagnostics`] can still find
/// them.
///
/// ```
/// use salad_diagnostic::{indent, IndentOptions};
///
/// let options = IndentOptions { bullet: "* ", ..IndentOptions::default() };
/// assert_eq!(
///     indent("a.yml:1:1: outer\nplain", options),
///     "a.yml:1:1: * outer\n  plain"
/// );
/// ```
pub fn indent(text: &str, options: IndentOptions<'_>) -> String {
    let mut lines = text.lines();

    if options.nolead {
        let mut out = lines.next().unwrap_or_default().to_owned();
        for line in lines {
            out.push('\n');
            out.push_str(options.shift);
            out.push_str(line);
        }
        return out;
    }

    lines
        .enumerate()
        .map(|(index, line)| {
            let marker = if index == 0 {
                options.bullet
            } else {
                options.shift
            };
            match parse_prefix(line) {
                Some(prefix) => format!("{}{marker}{}", prefix.lead, prefix.body),
                None => format!("{marker}{line}"),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render `items` as a bulleted list.
///
/// A single item is returned as-is, without a bullet.
pub fn bullets<S: AsRef<str>>(items: &[S], bullet: &str) -> String {
    if let [only] = items {
        return only.as_ref().to_owned();
    }
    let options = IndentOptions {
        bullet,
        ..IndentOptions::default()
    };
    items
        .iter()
        .map(|item| indent(item.as_ref(), options))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests;
