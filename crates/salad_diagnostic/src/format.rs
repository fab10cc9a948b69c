//! Compact terminal rendering of multi-line diagnostics.
//!
//! Consecutive lines sharing a location lead print the lead once; the
//! following lines are indented to line up under the first body. Each
//! body is wrapped to the terminal width.
//!
//! ```text
//! doc.yml:3:5: field 'name' is required
//!              field 'id' must be a string
//! doc.yml:9:1: unknown field 'baseCommnd'
//! ```

use tracing::trace;

use crate::{parse_prefix, reflow};

/// Width used when no explicit width or usable hint is available.
pub const DEFAULT_WIDTH: usize = 100;

/// Environment variable holding the terminal column count.
pub const WIDTH_ENV: &str = "COLUMNS";

/// Options for [`format_diagnostics`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Maximum line width. `None` consults [`width_hint`].
    pub width: Option<usize>,
}

impl FormatOptions {
    pub fn with_width(width: usize) -> Self {
        FormatOptions { width: Some(width) }
    }

    /// The width to wrap to, reading the hint only when unset.
    pub fn resolve_width(self) -> usize {
        self.width.unwrap_or_else(width_hint)
    }
}

/// Terminal width from `COLUMNS`, or [`DEFAULT_WIDTH`].
pub fn width_hint() -> usize {
    parse_width(std::env::var(WIDTH_ENV).ok().as_deref()).unwrap_or(DEFAULT_WIDTH)
}

fn parse_width(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse().ok().filter(|&width| width > 0)
}

/// Collapse repeated location leads and wrap bodies to the line width.
///
/// Lines without a lead pass through verbatim. A located line whose lead
/// matches the most recent located line's lead prints spaces in place of
/// the lead. Wrapped continuation lines align under the body text.
#[tracing::instrument(level = "trace", skip_all, fields(width = tracing::field::Empty))]
pub fn format_diagnostics(text: &str, options: FormatOptions) -> String {
    let width = options.resolve_width();
    tracing::Span::current().record("width", width);

    let mut current: Option<&str> = None;
    let mut out = Vec::new();
    for line in text.lines() {
        let Some(prefix) = parse_prefix(line) else {
            out.push(line.to_owned());
            continue;
        };

        let lead_width = prefix.lead.chars().count();
        let shift = " ".repeat(lead_width + prefix.indent.len());
        let body = reflow(prefix.body, width.saturating_sub(lead_width), &shift);

        if current == Some(prefix.lead) {
            trace!(lead = prefix.lead, "repeated lead");
            out.push(format!("{:lead_width$}{body}", ""));
        } else {
            current = Some(prefix.lead);
            out.push(format!("{}{body}", prefix.lead));
        }
    }
    out.join("\n")
}
