//! Word-boundary line wrapping.

/// Narrowest width [`reflow`] will wrap to.
pub const MIN_WIDTH: usize = 20;

/// Wrap `text` at spaces so lines stay within `max_width` characters where
/// a break point allows it, starting every continuation line with `shift`.
///
/// Text that already fits, or contains no space at all, is returned as-is.
/// When no space falls inside the limit the line breaks at the first space
/// after it instead, so a long word overflows rather than being cut.
///
/// ```
/// use salad_diagnostic::reflow;
///
/// let wrapped = reflow("alpha beta gamma delta epsilon zeta", 20, "  ");
/// assert_eq!(wrapped, "alpha beta gamma\n  delta epsilon zeta");
/// ```
pub fn reflow(text: &str, max_width: usize, shift: &str) -> String {
    let max_width = max_width.max(MIN_WIDTH);
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(split) = break_point(rest, max_width) {
        out.push_str(&rest[..split]);
        out.push('\n');
        out.push_str(shift);
        // The space at `split` is consumed by the line break.
        rest = &rest[split + 1..];
    }
    out.push_str(rest);
    out
}

/// Byte index of the space to break `text` at, or `None` to keep it whole.
fn break_point(text: &str, max_width: usize) -> Option<usize> {
    // Only text longer than `max_width` characters is broken.
    let (limit, _) = text.char_indices().nth(max_width)?;
    match text[..limit].rfind(' ') {
        Some(space) if space > 0 => Some(space),
        // Nothing usable inside the limit: take the first later space,
        // skipping a leading one.
        leading => {
            let from = leading.map_or(0, |space| space + 1);
            text[from..].find(' ').map(|space| from + space)
        }
    }
}
