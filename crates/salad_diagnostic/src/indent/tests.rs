use super::*;
use pretty_assertions::assert_eq;

#[test]
fn default_indents_every_line() {
    assert_eq!(indent("a\nb", IndentOptions::default()), "  a\n  b");
}

#[test]
fn bullet_marks_first_line_only() {
    let options = IndentOptions {
        bullet: "- ",
        ..IndentOptions::default()
    };
    assert_eq!(indent("a\nb\nc", options), "- a\n  b\n  c");
}

#[test]
fn marker_goes_after_lead() {
    let options = IndentOptions {
        bullet: "* ",
        shift: "  ",
        nolead: false,
    };
    assert_eq!(
        indent("a.yml:1:1: outer\na.yml:2:1:  inner", options),
        "a.yml:1:1: * outer\na.yml:2:1:    inner"
    );
}

#[test]
fn nolead_keeps_first_line() {
    let options = IndentOptions {
        nolead: true,
        shift: "    ",
        ..IndentOptions::default()
    };
    assert_eq!(
        indent("first\nsecond\nthird", options),
        "first\n    second\n    third"
    );
    assert_eq!(indent("", options), "");
}

#[test]
fn bullets_single_item_unchanged() {
    assert_eq!(bullets(&["only item"], "- "), "only item");
}

#[test]
fn bullets_many_items() {
    let items = vec!["a.yml:1:1: x".to_owned(), "y\nz".to_owned()];
    assert_eq!(bullets(&items, "- "), "a.yml:1:1: - x\n- y\n  z");
}

#[test]
fn bullets_empty() {
    let items: [&str; 0] = [];
    assert_eq!(bullets(&items, "- "), "");
}

#[test]
fn indented_leads_still_deduplicate() {
    let text = bullets(&["a.yml:1:1: one", "a.yml:1:1: two"], "* ");
    assert_eq!(
        crate::format_diagnostics(&text, crate::FormatOptions::with_width(80)),
        "a.yml:1:1: * one\n           * two"
    );
}
