//! End-to-end reporting: annotate a document, validate inside error
//! scopes, then render the collected errors for the terminal.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use salad_diagnostic::{
    bullets, format_diagnostics, resolve, FormatOptions, LocateError, SourceLine, SourceLineError,
};
use salad_ir::{annotate_filename, Key, Location, Node, Position};

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct ValueError(String);

/// ```yaml
/// class: CommandLineTool
/// inputs:
///   - id: threads
///     type: 4
/// ```
fn workflow() -> Node {
    let input = Node::mapping(vec![
        ("id".into(), Node::scalar("threads")),
        ("type".into(), Node::scalar("4")),
    ])
    .located(
        Location::new(Position::new(2, 4))
            .with_key("id", Position::new(2, 4))
            .with_key("type", Position::new(3, 4)),
    );
    let mut doc = Node::mapping(vec![
        ("class".into(), Node::scalar("CommandLineTool")),
        (
            "inputs".into(),
            Node::sequence(vec![input])
                .located(Location::new(Position::new(2, 2)).with_key(0_usize, Position::new(2, 2))),
        ),
    ])
    .located(
        Location::new(Position::new(0, 0))
            .with_key("class", Position::new(0, 0))
            .with_key("inputs", Position::new(1, 0)),
    );
    annotate_filename(&mut doc, "tool.yml");
    doc
}

fn check_type(input: &Node) -> Result<(), SourceLineError> {
    SourceLine::with_key(input, "type").run(|| -> Result<(), String> {
        let Node::Scalar(scalar) = input.get(&"type".into()).map_err(|e| e.to_string())? else {
            return Ok(());
        };
        if scalar.value.parse::<u32>().is_ok() {
            return Err(format!("expected a type name, got number {}", scalar.value));
        }
        Ok(())
    })
}

fn check_inputs(doc: &Node) -> Result<(), SourceLineError> {
    SourceLine::with_key(doc, "inputs").run(|| -> Result<(), String> {
        let inputs = doc.get(&"inputs".into()).map_err(|e| e.to_string())?;
        let errors: Vec<String> = inputs
            .children()
            .filter_map(|input| check_type(input).err())
            .map(|err| err.to_string())
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(format!("invalid inputs\n{}", bullets(&errors, "* ")))
        }
    })
}

#[test]
fn nested_validation_reports_innermost_locations() {
    let err = check_inputs(&workflow()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "tool.yml:2:1: invalid inputs\n\
         tool.yml:4:5: expected a type name, got number 4"
    );
}

#[test]
fn plain_error_in_unlocatable_scope_gets_outer_lead_once() {
    let doc = workflow();
    let plain = doc.get(&"class".into()).unwrap();
    let err: SourceLineError = SourceLine::with_key(&doc, "inputs")
        .run(|| -> Result<(), SourceLineError> {
            SourceLine::new(plain).run(|| Err(ValueError("bad type".to_owned())))
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "tool.yml:2:1: bad type");
}

#[test]
fn aggregated_errors_render_compactly() {
    let doc = workflow();
    let scope = SourceLine::with_key(&doc, "class");
    let errors = [
        scope.make_error::<SourceLineError>("unknown class"),
        scope.make_error::<SourceLineError>("expected one of CommandLineTool, Workflow, ExpressionTool"),
        SourceLine::with_key(&doc, "inputs").make_error::<SourceLineError>("missing outputs"),
    ];
    let text = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");

    assert_eq!(
        format_diagnostics(&text, FormatOptions::with_width(50)),
        "tool.yml:1:1: unknown class\n\
         \x20             expected one of CommandLineTool,\n\
         \x20             Workflow, ExpressionTool\n\
         tool.yml:2:1: missing outputs"
    );
}

#[test]
fn locator_properties() {
    let doc = workflow();
    let inputs = doc.get(&"inputs".into()).unwrap();
    let point = resolve(inputs, Some(&Key::Index(0))).unwrap();
    assert_eq!((point.filename.as_str(), point.line, point.column), ("tool.yml", 3, 3));

    let class = doc.get(&"class".into()).unwrap();
    assert_eq!(
        resolve(class, None),
        Err(LocateError::NotLocatable { kind: "scalar" })
    );
}

#[cfg(unix)]
#[test]
fn file_uri_relative_to_working_directory() {
    assert_eq!(
        salad_ir::relative_name_from("file:///home/user/doc.yml", std::path::Path::new("/home/user")),
        "doc.yml"
    );
}
