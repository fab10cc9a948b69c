//! Resolve a node (or one of its keys) to a display location.

use std::fmt;

use salad_ir::{Key, Node};

/// Why a node could not be located.
///
/// Never shown to the user on its own: callers drop the lead and report
/// the message unlocated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LocateError {
    /// The node was not annotated at parse time.
    #[error("{kind} carries no location metadata")]
    NotLocatable { kind: &'static str },
    /// The node is annotated, but not for this key.
    #[error("no position recorded for key {key}")]
    UnknownKey { key: Key },
    /// Positions are known but no source filename was attached.
    #[error("no source filename recorded")]
    NoFilename,
}

/// A 1-based source location ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourcePoint {
    pub filename: String,
    pub line: u32,
    pub column: u32,
}

impl SourcePoint {
    /// The `file:line:col: ` lead prepended to diagnostic lines.
    pub fn lead(&self) -> String {
        format!("{self}: ")
    }
}

impl fmt::Display for SourcePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.column)
    }
}

/// Resolve where `node` starts, or where `key` starts within it.
pub fn resolve(node: &Node, key: Option<&Key>) -> Result<SourcePoint, LocateError> {
    let location = node
        .location()
        .ok_or(LocateError::NotLocatable { kind: node.kind() })?;

    let position = match key {
        None => location.position,
        Some(key) => location
            .key_position(key)
            .ok_or_else(|| LocateError::UnknownKey { key: key.clone() })?,
    };

    let filename = location.filename.clone().ok_or(LocateError::NoFilename)?;

    // Stored 0-based by the parser.
    Ok(SourcePoint {
        filename,
        line: position.line.saturating_add(1),
        column: position.column.saturating_add(1),
    })
}
