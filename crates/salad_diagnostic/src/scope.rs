//! Attach source locations to errors escaping a block of validation code.
//!
//! ```
//! use salad_diagnostic::{SourceLine, SourceLineError};
//! use salad_ir::{set_filename, Location, Node, Position};
//!
//! let mut doc = Node::mapping(vec![]).located(Location::new(Position::new(1, 0)));
//! set_filename(&mut doc, "doc.yml");
//!
//! let result: Result<(), SourceLineError> =
//!     SourceLine::new(&doc).run(|| Err::<(), _>("bad type"));
//! assert_eq!(result.unwrap_err().to_string(), "doc.yml:2:1: bad type");
//! ```

use std::fmt;

use salad_ir::{Key, Node};
use tracing::{debug, trace};

use crate::{is_located, resolve, LocateError, SourcePoint};

/// Error raised by [`SourceLine`] when no other error type is requested.
///
/// Displays exactly the located message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct SourceLineError(pub String);

impl From<String> for SourceLineError {
    fn from(message: String) -> Self {
        SourceLineError(message)
    }
}

/// Error scope bound to a document node, and optionally one of its keys.
///
/// Errors passing through [`SourceLine::run`] come out with every line that
/// is not already located prefixed by this node's `file:line:col: ` lead.
/// Nested scopes therefore never double a lead: the innermost located
/// scope wins, and outer scopes only label lines still unlocated.
#[derive(Clone, Debug)]
pub struct SourceLine<'a> {
    node: &'a Node,
    key: Option<Key>,
}

impl<'a> SourceLine<'a> {
    pub fn new(node: &'a Node) -> Self {
        SourceLine { node, key: None }
    }

    pub fn with_key(node: &'a Node, key: impl Into<Key>) -> Self {
        SourceLine {
            node,
            key: Some(key.into()),
        }
    }

    pub fn point(&self) -> Result<SourcePoint, LocateError> {
        resolve(self.node, self.key.as_ref())
    }

    /// Prefix each unlocated line of `message` with this scope's lead.
    ///
    /// An unlocatable node leaves the message untouched.
    pub fn locate_message(&self, message: &str) -> String {
        let lead = match self.point() {
            Ok(point) => point.lead(),
            Err(err) => {
                trace!(%err, "error scope has no location");
                return message.to_owned();
            }
        };

        message
            .lines()
            .map(|line| {
                if is_located(line) {
                    line.to_owned()
                } else {
                    format!("{lead}{line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Build the caller's error type from a located `message`.
    pub fn make_error<R: From<String>>(&self, message: &str) -> R {
        let located = self.locate_message(message);
        debug!(key = ?self.key, "relabelled error with source location");
        R::from(located)
    }

    /// Run `f`, relabelling any error it returns as `R`.
    ///
    /// Success passes through untouched. An error is never dropped: its
    /// full text survives inside the new error.
    pub fn run<T, E, R>(&self, f: impl FnOnce() -> Result<T, E>) -> Result<T, R>
    where
        E: fmt::Display,
        R: From<String>,
    {
        f().map_err(|err| self.make_error(&err.to_string()))
    }
}

/// Run `f` inside a [`SourceLine`] scope for `node` and `key`.
pub fn with_source_line<T, E, R>(
    node: &Node,
    key: Option<Key>,
    f: impl FnOnce() -> Result<T, E>,
) -> Result<T, R>
where
    E: fmt::Display,
    R: From<String>,
{
    SourceLine { node, key }.run(f)
}
