//! Annotated document tree for structured-text documents.
//!
//! The parser (external to this crate) builds a [`Node`] tree and records,
//! for each mapping or sequence, where it started and where each of its
//! keys sits in the source. Diagnostics use that metadata to point the
//! user at the offending line.
//!
//! # Positions
//!
//! Positions are stored 0-based, exactly as the parser reports them, and
//! are converted to 1-based only when rendered for display.
//!
//! ```
//! use salad_ir::{Location, Node, Position};
//!
//! let doc = Node::mapping(vec![("name".into(), Node::scalar("tool"))]).located(
//!     Location::new(Position::new(0, 0)).with_key("name", Position::new(0, 6)),
//! );
//!
//! let location = doc.location().map(|loc| loc.key_position(&"name".into()));
//! assert_eq!(location, Some(Some(Position::new(0, 6))));
//! ```

mod filename;
mod node;

pub use filename::{
    annotate_filename, relative_name, relative_name_from, set_filename, FILE_SCHEME,
};
pub use node::{Key, Location, Mapping, Node, NodeError, Position, Scalar, Sequence};
