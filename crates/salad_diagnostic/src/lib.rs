//! Located, human-readable error reporting for annotated documents.
//!
//! Diagnostics travel as plain multi-line text in which a line may start
//! with a `file:line:col: ` location lead:
//!
//! ```text
//! workflow.yml:12:3: field 'run' is required
//! workflow.yml:12:3: field 'inputs' must be a mapping
//! tool.yml:4:1: unknown field 'baseCommnd'
//! ```
//!
//! - [`SourceLine`] wraps validation code and adds a lead to any error
//!   escaping it, resolved with [`resolve`] against the document tree.
//! - [`format_diagnostics`] prints each lead once per run of consecutive
//!   lines and wraps message bodies to the terminal width with [`reflow`].
//! - [`indent`] and [`bullets`] nest sub-diagnostics without disturbing
//!   their leads.

mod format;
mod indent;
mod locate;
mod prefix;
mod reflow;
mod scope;

pub use format::{format_diagnostics, width_hint, FormatOptions, DEFAULT_WIDTH, WIDTH_ENV};
pub use indent::{bullets, indent, IndentOptions};
pub use locate::{resolve, LocateError, SourcePoint};
pub use prefix::{is_located, parse_prefix, LocatedPrefix};
pub use reflow::{reflow, MIN_WIDTH};
pub use scope::{with_source_line, SourceLine, SourceLineError};
