//! Document nodes and their parse-time location metadata.

use std::fmt;

use rustc_hash::FxHashMap;

/// A 0-based (line, column) pair as recorded by the parser.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

/// Key into a node's position table.
///
/// Mappings are keyed by field name, sequences by item index.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Field(String),
    Index(usize),
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Field(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Field(name)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Field(name) => write!(f, "'{name}'"),
            Key::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Location metadata attached to a node at parse time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    /// Display name of the source document, set by [`crate::annotate_filename`].
    pub filename: Option<String>,
    /// Where the node itself starts.
    pub position: Position,
    /// Where each key (mapping field or sequence index) starts.
    pub positions: FxHashMap<Key, Position>,
}

impl Location {
    pub fn new(position: Position) -> Self {
        Location {
            filename: None,
            position,
            positions: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<Key>, position: Position) -> Self {
        self.positions.insert(key.into(), position);
        self
    }

    /// Position recorded for `key`, if the parser saw it.
    pub fn key_position(&self, key: &Key) -> Option<Position> {
        self.positions.get(key).copied()
    }
}

/// Error from navigating a [`Node`] tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    /// The node has no entry under the key.
    #[error("{kind} has no entry {key}")]
    Missing { key: Key, kind: &'static str },
    /// The key type does not apply to this kind of node.
    #[error("cannot look up {key} in a {kind}")]
    WrongKind { key: Key, kind: &'static str },
}

/// A plain value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scalar {
    pub value: String,
    pub location: Option<Location>,
}

/// An ordered key/value node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mapping {
    pub entries: Vec<(String, Node)>,
    pub location: Option<Location>,
}

/// An ordered list node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence {
    pub items: Vec<Node>,
    pub location: Option<Location>,
}

/// A node of a parsed document.
///
/// Location metadata is optional on every variant. Plain scalars usually
/// carry none, which makes them unlocatable for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Scalar(Scalar),
    Mapping(Mapping),
    Sequence(Sequence),
}

impl Node {
    pub fn scalar(value: impl Into<String>) -> Self {
        Node::Scalar(Scalar {
            value: value.into(),
            location: None,
        })
    }

    pub fn mapping(entries: Vec<(String, Node)>) -> Self {
        Node::Mapping(Mapping {
            entries,
            location: None,
        })
    }

    pub fn sequence(items: Vec<Node>) -> Self {
        Node::Sequence(Sequence {
            items,
            location: None,
        })
    }

    /// Attach location metadata, replacing any already present.
    #[must_use]
    pub fn located(mut self, location: Location) -> Self {
        *self.location_slot() = Some(location);
        self
    }

    pub fn location(&self) -> Option<&Location> {
        match self {
            Node::Scalar(s) => s.location.as_ref(),
            Node::Mapping(m) => m.location.as_ref(),
            Node::Sequence(s) => s.location.as_ref(),
        }
    }

    pub fn location_mut(&mut self) -> Option<&mut Location> {
        self.location_slot().as_mut()
    }

    fn location_slot(&mut self) -> &mut Option<Location> {
        match self {
            Node::Scalar(s) => &mut s.location,
            Node::Mapping(m) => &mut m.location,
            Node::Sequence(s) => &mut s.location,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Node::Scalar(_) => "scalar",
            Node::Mapping(_) => "mapping",
            Node::Sequence(_) => "sequence",
        }
    }

    /// Look up a direct child by field name or index.
    pub fn get(&self, key: &Key) -> Result<&Node, NodeError> {
        let child = match (self, key) {
            (Node::Mapping(m), Key::Field(name)) => m
                .entries
                .iter()
                .find(|(field, _)| field == name)
                .map(|(_, node)| node),
            (Node::Sequence(s), Key::Index(index)) => s.items.get(*index),
            _ => {
                return Err(NodeError::WrongKind {
                    key: key.clone(),
                    kind: self.kind(),
                })
            }
        };
        child.ok_or_else(|| NodeError::Missing {
            key: key.clone(),
            kind: self.kind(),
        })
    }

    /// Direct children in document order.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        let (fields, items): (&[(String, Node)], &[Node]) = match self {
            Node::Scalar(_) => (&[], &[]),
            Node::Mapping(m) => (m.entries.as_slice(), &[]),
            Node::Sequence(s) => (&[], s.items.as_slice()),
        };
        fields.iter().map(|(_, node)| node).chain(items)
    }

    pub(crate) fn children_mut(&mut self) -> Vec<&mut Node> {
        match self {
            Node::Scalar(_) => Vec::new(),
            Node::Mapping(m) => m.entries.iter_mut().map(|(_, node)| node).collect(),
            Node::Sequence(s) => s.items.iter_mut().collect(),
        }
    }
}
