//! Typed navigation over an untyped YAML tree.
//!
//! A [`Node`] pairs a borrowed [`Value`] with the dotted path that led to
//! it. Every step that expects a particular node kind either returns the
//! typed view or a [`ShapeError`] naming the offending path.

use std::collections::BTreeSet;
use std::fmt;

use serde_yaml_ng::{Mapping, Sequence, Value};
use thiserror::Error;

/// Path shown for the document root.
const ROOT_PATH: &str = ".";

/// The kind of a YAML node, as reported in shape errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    String,
    Sequence,
    Mapping,
    Tagged,
}

impl NodeKind {
    /// Classify a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => NodeKind::Null,
            Value::Bool(_) => NodeKind::Bool,
            Value::Number(_) => NodeKind::Number,
            Value::String(_) => NodeKind::String,
            Value::Sequence(_) => NodeKind::Sequence,
            Value::Mapping(_) => NodeKind::Mapping,
            Value::Tagged(_) => NodeKind::Tagged,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Null => write!(f, "null"),
            NodeKind::Bool => write!(f, "boolean"),
            NodeKind::Number => write!(f, "number"),
            NodeKind::String => write!(f, "string"),
            NodeKind::Sequence => write!(f, "sequence"),
            NodeKind::Mapping => write!(f, "mapping"),
            NodeKind::Tagged => write!(f, "tagged value"),
        }
    }
}

/// The document does not have the shape an accessor expected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("missing `{path}`")]
    Missing { path: String },

    #[error("expected {expected} at `{path}`, found {found}")]
    WrongKind {
        path: String,
        expected: NodeKind,
        found: NodeKind,
    },

    #[error("expected {expected} entries at `{path}`, found {found}")]
    Length {
        path: String,
        expected: usize,
        found: usize,
    },

    #[error("mapping at `{path}` has a non-string key")]
    NonStringKey { path: String },
}

impl ShapeError {
    /// Dotted document path the error refers to.
    pub fn path(&self) -> &str {
        match self {
            ShapeError::Missing { path }
            | ShapeError::WrongKind { path, .. }
            | ShapeError::Length { path, .. }
            | ShapeError::NonStringKey { path } => path,
        }
    }
}

/// A borrowed view of one node in the document tree.
#[derive(Debug, Clone)]
pub struct Node<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> Node<'a> {
    /// View of the document root.
    pub fn root(value: &'a Value) -> Self {
        Self {
            value,
            path: ROOT_PATH.to_string(),
        }
    }

    /// Dotted path of this node (`.` for the root).
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::of(self.value)
    }

    fn child_path(&self, segment: &str) -> String {
        if self.path == ROOT_PATH {
            segment.to_string()
        } else {
            format!("{}.{segment}", self.path)
        }
    }

    fn wrong_kind(&self, expected: NodeKind) -> ShapeError {
        ShapeError::WrongKind {
            path: self.path.clone(),
            expected,
            found: self.kind(),
        }
    }

    pub fn as_mapping(&self) -> Result<&'a Mapping, ShapeError> {
        match self.value {
            Value::Mapping(map) => Ok(map),
            _ => Err(self.wrong_kind(NodeKind::Mapping)),
        }
    }

    pub fn as_sequence(&self) -> Result<&'a Sequence, ShapeError> {
        match self.value {
            Value::Sequence(seq) => Ok(seq),
            _ => Err(self.wrong_kind(NodeKind::Sequence)),
        }
    }

    /// The node's string scalar. Numbers and booleans are not coerced.
    pub fn as_str(&self) -> Result<&'a str, ShapeError> {
        match self.value {
            Value::String(s) => Ok(s),
            _ => Err(self.wrong_kind(NodeKind::String)),
        }
    }

    /// Step into `key` of this mapping.
    pub fn get(&self, key: &str) -> Result<Node<'a>, ShapeError> {
        let map = self.as_mapping()?;
        let path = self.child_path(key);
        match map.get(key) {
            Some(value) => Ok(Node { value, path }),
            None => Err(ShapeError::Missing { path }),
        }
    }

    /// The elements of this sequence, which must hold exactly `len` entries.
    pub fn items(&self, len: usize) -> Result<Vec<Node<'a>>, ShapeError> {
        let seq = self.as_sequence()?;
        if seq.len() != len {
            return Err(ShapeError::Length {
                path: self.path.clone(),
                expected: len,
                found: seq.len(),
            });
        }
        Ok(seq
            .iter()
            .enumerate()
            .map(|(i, value)| Node {
                value,
                path: format!("{}[{i}]", self.path),
            })
            .collect())
    }

    /// Every key of this mapping. All keys must be strings.
    pub fn keys(&self) -> Result<BTreeSet<String>, ShapeError> {
        self.as_mapping()?
            .keys()
            .map(|key| match key {
                Value::String(s) => Ok(s.clone()),
                _ => Err(ShapeError::NonStringKey {
                    path: self.path.clone(),
                }),
            })
            .collect()
    }
}
