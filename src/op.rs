//! Operations - the atoms a delta is made of.
//!
//! An [`Op`] is one of three kinds:
//! - `Insert`: add text at the current position
//! - `Delete`: remove units from the pre-image document
//! - `Retain`: keep units unchanged, optionally re-formatting them
//!
//! Ops are immutable values; they carry no merge logic. Whether two ops may
//! merge depends on adjacency and ordering context, which only
//! [`Delta::push`](crate::delta::Delta::push) can see.

use crate::attributes::AttributeMap;
use serde::{Deserialize, Serialize};

/// A single edit operation with its formatting attributes.
///
/// Lengths are measured in characters for `Insert` and in document units
/// for `Delete` and `Retain`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Op {
    /// Add `text` at the current position.
    Insert {
        text: String,
        attributes: AttributeMap,
    },
    /// Remove `count` units from the pre-image document.
    ///
    /// Attributes are accepted but carry no meaning: deleted content has
    /// nothing left to format.
    Delete {
        count: usize,
        attributes: AttributeMap,
    },
    /// Keep `count` units unchanged; re-apply `attributes` when non-empty.
    Retain {
        count: usize,
        attributes: AttributeMap,
    },
}

/// The kind of an [`Op`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpKind {
    Insert,
    Delete,
    Retain,
}

impl Op {
    /// Create an insert op.
    pub fn insert(text: impl Into<String>, attributes: AttributeMap) -> Self {
        Op::Insert {
            text: text.into(),
            attributes,
        }
    }

    /// Create a delete op with no attributes.
    pub fn delete(count: usize) -> Self {
        Op::Delete {
            count,
            attributes: AttributeMap::new(),
        }
    }

    /// Create a delete op carrying attributes.
    pub fn delete_with(count: usize, attributes: AttributeMap) -> Self {
        Op::Delete { count, attributes }
    }

    /// Create a retain op.
    pub fn retain(count: usize, attributes: AttributeMap) -> Self {
        Op::Retain { count, attributes }
    }

    /// Length of this op: character count for inserts, unit count otherwise.
    pub fn len(&self) -> usize {
        match self {
            Op::Insert { text, .. } => text.chars().count(),
            Op::Delete { count, .. } | Op::Retain { count, .. } => *count,
        }
    }

    /// True if the op has zero length.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The attributes attached to this op.
    pub fn attributes(&self) -> &AttributeMap {
        match self {
            Op::Insert { attributes, .. }
            | Op::Delete { attributes, .. }
            | Op::Retain { attributes, .. } => attributes,
        }
    }

    /// The kind of this op.
    pub fn kind(&self) -> OpKind {
        match self {
            Op::Insert { .. } => OpKind::Insert,
            Op::Delete { .. } => OpKind::Delete,
            Op::Retain { .. } => OpKind::Retain,
        }
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Op::Insert { .. })
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Op::Delete { .. })
    }

    pub fn is_retain(&self) -> bool {
        matches!(self, Op::Retain { .. })
    }

    /// The inserted text, if this is an insert.
    pub fn insert_text(&self) -> Option<&str> {
        match self {
            Op::Insert { text, .. } => Some(text),
            _ => None,
        }
    }
}
