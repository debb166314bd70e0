//! Split-consuming cursor over an op sequence.
//!
//! [`DeltaIterator`] is the shared substrate of `compose`, `diff`, `slice`
//! and `each_line`: a cursor that can consume an arbitrary sub-length of the
//! current op, transparently splitting it into a freshly built [`Op`].
//!
//! Past the end of the sequence the cursor synthesizes an unbounded retain
//! (`peek_len()` of `usize::MAX`), encoding the convention that a change
//! delta implicitly retains the untouched remainder of the document. This
//! keeps the min-of-lengths loops in `compose` and `diff` branch-free at the
//! end-of-sequence boundary.

use crate::attributes::AttributeMap;
use crate::op::{Op, OpKind};

/// Cursor state: an index into the op slice plus an offset into the op at
/// that index. An explicit pair rather than a std `Iterator`, because
/// [`rest`](DeltaIterator::rest) needs save/restore of the position and
/// [`take`](DeltaIterator::take) needs a caller-chosen consumption length.
#[derive(Debug)]
pub struct DeltaIterator<'a> {
    ops: &'a [Op],
    index: usize,
    offset: usize,
}

impl<'a> DeltaIterator<'a> {
    pub fn new(ops: &'a [Op]) -> Self {
        Self {
            ops,
            index: 0,
            offset: 0,
        }
    }

    /// True while finite content remains.
    pub fn has_next(&self) -> bool {
        self.peek_len() != usize::MAX
    }

    /// Remaining length of the op under the cursor, `usize::MAX` past the end.
    pub fn peek_len(&self) -> usize {
        match self.ops.get(self.index) {
            Some(op) => op.len() - self.offset,
            None => usize::MAX,
        }
    }

    /// Kind of the op under the cursor; `Retain` past the end.
    pub fn peek_kind(&self) -> OpKind {
        match self.ops.get(self.index) {
            Some(op) => op.kind(),
            None => OpKind::Retain,
        }
    }

    /// The raw (unsplit) op under the cursor.
    pub fn peek(&self) -> Option<&'a Op> {
        self.ops.get(self.index)
    }

    /// Consume the whole remainder of the op under the cursor.
    pub fn next_op(&mut self) -> Op {
        self.take(usize::MAX)
    }

    /// Consume up to `max_len` units from the op under the cursor.
    ///
    /// Returns a freshly built op of the same kind and attributes scoped to
    /// exactly the consumed length; the stored op is never modified. Past
    /// the end of the sequence this returns an unbounded bare retain.
    pub fn take(&mut self, max_len: usize) -> Op {
        let ops = self.ops;
        let Some(op) = ops.get(self.index) else {
            return Op::retain(usize::MAX, AttributeMap::new());
        };

        let offset = self.offset;
        let remaining = op.len() - offset;
        let length = if max_len >= remaining {
            self.index += 1;
            self.offset = 0;
            remaining
        } else {
            self.offset += max_len;
            max_len
        };

        match op {
            Op::Delete { .. } => Op::delete(length),
            Op::Retain { attributes, .. } => Op::retain(length, attributes.clone()),
            Op::Insert { text, attributes } => {
                let piece: String = text.chars().skip(offset).take(length).collect();
                Op::insert(piece, attributes.clone())
            }
        }
    }

    /// The remaining un-consumed ops, without moving the cursor.
    ///
    /// When the cursor sits mid-op the split remainder of that op is
    /// materialized as the first element.
    pub fn rest(&mut self) -> Vec<Op> {
        if !self.has_next() {
            Vec::new()
        } else if self.offset == 0 {
            self.ops[self.index..].to_vec()
        } else {
            let offset = self.offset;
            let index = self.index;
            let head = self.next_op();
            let mut rest = vec![head];
            rest.extend_from_slice(&self.ops[self.index..]);
            self.index = index;
            self.offset = offset;
            rest
        }
    }
}
