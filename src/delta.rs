//! Delta - an ordered, self-normalizing sequence of operations.
//!
//! A delta describes either a whole document (insert-only ops) or a change
//! to one (any mix of insert/retain/delete). Both are the same type; the
//! difference is usage convention. Deltas are built incrementally through
//! [`Delta::insert`]/[`Delta::delete`]/[`Delta::retain`], all of which
//! route through [`Delta::push`], the one place that maintains the storage
//! invariants:
//!
//! 1. no stored op has zero length
//! 2. adjacent same-kind ops with identical attributes are merged
//! 3. an insert never sits directly after a delete (insert-first ordering)
//! 4. adjacent deletes are merged regardless of attributes
//!
//! The derived algebra - [`compose`](Delta::compose), [`diff`](Delta::diff),
//! [`slice`](Delta::slice), [`concat`](Delta::concat),
//! [`each_line`](Delta::each_line) - always produces new values and never
//! mutates its operands.

use std::cmp::min;
use std::ops::{Bound, RangeBounds};

use serde::{Deserialize, Serialize};
use similar::{DiffOp, TextDiff};

use crate::attributes::{self, AttributeMap};
use crate::error::{DeltaError, Result};
use crate::iter::DeltaIterator;
use crate::op::{Op, OpKind};

/// An ordered sequence of operations describing a document or a change.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delta {
    ops: Vec<Op>,
}

impl Delta {
    /// Create an empty delta.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored operations.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// The op at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Op> {
        self.ops.get(index)
    }

    /// Append an insert of unformatted text. Empty text is a no-op.
    pub fn insert(&mut self, text: impl Into<String>) -> &mut Self {
        self.insert_with(text, AttributeMap::new())
    }

    /// Append an insert of formatted text. Empty text is a no-op.
    pub fn insert_with(&mut self, text: impl Into<String>, attributes: AttributeMap) -> &mut Self {
        let text = text.into();
        if text.is_empty() {
            return self;
        }
        self.push(Op::Insert { text, attributes })
    }

    /// Append a delete of `count` units. Zero is a no-op.
    pub fn delete(&mut self, count: usize) -> &mut Self {
        if count == 0 {
            return self;
        }
        self.push(Op::delete(count))
    }

    /// Append a bare retain of `count` units. Zero is a no-op.
    pub fn retain(&mut self, count: usize) -> &mut Self {
        self.retain_with(count, AttributeMap::new())
    }

    /// Append a retain of `count` units carrying a format change.
    /// Zero is a no-op.
    pub fn retain_with(&mut self, count: usize, attributes: AttributeMap) -> &mut Self {
        if count == 0 {
            return self;
        }
        self.push(Op::Retain { count, attributes })
    }

    /// Append `new_op`, merging and reordering to keep the sequence
    /// normalized.
    ///
    /// Adjacent deletes merge unconditionally. An insert arriving directly
    /// after a delete slides in front of it: applying the delete before or
    /// after new content at the same position yields the same document, and
    /// the canonical insert-first order simplifies `compose` and `diff`.
    /// Adjacent inserts or retains with identical attributes merge into one.
    pub fn push(&mut self, new_op: Op) -> &mut Self {
        if new_op.is_empty() {
            return self;
        }
        let mut index = self.ops.len();
        if index == 0 {
            self.ops.push(new_op);
            return self;
        }

        if new_op.is_delete() && self.ops[index - 1].is_delete() {
            let merged = self.ops[index - 1].len() + new_op.len();
            self.ops[index - 1] = Op::delete(merged);
            return self;
        }

        if self.ops[index - 1].is_delete() && new_op.is_insert() {
            index -= 1;
            if index == 0 {
                self.ops.insert(0, new_op);
                return self;
            }
        }

        if new_op.attributes() == self.ops[index - 1].attributes() {
            let merged = match (&self.ops[index - 1], &new_op) {
                (Op::Insert { text: last, .. }, Op::Insert { text, attributes }) => {
                    Some(Op::insert(format!("{last}{text}"), attributes.clone()))
                }
                (Op::Retain { count: last, .. }, Op::Retain { count, attributes }) => {
                    Some(Op::retain(last + count, attributes.clone()))
                }
                _ => None,
            };
            if let Some(op) = merged {
                self.ops[index - 1] = op;
                return self;
            }
        }

        if index == self.ops.len() {
            self.ops.push(new_op);
        } else {
            self.ops.insert(index, new_op);
        }
        self
    }

    /// Drop a trailing bare retain; a change delta implicitly retains the
    /// rest of the document. An attributed trailing retain is kept.
    pub fn chop(&mut self) -> &mut Self {
        if let Some(Op::Retain { attributes, .. }) = self.ops.last() {
            if attributes.is_empty() {
                self.ops.pop();
            }
        }
        self
    }

    /// Sum of op lengths.
    pub fn len(&self) -> usize {
        self.ops.iter().map(Op::len).sum()
    }

    /// True if no ops are stored.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Net document growth when this change is applied: inserted length
    /// minus deleted length.
    pub fn change_length(&self) -> isize {
        self.ops.iter().fold(0, |length, op| match op {
            Op::Insert { .. } => length + op.len() as isize,
            Op::Delete { .. } => length - op.len() as isize,
            Op::Retain { .. } => length,
        })
    }

    /// The sub-delta covering `range`, splitting boundary ops as needed.
    ///
    /// Out-of-range bounds clamp; slicing past the end simply yields less
    /// content.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Delta {
        let start = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&n) => n.saturating_add(1),
            Bound::Excluded(&n) => n,
            Bound::Unbounded => usize::MAX,
        };

        let mut ops = Vec::new();
        let mut iter = DeltaIterator::new(&self.ops);
        let mut index = 0;
        while index < end && iter.has_next() {
            if index < start {
                index += iter.take(start - index).len();
            } else {
                let op = iter.take(end - index);
                index += op.len();
                ops.push(op);
            }
        }
        Delta { ops }
    }

    /// A new delta holding this delta's ops followed by `other`'s.
    ///
    /// The first appended op goes through [`push`](Delta::push) so a
    /// boundary merge can occur (adjacent same-attribute inserts fuse).
    pub fn concat(&self, other: &Delta) -> Delta {
        let mut delta = Delta {
            ops: self.ops.clone(),
        };
        if let Some((first, rest)) = other.ops.split_first() {
            delta.push(first.clone());
            delta.ops.extend_from_slice(rest);
        }
        delta
    }

    /// Combine sequential edits: the returned delta applied to a base
    /// document is equivalent to applying `self`, then `other` to the
    /// result. Neither operand is modified.
    pub fn compose(&self, other: &Delta) -> Delta {
        let mut this_iter = DeltaIterator::new(&self.ops);
        let mut other_iter = DeltaIterator::new(&other.ops);

        // Inserts at the head of self that fit entirely inside a leading
        // bare retain of other pass through untouched.
        let mut head = Vec::new();
        if let Some(Op::Retain { count, attributes }) = other_iter.peek() {
            if attributes.is_empty() {
                let mut remaining = *count;
                while this_iter.peek_kind() == OpKind::Insert
                    && this_iter.peek_len() <= remaining
                {
                    remaining -= this_iter.peek_len();
                    head.push(this_iter.next_op());
                }
                let consumed = count - remaining;
                if consumed > 0 {
                    other_iter.take(consumed);
                }
            }
        }

        let mut delta = Delta { ops: head };
        while this_iter.has_next() || other_iter.has_next() {
            if other_iter.peek_kind() == OpKind::Insert {
                // content introduced by other is unconditionally kept
                delta.push(other_iter.next_op());
            } else if this_iter.peek_kind() == OpKind::Delete {
                // a deletion from self survives whatever other does there
                delta.push(this_iter.next_op());
            } else {
                let length = min(this_iter.peek_len(), other_iter.peek_len());
                let this_op = this_iter.take(length);
                let other_op = other_iter.take(length);
                if let Op::Retain {
                    attributes: ref other_attrs,
                    ..
                } = other_op
                {
                    let merged = attributes::compose(this_op.attributes(), other_attrs);
                    let composed = match this_op {
                        Op::Insert { text, .. } => Op::insert(text, merged),
                        _ => Op::retain(length, merged),
                    };
                    delta.push(composed.clone());
                    // Other exhausted and the emitted op stands unmerged at
                    // the tail: the rest of self passes through unchanged.
                    if !other_iter.has_next() && delta.ops.last() == Some(&composed) {
                        let rest = Delta {
                            ops: this_iter.rest(),
                        };
                        let mut joined = delta.concat(&rest);
                        joined.chop();
                        return joined;
                    }
                } else if other_op.is_delete() && this_op.is_retain() {
                    delta.push(other_op);
                }
                // An insert in self met by a delete in other cancels out.
            }
        }

        delta.chop();
        delta
    }

    /// The minimal change turning this document into `other`.
    ///
    /// Both operands must be document deltas (insert-only); otherwise
    /// [`DeltaError::NonDocument`] names the offending side. The plain-text
    /// diff runs per character; its spans are replayed against the
    /// attributed ops of both sides.
    pub fn diff(&self, other: &Delta) -> Result<Delta> {
        let base_text = document_text(&self.ops).ok_or(DeltaError::NonDocument { side: "base" })?;
        let other_text =
            document_text(&other.ops).ok_or(DeltaError::NonDocument { side: "other" })?;

        let mut delta = Delta::new();
        if self == other {
            return Ok(delta);
        }

        let text_diff = TextDiff::from_chars(base_text.as_str(), other_text.as_str());
        let mut this_iter = DeltaIterator::new(&self.ops);
        let mut other_iter = DeltaIterator::new(&other.ops);

        for span in text_diff.ops() {
            match *span {
                DiffOp::Insert { new_len, .. } => {
                    push_inserted_span(&mut delta, &mut other_iter, new_len);
                }
                DiffOp::Delete { old_len, .. } => {
                    push_deleted_span(&mut delta, &mut this_iter, old_len);
                }
                DiffOp::Replace {
                    old_len, new_len, ..
                } => {
                    push_deleted_span(&mut delta, &mut this_iter, old_len);
                    push_inserted_span(&mut delta, &mut other_iter, new_len);
                }
                DiffOp::Equal { len, .. } => {
                    let mut remaining = len;
                    while remaining > 0 {
                        let length =
                            min(min(this_iter.peek_len(), other_iter.peek_len()), remaining);
                        let this_op = this_iter.take(length);
                        let other_op = other_iter.take(length);
                        if this_op.insert_text() == other_op.insert_text() {
                            delta.push(Op::retain(
                                length,
                                attributes::diff(this_op.attributes(), other_op.attributes()),
                            ));
                        } else {
                            // equal per the text diff but not per the ops:
                            // treat as a wholesale replace
                            delta.push(other_op).delete(length);
                        }
                        remaining -= length;
                    }
                }
            }
        }

        delta.chop();
        Ok(delta)
    }

    /// Walk a document delta line by line, splitting at `'\n'`.
    ///
    /// `callback(line, attributes, index)` receives each line's content as
    /// its own delta and the attributes of the newline op that closed it
    /// (per-line formatting lives on the newline character). Returning
    /// `false` stops the walk. A trailing unterminated line is flushed with
    /// empty attributes. A non-insert op ends the walk early; lines are
    /// only meaningful over document deltas.
    pub fn each_line<F>(&self, callback: F)
    where
        F: FnMut(&Delta, &AttributeMap, usize) -> bool,
    {
        self.each_line_with(callback, "\n")
    }

    /// [`each_line`](Delta::each_line) with a caller-chosen line separator.
    pub fn each_line_with<F>(&self, mut callback: F, newline: &str)
    where
        F: FnMut(&Delta, &AttributeMap, usize) -> bool,
    {
        let mut iter = DeltaIterator::new(&self.ops);
        let mut line = Delta::new();
        let mut line_index = 0;

        while iter.has_next() {
            if iter.peek_kind() != OpKind::Insert {
                return;
            }
            let Some(op) = iter.peek() else {
                return;
            };
            let start = op.len() - iter.peek_len();
            let newline_at = op
                .insert_text()
                .and_then(|text| find_from(text, newline, start));

            match newline_at {
                None => {
                    line.push(iter.next_op());
                }
                Some(0) => {
                    let attributes = iter.take(1).attributes().clone();
                    if !callback(&line, &attributes, line_index) {
                        return;
                    }
                    line_index += 1;
                    line = Delta::new();
                }
                Some(offset) => {
                    line.push(iter.take(offset));
                }
            }
        }

        if !line.is_empty() {
            callback(&line, &AttributeMap::new(), line_index);
        }
    }
}

impl From<Vec<Op>> for Delta {
    fn from(ops: Vec<Op>) -> Self {
        let mut delta = Delta::new();
        for op in ops {
            delta.push(op);
        }
        delta
    }
}

impl<'a> IntoIterator for &'a Delta {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

/// Concatenated insert text of a document delta, or `None` if any op is
/// not an insert.
fn document_text(ops: &[Op]) -> Option<String> {
    let mut text = String::new();
    for op in ops {
        text.push_str(op.insert_text()?);
    }
    Some(text)
}

/// Replay an inserted span of `length` chars from `iter` into `delta`,
/// keeping whatever attributes the source ops carry.
fn push_inserted_span(delta: &mut Delta, iter: &mut DeltaIterator<'_>, length: usize) {
    let mut remaining = length;
    while remaining > 0 {
        let op = iter.take(remaining);
        remaining -= op.len();
        delta.push(op);
    }
}

/// Discard a span of `length` chars from `iter` and record it as one delete.
fn push_deleted_span(delta: &mut Delta, iter: &mut DeltaIterator<'_>, length: usize) {
    let mut remaining = length;
    while remaining > 0 {
        remaining -= iter.take(remaining).len();
    }
    delta.delete(length);
}

/// Position of `pattern` in `text` at or after char offset `start`,
/// as a char offset relative to `start`.
fn find_from(text: &str, pattern: &str, start: usize) -> Option<usize> {
    let byte_start = text
        .char_indices()
        .nth(start)
        .map(|(at, _)| at)
        .unwrap_or(text.len());
    let found = text[byte_start..].find(pattern)?;
    Some(text[byte_start..byte_start + found].chars().count())
}
