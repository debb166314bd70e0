//! # rich-delta
//!
//! A deterministic, pure data model for representing and algebraically
//! combining edits to attributed rich text - an operational-transform
//! "delta" format.
//!
//! Every edit is an ordered list of insert/retain/delete operations.
//! Deltas can be:
//! - composed into one equivalent combined edit
//! - diffed against each other into a minimal change
//! - sliced, concatenated, and walked line by line
//!
//! The crate owns no I/O, no concurrency and no persistence; hosts build
//! transport, rendering and undo on top of this algebra.
//!
//! ## Example
//!
//! ```rust
//! use rich_delta::{attrs, Delta};
//!
//! let mut document = Delta::new();
//! document.insert("Hello World");
//!
//! let mut change = Delta::new();
//! change
//!     .retain(6)
//!     .retain_with(5, attrs! { "bold" => "true" });
//!
//! let mut expected = Delta::new();
//! expected
//!     .insert("Hello ")
//!     .insert_with("World", attrs! { "bold" => "true" });
//! assert_eq!(expected, document.compose(&change));
//! ```

pub mod attributes;
pub mod delta;
pub mod error;
pub mod iter;
pub mod op;

pub use attributes::AttributeMap;
pub use delta::Delta;
pub use error::{DeltaError, Result};
pub use iter::DeltaIterator;
pub use op::{Op, OpKind};
