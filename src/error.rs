//! Error types for delta operations.

use thiserror::Error;

/// Errors that can occur when combining deltas.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeltaError {
    /// `diff` is only defined over document deltas (insert-only).
    #[error("Cannot diff: {side} delta contains a non-insert operation")]
    NonDocument {
        /// Which operand violated the contract: `"base"` or `"other"`.
        side: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, DeltaError>;
