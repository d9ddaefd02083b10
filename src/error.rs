//! Error taxonomy shared by every set operation.

use thiserror::Error;

/// Failure raised synchronously by a [`crate::set::QueryLangSet`] operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    /// Positional index outside `[0, len)`, or an insert past the end under
    /// [`crate::config::InsertBounds::Reject`].
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Store length at the time of the call.
        len: usize,
    },
    /// Key absent from the key index, including before the first `build`.
    #[error("key not found: {0}")]
    KeyNotFound(String),
    /// Append input matches none of the accepted shapes.
    #[error("unknown type {0}")]
    UnsupportedType(String),
    /// Dynamic index that is neither a non-negative integer nor a string.
    #[error("do not support this index {0}")]
    UnsupportedIndexType(String),
}

/// Result alias for set operations.
pub type SetResult<T> = Result<T, SetError>;
