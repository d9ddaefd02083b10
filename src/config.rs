//! Tunables for [`crate::set::QueryLangSet`].

/// What `insert` does with an index greater than the current length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertBounds {
    /// Fail with [`crate::error::SetError::IndexOutOfRange`].
    #[default]
    Reject,
    /// Treat the index as `len` and append.
    Clamp,
}

/// Per-set configuration.
#[derive(Debug, Clone, Default)]
pub struct SetConfig {
    /// Policy for insert positions past the end.
    pub insert_bounds: InsertBounds,
}
