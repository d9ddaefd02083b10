//! Mutable sequence view over a repeated query-language field.

/// Lazy iterator over wrapper views.
pub mod iter;
/// The sequence view itself.
pub mod sequence;

use serde_json::Value;

use crate::error::SetError;

pub use iter::Iter;
pub use sequence::QueryLangSet;

/// Position or key, for callers that pick the lookup kind at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetIndex {
    /// 0-based position in the store.
    Position(usize),
    /// Identifier looked up through the key index.
    Key(String),
}

impl From<usize> for SetIndex {
    fn from(value: usize) -> Self {
        Self::Position(value)
    }
}

impl From<&str> for SetIndex {
    fn from(value: &str) -> Self {
        Self::Key(value.to_string())
    }
}

impl From<String> for SetIndex {
    fn from(value: String) -> Self {
        Self::Key(value)
    }
}

impl TryFrom<&Value> for SetIndex {
    type Error = SetError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(key) => Ok(Self::Key(key.clone())),
            Value::Number(n) => n
                .as_u64()
                .and_then(|v| usize::try_from(v).ok())
                .map(Self::Position)
                .ok_or_else(|| SetError::UnsupportedIndexType(n.to_string())),
            other => Err(SetError::UnsupportedIndexType(other.to_string())),
        }
    }
}
