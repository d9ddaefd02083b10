//! Shared primitive aliases.

/// Ordering weight of a query-language entry; higher runs first.
pub type Priority = i32;

/// Opaque, modifier-specific parameter payload.
pub type Parameters = serde_json::Map<String, serde_json::Value>;
