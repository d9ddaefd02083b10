//! List-like editing of repeated query-language fields.
//!
//! A [`set::QueryLangSet`] borrows a repeated field owned by some enclosing
//! message and exposes it as a mutable sequence of [`querylang::QueryLang`]
//! views. The field stays the single source of truth.
//!
//! # Examples
//!
//! ```
//! use qlset::{
//!     core::store::RepeatedField,
//!     querylang::{QueryLang, QueryLangRecord},
//!     set::QueryLangSet,
//! };
//!
//! let mut field: RepeatedField<QueryLangRecord> = RepeatedField::new();
//! let mut set = QueryLangSet::new(&mut field);
//!
//! set.append(&QueryLang::new("FilterQL").with_parameter("lookups", "tags__in"))
//!     .expect("append");
//! set.append(&QueryLang::new("SliceQL").with_parameter("end", 10))
//!     .expect("append");
//! set.append(&serde_json::json!({"name": "FilterQL", "priority": 2}))
//!     .expect("append");
//! assert_eq!(set.len(), 3);
//!
//! set.build();
//! assert_eq!(set.get_by_key("FilterQL").expect("key").priority(), 2);
//!
//! set.reverse();
//! let names: Vec<String> = set.iter().map(|ql| ql.name().to_string()).collect();
//! assert_eq!(names, ["FilterQL", "SliceQL", "FilterQL"]);
//! ```
#![deny(missing_docs)]

/// Tunables for the sequence view.
pub mod config;
/// Backing store capabilities and key index.
pub mod core;
/// Error taxonomy.
pub mod error;
/// Query-language records, wrappers, and append inputs.
pub mod querylang;
/// Mutable sequence view.
pub mod set;
/// Shared primitive aliases.
pub mod types;
