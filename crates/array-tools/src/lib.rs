//! # array-tools
//!
//! Helpers over nested sequences and mappings: structural classification,
//! canonical ordering, content fingerprints, multi-column sorting, recursive
//! search, key filtering, flattening and positional insertion.
//!
//! Every function is pure: it borrows its input and returns a new [`Value`].
//!
//! ## Quick start
//!
//! ```rust
//! use array_tools::{fingerprint, is_mapping, is_sequence, Value};
//! use serde_json::json;
//!
//! let fruits = Value::from(json!(["banana", "apple"]));
//! let basket = Value::from(json!({"fruits": ["apple", "banana"], "owner": "Ada"}));
//! assert!(is_sequence(&fruits));
//! assert!(is_mapping(&basket));
//!
//! // Same content, different container order, same fingerprint.
//! let reordered = Value::from(json!({"owner": "Ada", "fruits": ["banana", "apple"]}));
//! assert_eq!(fingerprint(&basket).unwrap(), fingerprint(&reordered).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`types`]: `Value` / `Key` data model and JSON conversion
//! - [`classify`]: sequence vs. mapping
//! - [`canonical`]: value order and recursive canonical form
//! - [`fingerprint`]: pluggable serialize + hash pipeline
//! - [`sort`]: stable multi-column row sorting
//! - [`search`]: loose/strict equality and row searches
//! - [`keys`]: key filtering and renaming
//! - [`flatten`]: path-keyed and merge-style flattening
//! - [`insert`]: insertion before/after a key
//! - [`quote`]: quoting every element
//! - [`error`]: error types

pub mod canonical;
pub mod classify;
pub mod error;
pub mod fingerprint;
pub mod flatten;
pub mod insert;
pub mod keys;
mod merge;
pub mod quote;
pub mod search;
pub mod sort;
pub mod types;

pub use canonical::{canonicalize, compare_values};
pub use classify::{is_mapping, is_sequence};
pub use error::ArrayToolsError;
pub use fingerprint::{
    fingerprint, Fingerprinter, JsonSerializer, Sha256Hex, TextHasher, ValueSerializer,
};
pub use flatten::{flatten, flatten_merge, flatten_with_separator};
pub use insert::{insert_after_key, insert_before_key};
pub use keys::{filter_key, filter_key_by, map_keys};
pub use quote::{quotify, quotify_default};
pub use search::{contains_md, loose_eq, search_md, strict_eq, EqualityMode};
pub use sort::{sort_multiple, SortColumn, SortDirection};
pub use types::{Key, Mapping, Value};
