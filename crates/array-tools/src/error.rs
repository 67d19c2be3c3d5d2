//! Error types for array-tools operations.

use thiserror::Error;

use crate::types::Key;

/// Errors that can occur while transforming or fingerprinting a value.
#[derive(Error, Debug)]
pub enum ArrayToolsError {
    /// The operation needs a sequence or mapping but received a scalar.
    #[error("expected a sequence or mapping, found {found}")]
    NotAContainer { found: &'static str },

    /// A nested container was found where only scalars are accepted.
    #[error("expected a scalar at key {key}, found a container")]
    NotAScalar { key: Key },

    /// A sort column is absent from one of the rows being sorted.
    #[error("missing sort key {column} in row {row}")]
    MissingSortKey { column: Key, row: Key },

    /// NaN or an infinity cannot be written by the JSON serializer.
    /// Includes the dot-separated path of the offending leaf.
    #[error("non-finite number at {path}")]
    NonFiniteNumber { path: String },

    /// Two keys of one mapping, such as `Key::Index(5)` and
    /// `Key::Name("5")`, render to the same text.
    #[error("key {key} appears twice at {path}")]
    DuplicateKey { key: String, path: String },

    /// The JSON serializer itself failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout array-tools.
pub type Result<T> = std::result::Result<T, ArrayToolsError>;
