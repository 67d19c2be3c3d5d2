//! Content fingerprints: canonicalize, serialize, digest.
//!
//! Two values with the same content produce the same fingerprint regardless
//! of the order their containers were built in. The pipeline is:
//!
//! 1. [`canonicalize`] the value (skipped when `sort_recursive` is off),
//! 2. turn it into text with a [`ValueSerializer`] (default: [`JsonSerializer`]),
//! 3. digest the text with a [`TextHasher`] (default: [`Sha256Hex`]).
//!
//! Both strategies are plain traits, and closures with the matching
//! signature implement them, so callers can swap in their own encoding or
//! digest.
//!
//! # Example
//! ```
//! use array_tools::{fingerprint, Fingerprinter, Value};
//! use serde_json::json;
//!
//! let a = Value::from(json!({"name": "apple", "tags": ["red", "fruit"]}));
//! let b = Value::from(json!({"tags": ["fruit", "red"], "name": "apple"}));
//! assert_eq!(fingerprint(&a).unwrap(), fingerprint(&b).unwrap());
//!
//! // Order matters again once sorting is turned off.
//! let raw = Fingerprinter::new().sort_recursive(false);
//! assert_ne!(raw.fingerprint(&a).unwrap(), raw.fingerprint(&b).unwrap());
//! ```

use sha2::{Digest, Sha256};

use crate::canonical::canonicalize;
use crate::error::Result;
use crate::types::Value;

/// Turns a value into the text that gets hashed.
pub trait ValueSerializer {
    fn serialize(&self, value: &Value) -> Result<String>;
}

/// Digests serialized text into the fingerprint string.
pub trait TextHasher {
    fn hash(&self, text: &str) -> String;
}

impl<F> ValueSerializer for F
where
    F: Fn(&Value) -> Result<String>,
{
    fn serialize(&self, value: &Value) -> Result<String> {
        self(value)
    }
}

impl<F> TextHasher for F
where
    F: Fn(&str) -> String,
{
    fn hash(&self, text: &str) -> String {
        self(text)
    }
}

/// Compact JSON text. Sequences become arrays, mappings objects (index keys
/// as decimal strings), and member order is exactly the container order.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl ValueSerializer for JsonSerializer {
    fn serialize(&self, value: &Value) -> Result<String> {
        Ok(serde_json::to_string(&value.to_json()?)?)
    }
}

/// SHA-256 of the UTF-8 text, as 64 lowercase hex characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hex;

impl TextHasher for Sha256Hex {
    fn hash(&self, text: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// Configurable fingerprint pipeline.
#[derive(Debug, Clone)]
pub struct Fingerprinter<S = JsonSerializer, H = Sha256Hex> {
    sort_recursive: bool,
    serializer: S,
    hasher: H,
}

impl Fingerprinter {
    /// Canonicalizing pipeline with JSON text and SHA-256.
    pub fn new() -> Self {
        Self {
            sort_recursive: true,
            serializer: JsonSerializer,
            hasher: Sha256Hex,
        }
    }
}

impl Default for Fingerprinter {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, H> Fingerprinter<S, H>
where
    S: ValueSerializer,
    H: TextHasher,
{
    /// Whether to canonicalize before serializing (on by default).
    pub fn sort_recursive(mut self, enabled: bool) -> Self {
        self.sort_recursive = enabled;
        self
    }

    pub fn with_serializer<S2: ValueSerializer>(self, serializer: S2) -> Fingerprinter<S2, H> {
        Fingerprinter {
            sort_recursive: self.sort_recursive,
            serializer,
            hasher: self.hasher,
        }
    }

    pub fn with_hasher<H2: TextHasher>(self, hasher: H2) -> Fingerprinter<S, H2> {
        Fingerprinter {
            sort_recursive: self.sort_recursive,
            serializer: self.serializer,
            hasher,
        }
    }

    /// Fingerprint `value`. Scalars skip canonicalization and are serialized
    /// as they are.
    ///
    /// # Errors
    ///
    /// Returns whatever the serializer reports; the default one fails on
    /// NaN and infinities.
    pub fn fingerprint(&self, value: &Value) -> Result<String> {
        let text = if self.sort_recursive && value.is_container() {
            self.serializer.serialize(&canonicalize(value))?
        } else {
            self.serializer.serialize(value)?
        };
        Ok(self.hasher.hash(&text))
    }
}

/// Fingerprint `value` with the default pipeline: canonical form, compact
/// JSON, SHA-256 hex.
pub fn fingerprint(value: &Value) -> Result<String> {
    Fingerprinter::new().fingerprint(value)
}
