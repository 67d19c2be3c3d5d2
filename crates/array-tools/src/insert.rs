//! Splicing entries into a container next to an existing key.
//!
//! The container is cut at the anchor key, and the head, the inserted data
//! and the tail are joined with associative-merge rules: index keys are
//! renumbered in order, and a name key that appears twice keeps its first
//! position with the later value.
//!
//! # Example
//! ```
//! use array_tools::{insert_before_key, Key, Value};
//! use serde_json::json;
//!
//! let value = Value::from(json!({"a": 1, "b": 2}));
//! let out = insert_before_key(&value, &Key::from("b"), &Value::from(json!({"x": 9}))).unwrap();
//! let keys: Vec<String> = out.entries().unwrap().map(|(k, _)| k.to_string()).collect();
//! assert_eq!(keys, ["a", "x", "b"]);
//! ```

use crate::error::Result;
use crate::merge::Merged;
use crate::types::{Key, Value};

/// Insert `data`'s entries right before `key`, or at the end when `key` is
/// absent. A scalar `data` is inserted as one element; null inserts nothing.
pub fn insert_before_key(map: &Value, key: &Key, data: &Value) -> Result<Value> {
    splice(map, key, data, false)
}

/// Insert `data`'s entries right after `key`, or at the end when `key` is
/// absent. A scalar `data` is inserted as one element; null inserts nothing.
pub fn insert_after_key(map: &Value, key: &Key, data: &Value) -> Result<Value> {
    splice(map, key, data, true)
}

fn splice(map: &Value, key: &Key, data: &Value, after: bool) -> Result<Value> {
    let entries: Vec<(Key, &Value)> = map.container_entries()?.collect();
    let offset = match entries.iter().position(|(k, _)| k == key) {
        Some(i) if after => i + 1,
        Some(i) => i,
        None => entries.len(),
    };
    let (head, tail) = entries.split_at(offset);

    let mut out = Merged::new();
    out.extend(head.iter().map(|(k, v)| (k.clone(), (*v).clone())));
    out.extend(inserted_entries(data));
    out.extend(tail.iter().map(|(k, v)| (k.clone(), (*v).clone())));
    Ok(out.finish())
}

fn inserted_entries(data: &Value) -> Vec<(Key, Value)> {
    match data.entries() {
        Some(entries) => entries.map(|(k, v)| (k, v.clone())).collect(),
        None if matches!(data, Value::Null) => Vec::new(),
        None => vec![(Key::Index(0), data.clone())],
    }
}
