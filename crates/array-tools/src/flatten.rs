//! Flattening nested containers into a single level.
//!
//! [`flatten`] keys every scalar leaf by its full path, so leaves from
//! different branches never overwrite each other:
//!
//! ```
//! use array_tools::{flatten, Value};
//! use serde_json::json;
//!
//! let nested = Value::from(json!({"user": {"name": "Ada", "langs": ["en", "fr"]}}));
//! let flat = flatten(&nested).unwrap();
//! assert_eq!(
//!     flat,
//!     Value::from(json!({"user.name": "Ada", "user.langs.0": "en", "user.langs.1": "fr"}))
//! );
//! ```
//!
//! [`flatten_merge`] keeps only each leaf's innermost key. A scalar is written
//! under its own key at its level, and a flattened child level is merged into
//! its parent with associative-merge rules (index keys of both sides
//! renumbered, name keys overwritten). Flattening a list of lists this way
//! concatenates them, but a later scalar can land on a renumbered index:
//!
//! ```
//! use array_tools::{flatten_merge, Value};
//! use serde_json::json;
//!
//! let nested = Value::from(json!([["banana", "apple"], ["watermelon"]]));
//! let flat = flatten_merge(&nested).unwrap();
//! assert_eq!(flat, Value::from(json!(["banana", "apple", "watermelon"])));
//!
//! let overwritten = flatten_merge(&Value::from(json!([["a", "b"], "c"]))).unwrap();
//! assert_eq!(overwritten, Value::from(json!(["a", "c"])));
//! ```

use crate::error::Result;
use crate::merge::Merged;
use crate::types::{Key, Mapping, Value};

/// Separator used by [`flatten`].
pub const PATH_SEPARATOR: &str = ".";

/// Flatten `value` into a mapping keyed by dot-separated leaf paths.
/// Empty nested containers contribute nothing. Paths go through
/// [`Key::from`], so a flat sequence comes back as the same sequence.
pub fn flatten(value: &Value) -> Result<Value> {
    flatten_with_separator(value, PATH_SEPARATOR)
}

/// [`flatten`] with a caller-chosen path separator.
pub fn flatten_with_separator(value: &Value, separator: &str) -> Result<Value> {
    let mut leaves = Vec::new();
    let mut path = Vec::new();
    for (key, child) in value.container_entries()? {
        path.push(key.to_string());
        collect_paths(child, &mut path, separator, &mut leaves);
        path.pop();
    }
    Ok(Value::from_entries(leaves))
}

fn collect_paths(
    value: &Value,
    path: &mut Vec<String>,
    separator: &str,
    leaves: &mut Vec<(Key, Value)>,
) {
    match value.entries() {
        Some(entries) => {
            for (key, child) in entries {
                path.push(key.to_string());
                collect_paths(child, path, separator, leaves);
                path.pop();
            }
        }
        None => leaves.push((Key::from(path.join(separator)), value.clone())),
    }
}

/// Flatten `value` keeping each leaf's own key.
///
/// Scalars are written under their key at the level they sit on, so they
/// overwrite whatever that level already holds under the same key. Each
/// nested container is flattened on its own and then merged into the level
/// above: index keys on both sides are renumbered from zero, and a name key
/// seen again overwrites the earlier value in place.
pub fn flatten_merge(value: &Value) -> Result<Value> {
    Ok(Value::from_mapping(merge_level(value)?))
}

fn merge_level(value: &Value) -> Result<Mapping> {
    let mut out = Mapping::new();
    for (key, child) in value.container_entries()? {
        if child.is_container() {
            let mut merged = Merged::new();
            merged.extend(out);
            merged.extend(merge_level(child)?);
            out = merged.into_mapping();
        } else {
            out.insert(key, child.clone());
        }
    }
    Ok(out)
}
