//! Key-based filtering and renaming.
//!
//! All functions return a new container; the input is never touched. The
//! result goes through [`Value::from_entries`], so a filtered mapping that
//! ends up with keys `0..len` comes back as a sequence.

use crate::error::Result;
use crate::types::{Key, Value};

/// Keep only the entries whose key is in `allowed`, in their original order.
///
/// # Example
/// ```
/// use array_tools::{filter_key, Key, Value};
/// use serde_json::json;
///
/// let value = Value::from(json!({"a": 1, "b": 2, "c": 3}));
/// let filtered = filter_key(&value, &[Key::from("a"), Key::from("c")]).unwrap();
/// assert_eq!(filtered, Value::from(json!({"a": 1, "c": 3})));
/// ```
pub fn filter_key(map: &Value, allowed: &[Key]) -> Result<Value> {
    filter_key_by(map, |key| allowed.contains(key))
}

/// Keep only the entries whose key satisfies `predicate`.
pub fn filter_key_by<P>(map: &Value, predicate: P) -> Result<Value>
where
    P: Fn(&Key) -> bool,
{
    Ok(Value::from_entries(
        map.container_entries()?
            .filter(|(key, _)| predicate(key))
            .map(|(key, value)| (key, value.clone())),
    ))
}

/// Replace every key with `f(key)`, leaving values untouched.
///
/// When two keys map to the same new key the last value wins and the entry
/// stays where the first one was.
pub fn map_keys<F>(f: F, map: &Value) -> Result<Value>
where
    F: Fn(&Key) -> Key,
{
    Ok(Value::from_entries(
        map.container_entries()?
            .map(|(key, value)| (f(&key), value.clone())),
    ))
}
