//! Structured values: scalars plus the two container shapes.
//!
//! A container is either a [`Value::Sequence`] (dense zero-based keys) or a
//! [`Value::Mapping`] (arbitrary unique keys in insertion order). Which one a
//! container *is* stays a structural question answered by
//! [`crate::classify::is_sequence`]; constructors that assemble containers
//! from key/value entries pick the matching variant so the representation and
//! the classification agree.

use std::fmt;

use indexmap::IndexMap;
use serde_json::{Map, Number};

use crate::error::{ArrayToolsError, Result};

/// Ordered key/value storage backing [`Value::Mapping`].
pub type Mapping = IndexMap<Key, Value>;

/// A container key.
///
/// Ordering puts every `Index` before every `Name`; indices compare
/// numerically and names byte-wise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl Key {
    /// Convert a string key the way associative arrays do: canonical decimal
    /// integers (`"0"`, `"42"`, `"-7"`) become [`Key::Index`], anything else
    /// (`"07"`, `"-0"`, `"+1"`, `"a"`) stays a [`Key::Name`].
    pub fn parse(s: &str) -> Self {
        match canonical_index(s) {
            Some(i) => Key::Index(i),
            None => Key::Name(s.to_string()),
        }
    }

    pub fn as_index(&self) -> Option<i64> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(_) => None,
        }
    }
}

fn canonical_index(s: &str) -> Option<i64> {
    let negative = s.starts_with('-');
    let digits = if negative { &s[1..] } else { s };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    if negative && digits == "0" {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{}", i),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::parse(s)
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        match canonical_index(&s) {
            Some(i) => Key::Index(i),
            None => Key::Name(s),
        }
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Index(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Index(i64::from(i))
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Index(i as i64)
    }
}

/// A structured value. Mirrors JSON types but keeps integers apart from
/// floats and allows integer keys in mappings.
///
/// `==` compares sequences element by element but mappings as key sets:
/// two `Mapping`s holding the same pairs in different orders are equal.
/// Use [`crate::search::strict_eq`] when entry order matters.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// Values under the implicit keys `0..len`.
    Sequence(Vec<Value>),
    /// Key-value pairs in insertion order.
    Mapping(Mapping),
}

impl Value {
    /// Build a container from key/value entries.
    ///
    /// Duplicate keys keep the position of their first occurrence and the
    /// value of their last. The result is a `Sequence` when the keys come
    /// out as `0..len` in order, a `Mapping` otherwise.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Key, Value)>,
    {
        let mut map = Mapping::new();
        for (key, value) in entries {
            map.insert(key, value);
        }
        Value::from_mapping(map)
    }

    /// Wrap a mapping, turning it into a `Sequence` when its keys are dense.
    pub fn from_mapping(map: Mapping) -> Self {
        if keys_are_dense(map.keys()) {
            Value::Sequence(map.into_values().collect())
        } else {
            Value::Mapping(map)
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Value::Sequence(_) | Value::Mapping(_))
    }

    pub fn is_scalar(&self) -> bool {
        !self.is_container()
    }

    /// Short lowercase name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }

    /// Look up an entry of a container. Scalars have no entries.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        match self {
            Value::Sequence(items) => key
                .as_index()
                .and_then(|i| usize::try_from(i).ok())
                .and_then(|i| items.get(i)),
            Value::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    /// Iterate a container's entries in order; `None` for scalars.
    pub fn entries(&self) -> Option<Entries<'_>> {
        match self {
            Value::Sequence(items) => Some(Entries::Sequence(items.iter().enumerate())),
            Value::Mapping(map) => Some(Entries::Mapping(map.iter())),
            _ => None,
        }
    }

    /// Like [`Value::entries`] but reports scalars as an error.
    pub(crate) fn container_entries(&self) -> Result<Entries<'_>> {
        self.entries().ok_or(ArrayToolsError::NotAContainer {
            found: self.type_name(),
        })
    }

    /// Convert into a `serde_json::Value`.
    ///
    /// Sequences become arrays and mappings become objects, with index keys
    /// written as decimal strings. Fails on NaN and infinities, which JSON
    /// cannot represent, and on a mapping holding two keys with the same
    /// text (`Key::Index(5)` next to a hand-built `Key::Name("5")`).
    pub fn to_json(&self) -> Result<serde_json::Value> {
        to_json_at(self, &mut Vec::new())
    }
}

fn to_json_at(value: &Value, path: &mut Vec<String>) -> Result<serde_json::Value> {
    Ok(match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Integer(i) => serde_json::Value::Number(Number::from(*i)),
        Value::Float(f) => match Number::from_f64(*f) {
            Some(n) => serde_json::Value::Number(n),
            None => {
                return Err(ArrayToolsError::NonFiniteNumber {
                    path: path_text(path),
                })
            }
        },
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Sequence(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                path.push(i.to_string());
                out.push(to_json_at(item, path)?);
                path.pop();
            }
            serde_json::Value::Array(out)
        }
        Value::Mapping(map) => {
            let mut out = Map::new();
            for (key, item) in map {
                let name = key.to_string();
                if out.contains_key(&name) {
                    return Err(ArrayToolsError::DuplicateKey {
                        key: name,
                        path: path_text(path),
                    });
                }
                path.push(name.clone());
                out.insert(name, to_json_at(item, path)?);
                path.pop();
            }
            serde_json::Value::Object(out)
        }
    })
}

fn path_text(path: &[String]) -> String {
    if path.is_empty() {
        "root".to_string()
    } else {
        path.join(".")
    }
}

/// True when the keys, in order, are exactly `0, 1, 2, ...`.
pub(crate) fn keys_are_dense<'a, I>(keys: I) -> bool
where
    I: IntoIterator<Item = &'a Key>,
{
    keys.into_iter()
        .enumerate()
        .all(|(i, key)| key.as_index() == Some(i as i64))
}

/// Text form of a scalar: strings as-is, numbers in shortest decimal form,
/// `true` as `"1"`, `false` and null as `""`. Containers have none.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some(String::new()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Parse a numeric string: optional surrounding ASCII whitespace, optional
/// sign, decimal digits with at most one `.`, optional exponent. `"inf"`,
/// `"nan"`, hex and empty strings are not numeric.
pub(crate) fn numeric_value(s: &str) -> Option<f64> {
    let trimmed = s.trim_matches(|c: char| c.is_ascii_whitespace());
    let bytes = trimmed.as_bytes();
    let mut pos = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let mut digits = 0;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(pos) {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        pos += 1;
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let start = pos;
        while matches!(bytes.get(pos), Some(b'0'..=b'9')) {
            pos += 1;
        }
        if pos == start {
            return None;
        }
    }

    if pos != bytes.len() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Ordered iterator over a container's entries, yielding owned keys.
pub enum Entries<'a> {
    Sequence(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
    Mapping(indexmap::map::Iter<'a, Key, Value>),
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Key, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Entries::Sequence(iter) => iter.next().map(|(i, value)| (Key::from(i), value)),
            Entries::Mapping(iter) => iter.next().map(|(key, value)| (key.clone(), value)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Entries::Sequence(iter) => iter.size_hint(),
            Entries::Mapping(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Float(u as f64)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::from_entries(
                map.into_iter()
                    .map(|(key, item)| (Key::from(key), Value::from(item))),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Sequence(iter.into_iter().collect())
    }
}

impl FromIterator<(Key, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        Value::from_entries(iter)
    }
}
