//! Value equality modes and searches over rows of containers.
//!
//! # Loose equality
//!
//! [`EqualityMode::Loose`] applies these coercions, and only these:
//!
//! - null vs string: equal iff the string is empty.
//! - null vs anything else, or a bool vs anything: compare truthiness. Falsy
//!   values are null, `false`, `0`, `0.0`, `""`, `"0"` and empty containers.
//! - number vs number: numeric comparison, integers and floats mixed.
//! - number vs string: numeric when the string is numeric (`" 1e3"`,
//!   `"-2.5"`), otherwise the number's decimal text against the string.
//! - string vs string: numeric when both are numeric, byte-wise otherwise.
//! - container vs container: same key set and loosely equal values, entry
//!   order ignored.
//! - container vs any other scalar: never equal.
//!
//! # Strict equality
//!
//! [`EqualityMode::Strict`] requires the same type and the same value, so
//! `1` and `1.0` differ. Containers are strictly equal when their ordered
//! key/value pairs are.

use crate::types::{numeric_value, scalar_text, Key, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EqualityMode {
    #[default]
    Loose,
    Strict,
}

impl EqualityMode {
    pub fn equal(self, a: &Value, b: &Value) -> bool {
        match self {
            EqualityMode::Loose => loose_eq(a, b),
            EqualityMode::Strict => strict_eq(a, b),
        }
    }
}

/// Coercing comparison. See the module docs for the exact rules.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, Value::String(s)) | (Value::String(s), Value::Null) => s.is_empty(),
        (Value::Null, _) | (_, Value::Null) | (Value::Bool(_), _) | (_, Value::Bool(_)) => {
            truthy(a) == truthy(b)
        }
        (Value::Integer(x), Value::Integer(y)) => x == y,
        (Value::Integer(_) | Value::Float(_), Value::Integer(_) | Value::Float(_)) => {
            as_f64(a) == as_f64(b)
        }
        (Value::Integer(_) | Value::Float(_), Value::String(s)) => number_eq_string(a, s),
        (Value::String(s), Value::Integer(_) | Value::Float(_)) => number_eq_string(b, s),
        (Value::String(x), Value::String(y)) => match (numeric_value(x), numeric_value(y)) {
            (Some(nx), Some(ny)) => nx == ny,
            _ => x == y,
        },
        _ => containers_loose_eq(a, b),
    }
}

/// Type-and-value comparison.
pub fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Integer(x), Value::Integer(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        _ => {
            let (Some(mut left), Some(mut right)) = (a.entries(), b.entries()) else {
                return false;
            };
            loop {
                match (left.next(), right.next()) {
                    (None, None) => return true,
                    (Some((ka, va)), Some((kb, vb))) if ka == kb && strict_eq(va, vb) => {}
                    _ => return false,
                }
            }
        }
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Integer(i) => *i != 0,
        Value::Float(f) => *f != 0.0,
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Sequence(items) => !items.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
    }
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(i) => Some(*i as f64),
        Value::Float(f) => Some(*f),
        _ => None,
    }
}

fn number_eq_string(number: &Value, s: &str) -> bool {
    match numeric_value(s) {
        Some(n) => as_f64(number) == Some(n),
        None => scalar_text(number).is_some_and(|text| text == s),
    }
}

fn containers_loose_eq(a: &Value, b: &Value) -> bool {
    let (Some(left), Some(right)) = (a.entries(), b.entries()) else {
        return false;
    };
    if left.len() != right.len() {
        return false;
    }
    left.into_iter()
        .all(|(key, va)| b.get(&key).is_some_and(|vb| loose_eq(va, vb)))
}

/// Search nested containers for a row whose `key` entry equals `needle`.
///
/// Every value of `haystack` is visited: containers are searched
/// recursively, and meeting a scalar means `haystack` itself holds row data,
/// so its `key` entry is compared with `needle`. Returns `false` for a
/// scalar haystack.
pub fn contains_md(needle: &Value, haystack: &Value, key: &Key, mode: EqualityMode) -> bool {
    let Some(entries) = haystack.entries() else {
        return false;
    };
    for (_, item) in entries {
        if item.is_container() {
            if contains_md(needle, item, key, mode) {
                return true;
            }
        } else if haystack
            .get(key)
            .is_some_and(|found| mode.equal(found, needle))
        {
            return true;
        }
    }
    false
}

/// Return the key of the first row of `haystack` whose `key` entry equals
/// `needle`. Rows lacking `key`, scalar rows and scalar haystacks never
/// match.
pub fn search_md(needle: &Value, haystack: &Value, key: &Key, mode: EqualityMode) -> Option<Key> {
    haystack
        .entries()?
        .find(|(_, row)| row.get(key).is_some_and(|found| mode.equal(found, needle)))
        .map(|(row_key, _)| row_key)
}
