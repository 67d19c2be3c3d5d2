//! Canonical form: recursive key/value sorting that makes container order
//! irrelevant to equality and fingerprinting.
//!
//! Canonicalization is post-order: children are canonicalized first, then
//! the container itself is reordered. Empty containers are left as they are.
//!
//! - **Mappings** are sorted by key (see [`Key`] for the key order). A mapping
//!   whose sorted keys turn out to be `0..len` *is* a sequence and is then
//!   value-sorted like one, so canonicalizing twice changes nothing.
//! - **Sequences** are stably sorted by [`compare_values`].
//!
//! # Value order
//!
//! [`compare_values`] is a total order, identical on every platform:
//!
//! 1. By type: `null < bool < number < numeric string < other string <
//!    sequence < mapping`. An empty mapping ranks as a mapping.
//! 2. Booleans: `false < true`.
//! 3. Numbers: numerically, integers and floats mixed. An integer sorts
//!    before a float of equal value; floats among themselves use IEEE total
//!    ordering (`-0.0 < 0.0`, NaN at the ends).
//! 4. Numeric strings (`"9"`, `" 1.5e3"`): by numeric value, then byte-wise.
//! 5. Other strings: byte-wise.
//! 6. Containers: entry by entry (key, then value), then the shorter first.
//!
//! # Example
//! ```
//! use array_tools::{canonicalize, Value};
//! use serde_json::json;
//!
//! let value = Value::from(json!({"b": [3, 1, 2], "a": null}));
//! let canonical = canonicalize(&value);
//! assert_eq!(canonical, Value::from(json!({"a": null, "b": [1, 2, 3]})));
//! ```

use std::cmp::Ordering;

use crate::classify::is_sequence;
use crate::types::{keys_are_dense, numeric_value, Key, Mapping, Value};

/// Return the canonical form of `value`. Scalars are returned unchanged.
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Sequence(items) => sorted_sequence(items.iter().map(canonicalize).collect()),
        Value::Mapping(map) if map.is_empty() => value.clone(),
        Value::Mapping(map) => {
            let mut entries: Vec<(Key, Value)> = map
                .iter()
                .map(|(key, child)| (key.clone(), canonicalize(child)))
                .collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));

            if keys_are_dense(entries.iter().map(|(key, _)| key)) {
                sorted_sequence(entries.into_iter().map(|(_, child)| child).collect())
            } else {
                Value::Mapping(entries.into_iter().collect::<Mapping>())
            }
        }
        scalar => scalar.clone(),
    }
}

fn sorted_sequence(mut items: Vec<Value>) -> Value {
    items.sort_by(compare_values);
    Value::Sequence(items)
}

/// Total order over structured values. See the module docs for the rules.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    let by_rank = rank(a).cmp(&rank(b));
    if by_rank != Ordering::Equal {
        return by_rank;
    }

    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Integer(x), Value::Integer(y)) => x.cmp(y),
        (Value::Float(x), Value::Float(y)) => x.total_cmp(y),
        (Value::Integer(i), Value::Float(f)) => compare_integer_float(*i, *f),
        (Value::Float(f), Value::Integer(i)) => compare_integer_float(*i, *f).reverse(),
        (Value::String(x), Value::String(y)) => match (numeric_value(x), numeric_value(y)) {
            (Some(nx), Some(ny)) => nx.total_cmp(&ny).then_with(|| x.cmp(y)),
            _ => x.cmp(y),
        },
        _ => compare_entries(a, b),
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Integer(_) | Value::Float(_) => 2,
        Value::String(s) if numeric_value(s).is_some() => 3,
        Value::String(_) => 4,
        Value::Sequence(_) => 5,
        Value::Mapping(map) if !map.is_empty() && is_sequence(value) => 5,
        Value::Mapping(_) => 6,
    }
}

/// Exact comparison of an integer against a float, without rounding the
/// integer through `f64`. Equal values put the integer first.
fn compare_integer_float(i: i64, f: f64) -> Ordering {
    // 2^63, the first float above every i64
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return if f.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if f >= LIMIT {
        return Ordering::Less;
    }
    if f < -LIMIT {
        return Ordering::Greater;
    }

    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal if f < whole => Ordering::Greater,
        Ordering::Equal => Ordering::Less,
        other => other,
    }
}

fn compare_entries(a: &Value, b: &Value) -> Ordering {
    let (Some(mut left), Some(mut right)) = (a.entries(), b.entries()) else {
        return Ordering::Equal;
    };
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some((ka, va)), Some((kb, vb))) => {
                let ord = ka.cmp(&kb).then_with(|| compare_values(va, vb));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}
