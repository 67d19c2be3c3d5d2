/// Property-based tests for canonical form and fingerprints.
///
/// Uses the `proptest` crate to generate random structured values and check
/// the properties the fingerprint engine relies on:
///
/// - `canonicalize` is idempotent
/// - fingerprints ignore mapping entry order and sequence element order
/// - fingerprints are deterministic
/// - generated sequences classify as sequences
///
/// Strategies generate:
/// - Mixed index/name keys (names never look like integers)
/// - Integers, finite floats, booleans, null
/// - Strings including numeric-looking and case-variant edge cases
/// - Nested sequences and mappings (up to 3 levels deep)
///
/// NaN and infinities are excluded: the default serializer rejects them.
use std::collections::BTreeMap;

use array_tools::{canonicalize, fingerprint, is_sequence, Key, Value};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating structured values
// ============================================================================

/// Generate a container key: a small index or a lowercase name.
fn arb_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        (0i64..8).prop_map(Key::Index),
        "[a-z]{1,6}".prop_map(Key::from),
    ]
}

/// Generate a string value with edge cases that stress the value order.
fn arb_string() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,12}",
        Just("".to_string()),
        Just("0".to_string()),
        Just("9".to_string()),
        Just("10".to_string()),
        Just("1e1".to_string()),
        Just(" 1.5".to_string()),
        Just("-0".to_string()),
        Just("Apple".to_string()),
        Just("apple".to_string()),
        Just("caf\u{00e9}".to_string()),
    ]
}

/// Generate a finite float as mantissa / 10^n.
fn arb_float() -> impl Strategy<Value = Value> {
    (-1_000_000i64..1_000_000i64, 0u32..4u32)
        .prop_map(|(mantissa, decimals)| Value::Float(mantissa as f64 / 10f64.powi(decimals as i32)))
}

/// Generate a scalar value.
fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..1000).prop_map(Value::Integer),
        arb_float(),
        arb_string().prop_map(Value::String),
    ]
}

/// Generate a value with limited nesting (recursive).
///
/// Mappings come from a `BTreeMap` (unique keys) and are built in reverse
/// key order, so the input is never already canonical by accident.
fn arb_value_inner(depth: u32) -> impl Strategy<Value = Value> {
    if depth == 0 {
        arb_scalar().boxed()
    } else {
        prop_oneof![
            4 => arb_scalar(),
            2 => prop::collection::vec(arb_value_inner(depth - 1), 0..5)
                .prop_map(Value::Sequence),
            2 => prop::collection::btree_map(arb_key(), arb_value_inner(depth - 1), 0..5)
                .prop_map(|map| Value::from_entries(map.into_iter().rev())),
        ]
        .boxed()
    }
}

/// Top-level strategy (up to 3 levels deep).
fn arb_value() -> impl Strategy<Value = Value> {
    arb_value_inner(3)
}

/// Unique-keyed entries for building the same mapping in different orders.
fn arb_entries() -> impl Strategy<Value = BTreeMap<Key, Value>> {
    prop::collection::btree_map(arb_key(), arb_value_inner(2), 1..8)
}

// ============================================================================
// Helpers
// ============================================================================

/// Order-sensitive text form; `Value`'s `PartialEq` ignores mapping order.
fn text(value: &Value) -> String {
    serde_json::to_string(&value.to_json().unwrap()).unwrap()
}

fn rotated<T: Clone>(items: &[T], by: usize) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    let by = by % items.len();
    items[by..].iter().chain(&items[..by]).cloned().collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// canonicalize(canonicalize(v)) == canonicalize(v), including order.
    #[test]
    fn canonicalize_is_idempotent(value in arb_value()) {
        let once = canonicalize(&value);
        let twice = canonicalize(&once);
        prop_assert_eq!(text(&once), text(&twice));
    }

    /// Same key/value pairs in a different order give the same fingerprint.
    #[test]
    fn fingerprint_ignores_mapping_order(entries in arb_entries(), by in 0usize..8) {
        let pairs: Vec<(Key, Value)> = entries.into_iter().collect();
        let forward = Value::from_entries(pairs.clone());
        let shuffled = Value::from_entries(rotated(&pairs, by).into_iter().rev());
        prop_assert_eq!(fingerprint(&forward).unwrap(), fingerprint(&shuffled).unwrap());
    }

    /// Permuting a sequence does not change its fingerprint.
    #[test]
    fn fingerprint_ignores_sequence_order(
        items in prop::collection::vec(arb_value_inner(2), 0..8),
        by in 0usize..8,
    ) {
        let forward = Value::Sequence(items.clone());
        let permuted = Value::Sequence(rotated(&items, by).into_iter().rev().collect());
        prop_assert_eq!(fingerprint(&forward).unwrap(), fingerprint(&permuted).unwrap());
    }

    /// Repeated calls on an unchanged input agree.
    #[test]
    fn fingerprint_is_deterministic(value in arb_value()) {
        prop_assert_eq!(fingerprint(&value).unwrap(), fingerprint(&value.clone()).unwrap());
    }

    /// Canonical form has the same fingerprint as its source.
    #[test]
    fn canonical_form_keeps_fingerprint(value in arb_value()) {
        prop_assert_eq!(fingerprint(&value).unwrap(), fingerprint(&canonicalize(&value)).unwrap());
    }

    /// Every generated sequence classifies as one.
    #[test]
    fn sequences_classify_as_sequences(items in prop::collection::vec(arb_scalar(), 0..8)) {
        prop_assert!(is_sequence(&Value::Sequence(items)));
    }
}
