/// Structural classification of sequences and mappings.

use array_tools::{is_mapping, is_sequence, Key, Mapping, Value};
use serde_json::json;

/// Build a `Value::Mapping` without the dense-key normalization of
/// `Value::from_entries`, so classification is tested on the raw shape.
fn raw_mapping(entries: Vec<(Key, Value)>) -> Value {
    Value::Mapping(entries.into_iter().collect::<Mapping>())
}

// ============================================================================
// Sequences
// ============================================================================

#[test]
fn list_is_a_sequence() {
    let value = Value::from(json!(["banana", "apple"]));
    assert!(is_sequence(&value));
    assert!(!is_mapping(&value));
}

#[test]
fn empty_containers_are_sequences() {
    assert!(is_sequence(&Value::Sequence(vec![])));
    assert!(is_sequence(&Value::Mapping(Mapping::new())));
    assert!(!is_mapping(&Value::Mapping(Mapping::new())));
}

#[test]
fn mapping_with_dense_ordered_keys_is_a_sequence() {
    let value = raw_mapping(vec![
        (Key::from(0), Value::from("a")),
        (Key::from(1), Value::from("b")),
        (Key::from(2), Value::from("c")),
    ]);
    assert!(is_sequence(&value));
    assert!(!is_mapping(&value));
}

// ============================================================================
// Mappings
// ============================================================================

#[test]
fn named_keys_make_a_mapping() {
    let value = Value::from(json!({"a": 1, "b": 2}));
    assert!(is_mapping(&value));
    assert!(!is_sequence(&value));
}

#[test]
fn keys_not_starting_at_zero_make_a_mapping() {
    let value = raw_mapping(vec![
        (Key::from(1), Value::from("a")),
        (Key::from(2), Value::from("b")),
    ]);
    assert!(is_mapping(&value));
}

#[test]
fn dense_keys_out_of_order_make_a_mapping() {
    let value = raw_mapping(vec![
        (Key::from(1), Value::from("b")),
        (Key::from(0), Value::from("a")),
    ]);
    assert!(is_mapping(&value));
    assert!(!is_sequence(&value));
}

#[test]
fn gap_in_keys_makes_a_mapping() {
    let value = raw_mapping(vec![
        (Key::from(0), Value::from("a")),
        (Key::from(2), Value::from("c")),
    ]);
    assert!(is_mapping(&value));
}

#[test]
fn numeric_string_keys_count_as_indices() {
    let value = Value::from(json!({"0": "a", "1": "b"}));
    assert!(is_sequence(&value));
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn scalars_are_neither() {
    for scalar in [
        Value::Null,
        Value::from(true),
        Value::from(3),
        Value::from(2.5),
        Value::from("text"),
    ] {
        assert!(!is_sequence(&scalar), "{scalar:?} is not a sequence");
        assert!(!is_mapping(&scalar), "{scalar:?} is not a mapping");
    }
}
