//! Structural classification of containers.
//!
//! A container is a sequence when re-indexing it densely from zero, in its
//! current iteration order, reproduces its keys. The variant a value was built
//! with does not matter: a [`Value::Mapping`] holding keys `0, 1, 2` in that
//! order is a sequence.

use crate::types::{keys_are_dense, Value};

/// True iff `value` is a container whose keys, in order, are `0..len`.
/// Empty containers are sequences; scalars are not.
pub fn is_sequence(value: &Value) -> bool {
    match value {
        Value::Sequence(_) => true,
        Value::Mapping(map) => keys_are_dense(map.keys()),
        _ => false,
    }
}

/// True iff `value` is a container that is not a sequence.
pub fn is_mapping(value: &Value) -> bool {
    value.is_container() && !is_sequence(value)
}
