//! Wrapping every element of a container in quotes.

use crate::error::{ArrayToolsError, Result};
use crate::types::{scalar_text, Value};

/// Default quote character for [`quotify_default`].
pub const DEFAULT_QUOTE: &str = "'";

/// Render each element as text and wrap it in `quote` on both sides, keeping
/// the keys.
///
/// Text rendering: strings as-is, numbers in shortest decimal form, `true`
/// as `1`, `false` and null as the empty string.
///
/// # Errors
///
/// [`ArrayToolsError::NotAScalar`] if an element is itself a container, and
/// [`ArrayToolsError::NotAContainer`] if `value` is a scalar.
///
/// # Example
/// ```
/// use array_tools::{quotify, Value};
/// use serde_json::json;
///
/// let ids = Value::from(json!(["a", 2, true]));
/// assert_eq!(
///     quotify(&ids, "\"").unwrap(),
///     Value::from(json!(["\"a\"", "\"2\"", "\"1\""]))
/// );
/// ```
pub fn quotify(value: &Value, quote: &str) -> Result<Value> {
    let mut quoted = Vec::new();
    for (key, item) in value.container_entries()? {
        let Some(text) = scalar_text(item) else {
            return Err(ArrayToolsError::NotAScalar { key });
        };
        quoted.push((key, Value::String(format!("{quote}{text}{quote}"))));
    }
    Ok(Value::from_entries(quoted))
}

/// [`quotify`] with single quotes.
pub fn quotify_default(value: &Value) -> Result<Value> {
    quotify(value, DEFAULT_QUOTE)
}
