//! Multi-column sorting of row containers.
//!
//! Rows are compared column by column: the first [`SortColumn`] decides,
//! the next one breaks ties, and so on. String cells are lowercased first so
//! the comparison is case-insensitive; every other cell uses
//! [`compare_values`]. The sort is stable.
//!
//! # Example
//! ```
//! use array_tools::{sort_multiple, SortColumn, Value};
//! use serde_json::json;
//!
//! let products = Value::from(json!([
//!     {"category": "fruit", "position": 1},
//!     {"category": "Dairy", "position": 7},
//!     {"category": "fruit", "position": 3},
//! ]));
//! let sorted = sort_multiple(
//!     &products,
//!     &[SortColumn::asc("category"), SortColumn::desc("position")],
//! )
//! .unwrap();
//! assert_eq!(
//!     sorted,
//!     Value::from(json!([
//!         {"category": "Dairy", "position": 7},
//!         {"category": "fruit", "position": 3},
//!         {"category": "fruit", "position": 1},
//!     ]))
//! );
//! ```

use std::cmp::Ordering;

use crate::canonical::compare_values;
use crate::error::{ArrayToolsError, Result};
use crate::types::{Key, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// One column of a multi-column sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortColumn {
    pub key: Key,
    pub direction: SortDirection,
}

impl SortColumn {
    pub fn new(key: impl Into<Key>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    pub fn asc(key: impl Into<Key>) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    pub fn desc(key: impl Into<Key>) -> Self {
        Self::new(key, SortDirection::Descending)
    }
}

/// Sort the rows of `rows` by `columns`, returning a new sequence of the
/// original rows.
///
/// # Errors
///
/// - [`ArrayToolsError::NotAContainer`] if `rows` or one of its rows is a scalar.
/// - [`ArrayToolsError::MissingSortKey`] if a row lacks one of the columns.
pub fn sort_multiple(rows: &Value, columns: &[SortColumn]) -> Result<Value> {
    let mut keyed: Vec<(Vec<Value>, &Value)> = Vec::new();

    for (row_key, row) in rows.container_entries()? {
        if row.is_scalar() {
            return Err(ArrayToolsError::NotAContainer {
                found: row.type_name(),
            });
        }
        let mut cells = Vec::with_capacity(columns.len());
        for column in columns {
            let cell = row
                .get(&column.key)
                .ok_or_else(|| ArrayToolsError::MissingSortKey {
                    column: column.key.clone(),
                    row: row_key.clone(),
                })?;
            cells.push(fold_case(cell));
        }
        keyed.push((cells, row));
    }

    keyed.sort_by(|(a, _), (b, _)| compare_rows(a, b, columns));

    Ok(Value::Sequence(
        keyed.into_iter().map(|(_, row)| row.clone()).collect(),
    ))
}

fn fold_case(cell: &Value) -> Value {
    match cell {
        Value::String(s) => Value::String(s.to_lowercase()),
        other => other.clone(),
    }
}

fn compare_rows(a: &[Value], b: &[Value], columns: &[SortColumn]) -> Ordering {
    for ((left, right), column) in a.iter().zip(b).zip(columns) {
        let ord = match column.direction {
            SortDirection::Ascending => compare_values(left, right),
            SortDirection::Descending => compare_values(right, left),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}
