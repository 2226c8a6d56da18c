//! Sort keys and row ordering.
//!
//! Sorting is index based: rows are never cloned or moved, only a
//! permutation of row indices is produced.

use std::cmp::Ordering;

use serde_json::Value;

use crate::model::{Column, ResultSet};
use crate::schema;

/// Normalized per-row sort key.
///
/// Variants are ordered `Bool < Number < Text < Undefined`, so null cells
/// always land after every defined value in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Bool(bool),
    Number(f64),
    Text(String),
    Undefined,
}

impl SortKey {
    pub fn from_value(value: &Value, column: &Column) -> Self {
        match value {
            Value::Null => SortKey::Undefined,
            Value::Bool(b) => SortKey::Bool(*b),
            Value::Number(n) => n.as_f64().map_or(SortKey::Undefined, SortKey::Number),
            Value::String(s) => {
                if schema::is_id(column) && schema::is_positive_integer(s) {
                    // Digit runs always parse; overflow saturates to infinity.
                    s.parse::<f64>()
                        .map_or_else(|_| SortKey::Text(s.to_lowercase()), SortKey::Number)
                } else {
                    SortKey::Text(s.to_lowercase())
                }
            }
            other => SortKey::Text(other.to_string().to_lowercase()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Bool(_) => 0,
            SortKey::Number(_) => 1,
            SortKey::Text(_) => 2,
            SortKey::Undefined => 3,
        }
    }
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Row permutation for `data` sorted on `sort_column`.
///
/// Ascending order is a stable sort on [`SortKey`]; descending reverses the
/// ascending permutation, so ties come out in reverse input order.
pub fn sorted_row_order(
    data: &ResultSet,
    sort_column: Option<usize>,
    descending: bool,
) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..data.row_count()).collect();

    let Some(col_idx) = sort_column else {
        return indices;
    };
    let Some(column) = data.cols.get(col_idx) else {
        return indices;
    };

    // Compute each key once rather than per comparison.
    let keys: Vec<SortKey> = indices
        .iter()
        .map(|&row| SortKey::from_value(data.cell(row, col_idx), column))
        .collect();
    indices.sort_by(|&a, &b| keys[a].cmp(&keys[b]));

    if descending {
        indices.reverse();
    }
    indices
}
