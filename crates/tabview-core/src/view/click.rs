//! Click targets and the caller-supplied click handler.

use serde_json::{Map, Value};

use crate::model::{Column, ResultSet};

/// Screen rectangle of the clicked cell, in host units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// One column/value pair of the clicked row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowCell {
    pub column: Column,
    pub value: Value,
}

/// Description of a clicked cell, used to drive drill-through.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickTarget {
    pub row: Vec<RowCell>,
    /// Index into the result's rows, not the on-screen position.
    pub row_index: usize,
    pub column_index: usize,
    pub column: Column,
    pub value: Value,
    pub element: Option<CellRect>,
    pub extra_data: Map<String, Value>,
}

impl ClickTarget {
    /// Target for `(row_index, column_index)`. `None` when the column does not exist.
    pub fn for_cell(data: &ResultSet, row_index: usize, column_index: usize) -> Option<Self> {
        let column = data.cols.get(column_index)?.clone();
        let row = data
            .cols
            .iter()
            .enumerate()
            .map(|(i, col)| RowCell {
                column: col.clone(),
                value: data.cell(row_index, i).clone(),
            })
            .collect();
        Some(Self {
            row,
            row_index,
            column_index,
            column,
            value: data.cell(row_index, column_index).clone(),
            element: None,
            extra_data: Map::new(),
        })
    }
}

/// Consumer of cell clicks.
///
/// A view with no handler is not clickable at all.
pub trait ClickHandler {
    /// Whether the visualization treats this target as clickable.
    fn is_clickable(&self, _target: &ClickTarget) -> bool {
        false
    }

    /// Extra context attached to the target before `on_click`.
    fn extra_data(&self, _target: &ClickTarget) -> Map<String, Value> {
        Map::new()
    }

    fn on_click(&mut self, target: ClickTarget);
}
