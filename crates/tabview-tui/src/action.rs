//! Application actions.
//!
//! Cell clicks are turned into actions by the drill handler and processed by
//! the app after the key event that caused them.

use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Open the record detail overlay on a data row.
    OpenDetail { row_index: usize },
    /// A foreign key was clicked.
    ForeignKey {
        column: String,
        value: Value,
        target_field_id: Option<u64>,
    },
    /// Any other clickable cell: drill through on its value.
    Drill { column: String, value: Value },
}
