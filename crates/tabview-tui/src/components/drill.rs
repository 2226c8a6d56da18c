//! Click handler turning table clicks into app actions.

use std::sync::mpsc::Sender;

use serde_json::{Map, Value};
use tabview_core::schema;
use tabview_core::view::{ClickHandler, ClickTarget};

use crate::action::AppAction;

pub struct DrillHandler {
    tx: Sender<AppAction>,
    card_name: Option<String>,
}

impl DrillHandler {
    pub fn new(tx: Sender<AppAction>, card_name: Option<String>) -> Self {
        Self { tx, card_name }
    }
}

impl ClickHandler for DrillHandler {
    /// Every non-null cell drills; nulls have nothing to filter on.
    fn is_clickable(&self, target: &ClickTarget) -> bool {
        !target.value.is_null()
    }

    fn extra_data(&self, _target: &ClickTarget) -> Map<String, Value> {
        let mut extra = Map::new();
        if let Some(name) = &self.card_name {
            extra.insert("card".to_string(), Value::String(name.clone()));
        }
        extra
    }

    fn on_click(&mut self, target: ClickTarget) {
        let action = if schema::is_pk(&target.column) {
            AppAction::OpenDetail {
                row_index: target.row_index,
            }
        } else if schema::is_fk(&target.column) {
            AppAction::ForeignKey {
                column: target.column.title().to_string(),
                value: target.value,
                target_field_id: target.column.fk_target_field_id,
            }
        } else {
            AppAction::Drill {
                column: target.column.title().to_string(),
                value: target.value,
            }
        };
        if self.tx.send(action).is_err() {
            log::warn!("Click dropped: action receiver closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::mpsc;
    use tabview_core::model::{Column, ResultSet};
    use tabview_core::schema::{TYPE_FK, TYPE_PK};

    fn data() -> ResultSet {
        ResultSet::new(
            vec![
                Column::new("ID", "type/Integer").with_semantic_type(TYPE_PK),
                Column::new("USER_ID", "type/Integer").with_semantic_type(TYPE_FK),
                Column::new("NAME", "type/Text"),
            ],
            vec![vec![json!(7), json!(1283), Value::Null]],
        )
    }

    #[test]
    fn test_pk_click_opens_detail() {
        let (tx, rx) = mpsc::channel();
        let mut handler = DrillHandler::new(tx, None);
        handler.on_click(ClickTarget::for_cell(&data(), 0, 0).unwrap());
        assert_eq!(rx.try_recv().unwrap(), AppAction::OpenDetail { row_index: 0 });
    }

    #[test]
    fn test_fk_click() {
        let (tx, rx) = mpsc::channel();
        let mut handler = DrillHandler::new(tx, None);
        handler.on_click(ClickTarget::for_cell(&data(), 0, 1).unwrap());
        assert_eq!(
            rx.try_recv().unwrap(),
            AppAction::ForeignKey {
                column: "USER_ID".to_string(),
                value: json!(1283),
                target_field_id: None,
            }
        );
    }

    #[test]
    fn test_null_cells_not_clickable() {
        let (tx, _rx) = mpsc::channel();
        let handler = DrillHandler::new(tx, Some("Orders".to_string()));
        let target = ClickTarget::for_cell(&data(), 0, 2).unwrap();
        assert!(!handler.is_clickable(&target));
        let target = ClickTarget::for_cell(&data(), 0, 0).unwrap();
        assert!(handler.is_clickable(&target));
        assert_eq!(handler.extra_data(&target).get("card"), Some(&json!("Orders")));
    }
}
