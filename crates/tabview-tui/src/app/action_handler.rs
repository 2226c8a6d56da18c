//! Processing of actions emitted by cell clicks.

use crate::action::AppAction;

use super::App;

impl App {
    /// Drain and apply pending actions.
    pub(super) fn process_actions(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.handle_action(action);
        }
    }

    fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::OpenDetail { row_index } => {
                match self.table.view().object_detail(row_index) {
                    Some(detail) => {
                        self.open_detail(detail);
                        self.status_bar.set_message("");
                    }
                    None => log::warn!("Row {} not in current order", row_index),
                }
            }
            AppAction::ForeignKey {
                column,
                value,
                target_field_id,
            } => {
                let target = target_field_id
                    .map(|id| format!(" (field {})", id))
                    .unwrap_or_default();
                log::info!("Foreign key drill on {} = {}{}", column, value, target);
                self.status_bar.set_message(format!(
                    "{} = {} links to another table{}",
                    column, value, target
                ));
            }
            AppAction::Drill { column, value } => {
                log::info!("Drill on {} = {}", column, value);
                self.status_bar
                    .set_message(format!("Drill: {} = {}", column, value));
            }
        }
    }
}
