//! Keyboard input handling.

use crossterm::event::{KeyCode, KeyModifiers};

use super::App;

impl App {
    pub(super) fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.handle_overlay_keys(code) {
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.table.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.table.move_down(),
            KeyCode::Left | KeyCode::Char('h') => self.table.move_left(),
            KeyCode::Right | KeyCode::Char('l') => self.table.move_right(),
            KeyCode::Char('s') => self.table.sort_current_column(),
            KeyCode::Char('n') | KeyCode::PageDown => {
                if !self.table.next_page() {
                    self.status_bar.set_warning("Last page");
                }
            }
            KeyCode::Char('p') | KeyCode::PageUp => {
                if !self.table.previous_page() {
                    self.status_bar.set_warning("First page");
                }
            }
            KeyCode::Enter => {
                if !self.table.click_cursor_cell() {
                    self.status_bar.set_warning("Cell is not clickable");
                }
            }
            _ => {}
        }
    }

    /// Keys while the record detail overlay is open. Returns true if handled.
    fn handle_overlay_keys(&mut self, code: KeyCode) -> bool {
        let Some(detail) = self.record_detail.as_mut() else {
            return false;
        };
        let field_count = self.table.view().data().cols.len();
        match code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                self.record_detail = None;
            }
            KeyCode::Up | KeyCode::Char('k') => detail.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => detail.scroll_down(field_count),
            KeyCode::Char('[') | KeyCode::Left => {
                if !detail.previous_record() {
                    self.status_bar.set_warning("Already at the first record");
                }
            }
            KeyCode::Char(']') | KeyCode::Right => {
                if !detail.next_record() {
                    self.status_bar.set_warning("Already at the last record");
                }
            }
            _ => {}
        }
        true
    }
}
