//! Application state and main loop.
//!
//! ## Module Structure
//! - `mod.rs`: App struct, initialization, rendering and the run loop
//! - `action_handler.rs`: processing of click actions
//! - `input_handler.rs`: keyboard event processing

mod action_handler;
mod input_handler;

use std::sync::mpsc;

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};
use tabview_core::detail::ObjectDetail;
use tabview_core::view::TabularResultView;

use crate::action::AppAction;
use crate::components::{Component, DrillHandler, RecordDetailOverlay, ResultTable, StatusBar};
use crate::event::{Event, EventHandler};
use crate::layout::main::STATUS_BAR_HEIGHT;

const TICK_RATE_MS: u64 = 250;

pub struct App {
    pub should_quit: bool,
    pub(crate) table: ResultTable,
    pub(crate) status_bar: StatusBar,
    pub(crate) record_detail: Option<RecordDetailOverlay>,
    action_rx: mpsc::Receiver<AppAction>,
}

impl App {
    /// Wrap `view` in the app, installing the drill handler for cell clicks.
    /// The card name titles the table.
    pub fn new(mut view: TabularResultView) -> Self {
        let card_name = view.card().name.clone();
        let title = card_name.clone().unwrap_or_else(|| "Result".to_string());
        let (action_tx, action_rx) = mpsc::channel();
        view.set_click_handler(Some(Box::new(DrillHandler::new(action_tx, card_name))));

        Self {
            should_quit: false,
            table: ResultTable::new(view, title),
            status_bar: StatusBar::new(),
            record_detail: None,
            action_rx,
        }
    }

    /// Show the record detail overlay on `detail`.
    pub fn open_detail(&mut self, detail: ObjectDetail) {
        self.record_detail = Some(RecordDetailOverlay::new(detail));
    }

    /// Run until the user quits.
    pub fn run(
        &mut self,
        terminal: &mut ratatui::Terminal<impl ratatui::backend::Backend>,
    ) -> std::io::Result<()> {
        let event_handler = EventHandler::new(TICK_RATE_MS);

        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;

            // The page size changed during that draw; draw again before waiting.
            if self.table.take_layout_changed() {
                continue;
            }

            match event_handler.next()? {
                Event::Key(key) => {
                    self.handle_key(key.code, key.modifiers);
                    self.process_actions();
                }
                Event::Resize(w, h) => log::debug!("Terminal resized to {}x{}", w, h),
                Event::Tick => {}
            }
        }
        Ok(())
    }

    pub(crate) fn render(&mut self, frame: &mut Frame) {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
                .areas(frame.area());

        self.table
            .draw(frame, main_area, self.record_detail.is_none());
        self.status_bar.draw(frame, status_area, false);

        if let Some(detail) = self.record_detail.as_mut() {
            detail.render(frame, main_area, self.table.view());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};
    use serde_json::{Value, json};
    use tabview_core::model::{Card, Column, Dataset, ResultSet};
    use tabview_core::schema::{TYPE_FK, TYPE_PK};
    use tabview_core::settings::TableSettings;

    fn app() -> App {
        let data = ResultSet::new(
            vec![
                Column::new("ID", "type/Integer").with_semantic_type(TYPE_PK),
                Column::new("USER_ID", "type/Integer").with_semantic_type(TYPE_FK),
                Column::new("DISCOUNT", "type/Float"),
            ],
            vec![
                vec![json!(9676), json!(1283), json!(3.5)],
                vec![json!(10874), json!(1284), Value::Null],
                vec![json!(11246), json!(1285), json!(1.25)],
            ],
        );
        let view = TabularResultView::new(
            Dataset::new(data),
            Card::default().with_name("Orders"),
            TableSettings::default(),
        );
        App::new(view)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(code, KeyModifiers::NONE);
        app.process_actions();
    }

    fn draw(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        for _ in 0..3 {
            terminal.draw(|frame| app.render(frame)).unwrap();
        }
    }

    #[test]
    fn test_pk_click_opens_detail_and_browses() {
        let mut app = app();
        draw(&mut app);
        press(&mut app, KeyCode::Enter);
        let detail = app.record_detail.as_ref().expect("detail should open");
        assert_eq!(detail.row_index(), 0);

        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.record_detail.as_ref().unwrap().row_index(), 1);
        press(&mut app, KeyCode::Char('['));
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.record_detail.as_ref().unwrap().row_index(), 0);
        assert!(app.status_bar.message().contains("first record"));

        draw(&mut app);
        press(&mut app, KeyCode::Esc);
        assert!(app.record_detail.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_fk_click_reports_status() {
        let mut app = app();
        draw(&mut app);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert!(app.record_detail.is_none());
        assert!(app.status_bar.message().contains("USER_ID = 1283"));
    }

    #[test]
    fn test_null_cell_is_not_clickable() {
        let mut app = app();
        draw(&mut app);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.status_bar.message(), "Cell is not clickable");
    }

    #[test]
    fn test_open_detail_by_pk_at_start() {
        let mut app = app();
        let view = app.table.view();
        let detail =
            ObjectDetail::for_pk(view.data(), view.sorted_row_order(), &json!("11246")).unwrap();
        app.open_detail(detail);
        assert_eq!(app.record_detail.as_ref().unwrap().row_index(), 2);
        draw(&mut app);
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.status_bar.message(), "Already at the last record");
    }

    #[test]
    fn test_sort_key_and_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('s'));
        let state = app.table.view().state();
        assert_eq!(state.sort_column, Some(0));
        assert!(state.sort_descending);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
