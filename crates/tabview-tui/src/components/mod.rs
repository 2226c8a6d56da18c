//! UI components for the tabview TUI.

use ratatui::Frame;
use ratatui::layout::Rect;

mod drill;
mod record_detail;
mod result_table;
mod status_bar;
pub mod styles;

pub use drill::DrillHandler;
pub use record_detail::RecordDetailOverlay;
pub use result_table::ResultTable;
pub use status_bar::StatusBar;

/// Common interface for drawable components.
pub trait Component {
    /// Draw the component into `area`.
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool);
}
