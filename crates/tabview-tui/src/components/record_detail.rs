//! Record detail overlay component.
//!
//! Shows every field of one row, with previous/next browsing in the table's
//! current sort order.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tabview_core::detail::ObjectDetail;
use tabview_core::text::{fit_to_width, truncate_to_width};
use tabview_core::view::TabularResultView;
use unicode_width::UnicodeWidthStr;

use super::styles::TEXT_DIM;

pub struct RecordDetailOverlay {
    detail: ObjectDetail,
    /// Currently selected field index (cursor position)
    selected_index: usize,
    /// Scroll offset for viewport management
    scroll_offset: usize,
}

impl RecordDetailOverlay {
    pub fn new(detail: ObjectDetail) -> Self {
        Self {
            detail,
            selected_index: 0,
            scroll_offset: 0,
        }
    }

    pub fn row_index(&self) -> usize {
        self.detail.row_index()
    }

    pub fn scroll_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, field_count: usize) {
        if self.selected_index + 1 < field_count {
            self.selected_index += 1;
        }
    }

    /// Step to the previous record. Returns false at the first record.
    pub fn previous_record(&mut self) -> bool {
        self.detail.previous()
    }

    /// Step to the next record. Returns false at the last record.
    pub fn next_record(&mut self) -> bool {
        self.detail.next()
    }

    /// Render the overlay centered on screen.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, view: &TabularResultView) {
        let popup_area = Self::centered_rect(70, 80, area);
        frame.render_widget(Clear, popup_area);

        let data = view.data();
        let row = self.detail.row_index();

        // Border (2) + blank lines (3) + position line + help line.
        let visible_fields = (popup_area.height.saturating_sub(7) as usize).max(1);
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible_fields {
            self.scroll_offset = self.selected_index + 1 - visible_fields;
        }

        let max_title_width = (0..data.cols.len())
            .map(|i| view.column_title(i).width())
            .max()
            .unwrap_or(0)
            .min(24);
        let max_val_width = popup_area
            .width
            .saturating_sub(max_title_width as u16 + 10) as usize;

        let mut lines: Vec<Line> = vec![Line::from("")];
        let end_index = (self.scroll_offset + visible_fields).min(data.cols.len());
        for i in self.scroll_offset..end_index {
            let padded = fit_to_width(view.column_title(i), max_title_width, true);
            let value = truncate_to_width(view.cell(row, i).text(), max_val_width);

            let is_selected = i == self.selected_index;
            let (prefix, title_style, value_style) = if is_selected {
                let selected = Style::default().fg(Color::Black).bg(Color::Cyan);
                ("► ", selected.add_modifier(Modifier::BOLD), selected)
            } else {
                (
                    "  ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                    Style::default(),
                )
            };

            lines.push(Line::from(vec![
                Span::raw(prefix),
                Span::styled(padded, title_style),
                Span::styled(" : ", TEXT_DIM),
                Span::styled(value, value_style),
            ]));
        }

        lines.push(Line::from(""));
        let position = view
            .sorted_row_order()
            .iter()
            .position(|&r| r == row)
            .map(|p| p + 1)
            .unwrap_or(0);
        lines.push(Line::from(Span::styled(
            format!(
                "  Record {}/{}  Field {}/{}",
                position,
                view.row_count(),
                self.selected_index + 1,
                data.cols.len()
            ),
            TEXT_DIM,
        )));

        let nav_style = |enabled: bool| {
            if enabled {
                Style::default().fg(Color::Yellow)
            } else {
                TEXT_DIM
            }
        };
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  [", TEXT_DIM),
            Span::styled("↑↓", Style::default().fg(Color::Yellow)),
            Span::styled(" Move] [", TEXT_DIM),
            Span::styled("[", nav_style(self.detail.has_previous())),
            Span::styled(" Prev] [", TEXT_DIM),
            Span::styled("]", nav_style(self.detail.has_next())),
            Span::styled(" Next] [", TEXT_DIM),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" Close]", TEXT_DIM),
        ]));

        let title = match self.detail.pk_value(data) {
            Some(pk) if !pk.is_null() => format!(" Record Detail #{} ", pk),
            _ => " Record Detail ".to_string(),
        };
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(title)
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, popup_area);
    }

    fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
        let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

        let [area] = vertical.areas(area);
        let [area] = horizontal.areas(area);
        area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_browsing() {
        let detail = ObjectDetail::open(&[2, 0, 1], 2).unwrap();
        let mut overlay = RecordDetailOverlay::new(detail);
        assert!(!overlay.previous_record());
        assert!(overlay.next_record());
        assert_eq!(overlay.row_index(), 0);
        assert!(overlay.next_record());
        assert!(!overlay.next_record());
        assert_eq!(overlay.row_index(), 1);
    }

    #[test]
    fn test_field_cursor_bounds() {
        let detail = ObjectDetail::open(&[0], 0).unwrap();
        let mut overlay = RecordDetailOverlay::new(detail);
        overlay.scroll_up();
        assert_eq!(overlay.selected_index, 0);
        overlay.scroll_down(2);
        overlay.scroll_down(2);
        assert_eq!(overlay.selected_index, 1);
    }
}
