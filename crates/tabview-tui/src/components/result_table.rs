//! Result table component.
//!
//! Draws the view's current page, keeps a cell cursor, and reports the
//! measured layout back to the view after every draw.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use tabview_core::schema;
use tabview_core::view::{CellContent, CellRect, LayoutMetrics, TabularResultView};

use super::Component;
use super::styles::{
    MINI_BAR_NEGATIVE, MINI_BAR_POSITIVE, PLACEHOLDER, TEXT_DIM, border_style,
    clickable_id_style, cursor_cell_style, cursor_row_style, header_style, highlight_color,
    link_style, sorted_header_style,
};
use crate::layout::result_table::{
    BOTTOM_BORDER, FOOTER_HEIGHT, HEADER_HEIGHT, MIN_COLUMN_WIDTH, MINI_BAR_WIDTH,
};

/// Where the last draw put things, for mapping the cursor to screen cells.
#[derive(Debug, Clone, Copy, Default)]
struct TableGeometry {
    area: Rect,
    col_width: u16,
}

pub struct ResultTable {
    view: TabularResultView,
    title: String,
    /// Cursor row as a position on the current page.
    cursor_row: usize,
    /// Cursor column as a data column index.
    cursor_col: usize,
    /// First data column drawn.
    scroll_x: usize,
    geometry: TableGeometry,
    layout_changed: bool,
}

impl ResultTable {
    pub fn new(view: TabularResultView, title: impl Into<String>) -> Self {
        Self {
            view,
            title: title.into(),
            cursor_row: 0,
            cursor_col: 0,
            scroll_x: 0,
            geometry: TableGeometry::default(),
            layout_changed: false,
        }
    }

    pub fn view(&self) -> &TabularResultView {
        &self.view
    }

    /// True once after a draw that changed the page size; the caller should draw again.
    pub fn take_layout_changed(&mut self) -> bool {
        std::mem::take(&mut self.layout_changed)
    }

    #[cfg(test)]
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    fn page_len(&self) -> usize {
        self.view.visible_slice().len()
    }

    fn clamp_cursor(&mut self) {
        self.cursor_row = self.cursor_row.min(self.page_len().saturating_sub(1));
    }

    pub fn move_up(&mut self) {
        self.cursor_row = self.cursor_row.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor_row + 1 < self.page_len() {
            self.cursor_row += 1;
        }
    }

    pub fn move_left(&mut self) {
        self.cursor_col = self.cursor_col.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor_col + 1 < self.view.data().cols.len() {
            self.cursor_col += 1;
        }
    }

    pub fn sort_current_column(&mut self) {
        if self.cursor_col < self.view.data().cols.len() {
            self.view.set_sort(self.cursor_col);
        }
    }

    pub fn next_page(&mut self) -> bool {
        let moved = self.view.next_page();
        if moved {
            self.cursor_row = 0;
        }
        moved
    }

    pub fn previous_page(&mut self) -> bool {
        let moved = self.view.previous_page();
        if moved {
            self.cursor_row = 0;
        }
        moved
    }

    /// Data row index under the cursor.
    #[cfg(test)]
    pub fn cursor_row_index(&self) -> Option<usize> {
        self.view.visible_slice().get(self.cursor_row).copied()
    }

    /// Click the cell under the cursor. Returns true when it reached the click handler.
    pub fn click_cursor_cell(&mut self) -> bool {
        let rect = self.cursor_rect();
        self.view
            .on_visible_cell_click(self.cursor_row, self.cursor_col, Some(rect))
    }

    /// Screen rectangle of the cursor cell from the last draw.
    fn cursor_rect(&self) -> CellRect {
        let g = self.geometry;
        let col_offset = self.cursor_col.saturating_sub(self.scroll_x) as u16;
        CellRect {
            x: g.area.x + 1 + col_offset * g.col_width,
            y: g.area.y + HEADER_HEIGHT + self.cursor_row as u16,
            width: g.col_width,
            height: 1,
        }
    }

    fn visible_columns(&mut self, inner_width: u16) -> (usize, usize) {
        let total = self.view.data().cols.len();
        let fit = ((inner_width / MIN_COLUMN_WIDTH) as usize).max(1).min(total.max(1));
        if self.cursor_col < self.scroll_x {
            self.scroll_x = self.cursor_col;
        } else if self.cursor_col >= self.scroll_x + fit {
            self.scroll_x = self.cursor_col + 1 - fit;
        }
        let end = (self.scroll_x + fit).min(total);
        (self.scroll_x, end)
    }

    fn header_cell(&self, col_idx: usize) -> Cell<'static> {
        let state = self.view.state();
        let title = self.view.column_title(col_idx).to_string();
        if state.sort_column == Some(col_idx) {
            let arrow = if state.sort_descending { "↓" } else { "↑" };
            Cell::from(format!("{} {}", title, arrow)).style(sorted_header_style())
        } else {
            Cell::from(title).style(header_style())
        }
    }

    fn body_cell(&self, row_index: usize, col_idx: usize, is_cursor: bool) -> Cell<'static> {
        let column = &self.view.data().cols[col_idx];
        let content = self.view.cell(row_index, col_idx);
        let clickable_id =
            schema::is_id(column) && self.view.is_cell_clickable(row_index, col_idx);

        let (line, base) = match &content {
            CellContent::Placeholder => (Line::from(content.text().to_string()), PLACEHOLDER),
            CellContent::MiniBar(bar) => {
                let bar_style = if bar.value < 0.0 {
                    MINI_BAR_NEGATIVE
                } else {
                    MINI_BAR_POSITIVE
                };
                (
                    Line::from(vec![
                        Span::styled(bar.render(MINI_BAR_WIDTH), bar_style),
                        Span::raw(" "),
                        Span::raw(bar.label.clone()),
                    ]),
                    Style::default(),
                )
            }
            CellContent::Link { text, .. } => (Line::from(text.clone()), link_style()),
            CellContent::Text { text } if clickable_id => {
                (Line::from(text.clone()), clickable_id_style())
            }
            CellContent::Text { text } => (Line::from(text.clone()), Style::default()),
        };

        let line = if schema::is_column_right_aligned(column) {
            line.alignment(Alignment::Right)
        } else {
            line
        };

        let style = if is_cursor {
            cursor_cell_style()
        } else {
            match self.view.background_color(row_index, col_idx) {
                Some(color) => base.bg(highlight_color(color)),
                None => base,
            }
        };
        Cell::from(line).style(style)
    }

    fn footer_line(&self) -> Line<'static> {
        let arrow = |enabled: bool, glyph: &'static str| {
            if enabled {
                Span::styled(glyph, header_style())
            } else {
                Span::styled(glyph, TEXT_DIM)
            }
        };
        Line::from(vec![
            Span::raw(self.view.pagination_label()),
            Span::raw("  "),
            arrow(self.view.has_previous_page(), "◀"),
            Span::raw(" "),
            arrow(self.view.has_next_page(), "▶"),
            Span::raw(" "),
        ])
        .alignment(Alignment::Right)
    }

    fn title_line(&self, first_col: usize, end_col: usize) -> String {
        let total_cols = self.view.data().cols.len();
        let col_indicator = if end_col - first_col < total_cols {
            format!(" Col {}-{}/{}", first_col + 1, end_col, total_cols)
        } else {
            String::new()
        };
        let state = self.view.state();
        let sort_indicator = match state.sort_column {
            Some(c) => format!(
                " [Sort: {} {}]",
                self.view.column_title(c),
                if state.sort_descending { "↓" } else { "↑" }
            ),
            None => String::new(),
        };
        format!(
            " {} ({} rows){}{} ",
            self.title,
            self.view.row_count(),
            col_indicator,
            sort_indicator
        )
    }
}

impl Component for ResultTable {
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let footer_height = if self.view.shows_footer() {
            FOOTER_HEIGHT
        } else {
            0
        };
        let [table_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(footer_height)]).areas(area);

        let inner_width = table_area.width.saturating_sub(2);
        let (first_col, end_col) = self.visible_columns(inner_width);
        let visible_count = (end_col - first_col).max(1);

        let constraints: Vec<Constraint> = (first_col..end_col)
            .map(|_| {
                if visible_count <= 3 {
                    Constraint::Ratio(1, visible_count as u32)
                } else {
                    Constraint::Min(MIN_COLUMN_WIDTH)
                }
            })
            .collect();

        let header = Row::new((first_col..end_col).map(|c| self.header_cell(c)).collect::<Vec<_>>())
            .bottom_margin(1);

        let rows: Vec<Row> = self
            .view
            .visible_slice()
            .iter()
            .enumerate()
            .map(|(pos, &row_index)| {
                let cells: Vec<Cell> = (first_col..end_col)
                    .map(|c| {
                        let is_cursor = focused && pos == self.cursor_row && c == self.cursor_col;
                        self.body_cell(row_index, c, is_cursor)
                    })
                    .collect();
                let row = Row::new(cells);
                if pos == self.cursor_row {
                    row.style(cursor_row_style())
                } else {
                    row
                }
            })
            .collect();

        let table = Table::new(rows, constraints).header(header).block(
            Block::default()
                .title(self.title_line(first_col, end_col))
                .borders(Borders::ALL)
                .border_style(border_style(focused)),
        );
        frame.render_widget(table, table_area);

        if footer_height > 0 {
            frame.render_widget(Paragraph::new(self.footer_line()), footer_area);
        }

        self.geometry = TableGeometry {
            area: table_area,
            col_width: inner_width / visible_count as u16,
        };

        // Post-draw measurement: terminal rows are one line with no separator.
        let metrics = LayoutMetrics::measured(
            area.height as u32,
            HEADER_HEIGHT as u32,
            (BOTTOM_BORDER + footer_height) as u32,
            1,
        )
        .with_row_spacing(0);
        if self.view.apply_layout(&metrics) {
            self.view.clamp_page();
            self.layout_changed = true;
            self.clamp_cursor();
        }
    }
}
