use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, presets};
use crossterm::terminal;

use crate::detail::ObjectDetail;
use crate::error::{AppError, DisplayError};
use crate::schema;
use crate::text::truncate_to_width;
use crate::view::{CellContent, TabularResultView, cell_content, column_extent};

const MINI_BAR_WIDTH: usize = 10;
const MAX_CELL_WIDTH: usize = 100;

pub struct TableDisplay {
    max_width: Option<usize>,
    use_colors: bool,
}

impl TableDisplay {
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: true,
        }
    }

    fn detect_terminal_width() -> Option<usize> {
        match terminal::size() {
            Ok((cols, _)) => {
                let width = cols as usize;
                Some(width.clamp(40, 200))
            }
            Err(_) => Some(80),
        }
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn bold_header(&self, text: &str) -> Cell {
        if self.use_colors {
            Cell::new(text).add_attribute(Attribute::Bold).fg(Color::Green)
        } else {
            Cell::new(text).add_attribute(Attribute::Bold)
        }
    }

    /// Render the view's current page followed by its pagination label.
    pub fn render_page(&self, view: &TabularResultView) -> Result<String, AppError> {
        let data = view.data();
        if data.cols.is_empty() {
            return Err(DisplayError::TableFormat("result has no columns".to_string()).into());
        }
        if data.rows.is_empty() {
            return Ok("Query returned no results.".to_string());
        }

        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        self.configure_table_width(&mut table);

        let state = view.state();
        let headers: Vec<Cell> = (0..data.cols.len())
            .map(|i| {
                let title = view.column_title(i);
                let header = match state.sort_column {
                    Some(c) if c == i && state.sort_descending => format!("{} ↓", title),
                    Some(c) if c == i => format!("{} ↑", title),
                    _ => title.to_string(),
                };
                self.bold_header(&header)
            })
            .collect();
        table.set_header(headers);

        for (col_idx, column) in data.cols.iter().enumerate() {
            if schema::is_column_right_aligned(column) {
                if let Some(col) = table.column_mut(col_idx) {
                    col.set_cell_alignment(CellAlignment::Right);
                }
            }
        }

        for &row_index in view.visible_slice() {
            let cells: Vec<Cell> = (0..data.cols.len())
                .map(|col_idx| {
                    let cell = self.content_cell(&view.cell(row_index, col_idx));
                    match view.background_color(row_index, col_idx) {
                        Some(name) if self.use_colors => cell.bg(parse_color(name)),
                        _ => cell,
                    }
                })
                .collect();
            table.add_row(cells);
        }

        Ok(format!("{}\n{}", table, view.pagination_label()))
    }

    /// Render one record as a field/value table with its position in the
    /// current row order.
    pub fn render_detail(
        &self,
        view: &TabularResultView,
        detail: &ObjectDetail,
    ) -> Result<String, AppError> {
        let data = view.data();
        if data.cols.is_empty() {
            return Err(DisplayError::TableFormat("result has no columns".to_string()).into());
        }

        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        self.configure_table_width(&mut table);
        table.set_header(vec![self.bold_header("Field"), self.bold_header("Value")]);

        for (i, field) in detail.fields(data).iter().enumerate() {
            let content = cell_content(
                &field.value,
                &field.column,
                view.settings().column(&field.column),
                || column_extent(data, i),
            );
            table.add_row(vec![
                Cell::new(view.column_title(i)),
                self.content_cell(&content),
            ]);
        }

        let position = view
            .sorted_row_order()
            .iter()
            .position(|&r| r == detail.row_index())
            .map(|p| p + 1)
            .unwrap_or(0);
        let title = match detail.pk_value(data) {
            Some(pk) if !pk.is_null() => format!("Record #{}", pk),
            _ => "Record".to_string(),
        };
        Ok(format!(
            "{}\n{}\n{} of {}",
            title,
            table,
            position,
            view.row_count()
        ))
    }

    fn content_cell(&self, content: &CellContent) -> Cell {
        match content {
            CellContent::Placeholder if self.use_colors => Cell::new(content.text())
                .fg(Color::DarkGrey)
                .add_attribute(Attribute::Italic),
            CellContent::MiniBar(bar) => {
                Cell::new(format!("{} {}", bar.render(MINI_BAR_WIDTH), bar.label))
            }
            CellContent::Link { text, .. } if self.use_colors => {
                Cell::new(truncate_to_width(text, MAX_CELL_WIDTH))
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Underlined)
            }
            other => Cell::new(truncate_to_width(other.text(), MAX_CELL_WIDTH)),
        }
    }

    fn configure_table_width(&self, table: &mut Table) {
        let width = self
            .max_width
            .map(|w| if w > 20 { w - 6 } else { w.max(40) })
            .unwrap_or(80);
        table.set_width(width as u16);
    }
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a settings color name onto the terminal palette. Unknown names fall back to grey.
pub fn parse_color(name: &str) -> Color {
    match name.to_ascii_lowercase().as_str() {
        "red" => Color::DarkRed,
        "green" => Color::DarkGreen,
        "yellow" => Color::DarkYellow,
        "blue" => Color::DarkBlue,
        "magenta" | "purple" => Color::DarkMagenta,
        "cyan" => Color::DarkCyan,
        _ => Color::DarkGrey,
    }
}
