//! Tabular result view: client-side sort, layout-sized pagination and
//! click-to-drill over a query result.
//!
//! ## Module Structure
//! - `state.rs`: sort column/direction and page position
//! - `layout.rs`: page size from measured layout
//! - `sort.rs`: sort keys and row permutation
//! - `pagination.rs`: visible slice and footer label
//! - `cell.rs`: per-cell presentation (placeholder, mini bar, link, text)
//! - `click.rs`: click targets and the caller's click handler

mod cell;
mod click;
mod layout;
mod pagination;
mod sort;
mod state;

pub use cell::{CellContent, MiniBar, NULL_PLACEHOLDER, column_extent};
pub use click::{CellRect, ClickHandler, ClickTarget, RowCell};
pub use layout::{LayoutMetrics, compute_page_size};
pub use pagination::{HARD_ROW_LIMIT, pagination_label, visible_slice};
pub use sort::{SortKey, sorted_row_order};
pub use state::ViewState;

use serde_json::Value;

use crate::detail::ObjectDetail;
use crate::model::{Card, Column, Dataset, ResultSet};
use crate::settings::{ColumnSettings, TableSettings};

/// Presentation for one cell given its column settings.
///
/// `extent` supplies the column's `(min, max)` and is only called for mini bars.
pub fn cell_content(
    value: &Value,
    column: &Column,
    settings: &ColumnSettings,
    extent: impl FnOnce() -> (f64, f64),
) -> CellContent {
    CellContent::classify(value, column, settings, extent)
}

/// Paginated, sortable, clickable grid over a [`ResultSet`].
pub struct TabularResultView {
    dataset: Dataset,
    card: Card,
    settings: TableSettings,
    state: ViewState,
    /// Sorted row permutation, rebuilt on sort or data change.
    order: Vec<usize>,
    /// Numeric extent per column, filled for mini-bar columns only.
    extents: Vec<Option<(f64, f64)>>,
    click_handler: Option<Box<dyn ClickHandler>>,
}

impl TabularResultView {
    pub fn new(dataset: Dataset, card: Card, settings: TableSettings) -> Self {
        let mut view = Self {
            dataset,
            card,
            settings,
            state: ViewState::default(),
            order: Vec::new(),
            extents: Vec::new(),
            click_handler: None,
        };
        view.rebuild();
        view
    }

    pub fn with_click_handler(mut self, handler: Box<dyn ClickHandler>) -> Self {
        self.click_handler = Some(handler);
        self
    }

    pub fn set_click_handler(&mut self, handler: Option<Box<dyn ClickHandler>>) {
        self.click_handler = handler;
    }

    pub fn data(&self) -> &ResultSet {
        &self.dataset.data
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn settings(&self) -> &TableSettings {
        &self.settings
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn row_count(&self) -> usize {
        self.dataset.data.row_count()
    }

    /// Replace the result. Sort and page survive; a sort column that no longer
    /// exists is cleared and the page is pulled back onto the last page.
    pub fn set_result(&mut self, dataset: Dataset, card: Card) {
        self.dataset = dataset;
        self.card = card;
        if self
            .state
            .sort_column
            .is_some_and(|c| c >= self.dataset.data.cols.len())
        {
            log::debug!("Sort column no longer present, clearing sort");
            self.state.sort_column = None;
        }
        self.clamp_page();
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.order = sorted_row_order(
            &self.dataset.data,
            self.state.sort_column,
            self.state.sort_descending,
        );
        let data = &self.dataset.data;
        self.extents = data
            .cols
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.settings
                    .column(col)
                    .show_mini_bar
                    .then(|| column_extent(data, i))
            })
            .collect();
    }

    /// Pull the page back onto the last page when it lies past the end, as
    /// after a relayout that grew the page size.
    pub fn clamp_page(&mut self) {
        let rows = self.row_count();
        let last_page = rows.saturating_sub(1) / self.state.page_size;
        if self.state.page > last_page {
            self.state.page = last_page;
        }
    }

    /// Header click on `column_index`.
    pub fn set_sort(&mut self, column_index: usize) {
        self.state.set_sort(column_index);
        log::debug!(
            "Sort on column {} ({})",
            column_index,
            if self.state.sort_descending { "desc" } else { "asc" }
        );
        self.order = sorted_row_order(
            &self.dataset.data,
            self.state.sort_column,
            self.state.sort_descending,
        );
    }

    /// Post-layout callback. Returns true when the page size changed and the
    /// host should draw again.
    pub fn apply_layout(&mut self, metrics: &LayoutMetrics) -> bool {
        let page_size = metrics.page_size();
        let changed = self.state.set_page_size(page_size);
        if changed {
            log::debug!("Page size now {}", page_size);
        }
        changed
    }

    pub fn sorted_row_order(&self) -> &[usize] {
        &self.order
    }

    /// Row indices shown on the current page, in display order.
    pub fn visible_slice(&self) -> &[usize] {
        visible_slice(&self.order, &self.state)
    }

    pub fn pagination_label(&self) -> String {
        pagination_label(&self.state, self.row_count(), self.card.row_limit())
    }

    /// The footer is only shown when rows do not fit on one page.
    pub fn shows_footer(&self) -> bool {
        self.state.page_size < self.row_count()
    }

    pub fn has_previous_page(&self) -> bool {
        self.state.has_previous_page()
    }

    pub fn has_next_page(&self) -> bool {
        self.state.has_next_page(self.row_count())
    }

    pub fn previous_page(&mut self) -> bool {
        self.state.previous_page()
    }

    pub fn next_page(&mut self) -> bool {
        let rows = self.row_count();
        self.state.next_page(rows)
    }

    /// Header text: settings override or the column's display name.
    pub fn column_title(&self, column_index: usize) -> &str {
        match self.dataset.data.cols.get(column_index) {
            Some(col) => self
                .settings
                .column(col)
                .column_title
                .as_deref()
                .unwrap_or_else(|| col.title()),
            None => "",
        }
    }

    /// Presentation of the cell at `(row_index, column_index)`.
    pub fn cell(&self, row_index: usize, column_index: usize) -> CellContent {
        let data = &self.dataset.data;
        let Some(column) = data.cols.get(column_index) else {
            return CellContent::Placeholder;
        };
        let extent = self.extents.get(column_index).copied().flatten();
        cell_content(
            data.cell(row_index, column_index),
            column,
            self.settings.column(column),
            || extent.unwrap_or_else(|| column_extent(data, column_index)),
        )
    }

    pub fn background_color(&self, row_index: usize, column_index: usize) -> Option<&str> {
        let data = &self.dataset.data;
        let column = data.cols.get(column_index)?;
        self.settings
            .background_color(data.cell(row_index, column_index), row_index, &column.name)
    }

    /// Whether clicking the cell would reach the click handler.
    pub fn is_cell_clickable(&self, row_index: usize, column_index: usize) -> bool {
        let Some(handler) = &self.click_handler else {
            return false;
        };
        if self.cell(row_index, column_index).is_link() {
            return false;
        }
        ClickTarget::for_cell(&self.dataset.data, row_index, column_index)
            .is_some_and(|target| handler.is_clickable(&target))
    }

    /// Click on the cell at data row `row_index`. Returns true when the click
    /// handler was invoked.
    pub fn on_cell_click(&mut self, row_index: usize, column_index: usize) -> bool {
        self.on_cell_click_at(row_index, column_index, None)
    }

    pub fn on_cell_click_at(
        &mut self,
        row_index: usize,
        column_index: usize,
        element: Option<CellRect>,
    ) -> bool {
        if row_index >= self.row_count() || self.cell(row_index, column_index).is_link() {
            return false;
        }
        let Some(handler) = self.click_handler.as_mut() else {
            return false;
        };
        let Some(mut target) = ClickTarget::for_cell(&self.dataset.data, row_index, column_index)
        else {
            return false;
        };
        if !handler.is_clickable(&target) {
            return false;
        }
        target.extra_data = handler.extra_data(&target);
        target.element = element;
        log::debug!(
            "Click on row {} column {} ({})",
            row_index,
            column_index,
            target.column.name
        );
        handler.on_click(target);
        true
    }

    /// Click on the `position`-th row of the current page.
    pub fn on_visible_cell_click(
        &mut self,
        position: usize,
        column_index: usize,
        element: Option<CellRect>,
    ) -> bool {
        match self.visible_slice().get(position).copied() {
            Some(row_index) => self.on_cell_click_at(row_index, column_index, element),
            None => false,
        }
    }

    /// Record view for `row_index`, browsable in the current sort order.
    pub fn object_detail(&self, row_index: usize) -> Option<ObjectDetail> {
        ObjectDetail::open(&self.order, row_index)
    }
}
