//! Sort and page state of a table view.

/// Mutable view state. `page_size` is derived from layout, never set by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub page: usize,
    pub page_size: usize,
    pub sort_column: Option<usize>,
    pub sort_descending: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 1,
            sort_column: None,
            sort_descending: false,
        }
    }
}

impl ViewState {
    /// Header click: same column toggles direction, another column keeps it.
    pub fn set_sort(&mut self, column_index: usize) {
        if self.sort_column == Some(column_index) {
            self.sort_descending = !self.sort_descending;
        } else {
            self.sort_column = Some(column_index);
        }
    }

    /// Returns true when the page size actually changed.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        let page_size = page_size.max(1);
        if self.page_size == page_size {
            return false;
        }
        self.page_size = page_size;
        true
    }

    /// Index of the first row on the current page.
    pub fn page_start(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }

    /// One past the last row on the current page, clamped to `row_count`.
    pub fn page_end(&self, row_count: usize) -> usize {
        self.page_start()
            .saturating_add(self.page_size)
            .min(row_count)
    }

    pub fn has_previous_page(&self) -> bool {
        self.page_start() > 0
    }

    pub fn has_next_page(&self, row_count: usize) -> bool {
        self.page_start().saturating_add(self.page_size) < row_count
    }

    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous_page() {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn next_page(&mut self, row_count: usize) -> bool {
        if !self.has_next_page(row_count) {
            return false;
        }
        self.page += 1;
        true
    }
}
