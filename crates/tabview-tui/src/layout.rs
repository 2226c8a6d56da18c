//! Layout constants for the tabview TUI.

/// Main layout constants.
pub mod main {
    /// Status bar height in rows.
    pub const STATUS_BAR_HEIGHT: u16 = 3;
}

/// Result table geometry, in terminal lines.
pub mod result_table {
    /// Top border, header row and the margin under it.
    pub const HEADER_HEIGHT: u16 = 3;

    /// Bottom border.
    pub const BOTTOM_BORDER: u16 = 1;

    /// Pagination line, only drawn when rows overflow one page.
    pub const FOOTER_HEIGHT: u16 = 1;

    /// Minimum column width before columns scroll horizontally.
    pub const MIN_COLUMN_WIDTH: u16 = 15;

    /// Width of a mini bar inside a cell.
    pub const MINI_BAR_WIDTH: usize = 8;
}
