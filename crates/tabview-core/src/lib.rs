//! # tabview-core
//!
//! Client-side table view for query results: sorting, layout-sized
//! pagination, per-cell presentation and click-to-drill mapping.
//!
//! This crate is UI agnostic. A host (the `tabview` terminal binary, or any
//! other renderer) owns drawing and input; it reports layout measurements
//! and clicks, and reads back what to draw.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tabview_core::prelude::*;
//!
//! fn main() -> tabview_core::Result<()> {
//!     let dataset = Dataset::load("result.json".as_ref())?;
//!     let settings = TableSettings::load(None)?;
//!     let card = dataset.card();
//!     let mut view = TabularResultView::new(dataset, card, settings);
//!
//!     // After each draw, report the measured layout.
//!     view.apply_layout(&LayoutMetrics::measured(400, 40, 30, 32));
//!     view.set_sort(0);
//!
//!     for &row in view.visible_slice() {
//!         println!("{}", view.cell(row, 0).text());
//!     }
//!     println!("{}", view.pagination_label());
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`model`]: result set, columns, query envelope
//! - [`schema`]: column classification (PK/FK, numeric, alignment)
//! - [`format`]: value formatting
//! - [`settings`]: per-column settings and highlight rules (TOML)
//! - [`view`]: the table view itself
//! - [`detail`]: single-record browsing
//! - [`display`]: plain-text table rendering
//! - [`error`]: error types

pub use error::AppError;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::Result;
    pub use crate::error::AppError;

    pub use crate::detail::ObjectDetail;
    pub use crate::display::TableDisplay;
    pub use crate::model::{Card, Column, Dataset, ResultSet};
    pub use crate::settings::{ColumnSettings, TableSettings};
    pub use crate::view::{
        CellContent, CellRect, ClickHandler, ClickTarget, LayoutMetrics, TabularResultView,
        ViewState,
    };
}

pub mod detail;
pub mod display;
pub mod error;
pub mod format;
pub mod model;
pub mod schema;
pub mod settings;
pub mod text;
pub mod view;

/// Convenient Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
