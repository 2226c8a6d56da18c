//! Cell presentation, classified once per cell.

use serde_json::Value;

use crate::format::{FormatOptions, FormattedValue, format_value};
use crate::model::{Column, ResultSet};
use crate::settings::ColumnSettings;

/// Placeholder shown for null cells.
pub const NULL_PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Placeholder,
    MiniBar(MiniBar),
    Link { text: String, url: String },
    Text { text: String },
}

/// Magnitude bar for a numeric cell, scaled against its column's extent.
#[derive(Debug, Clone, PartialEq)]
pub struct MiniBar {
    pub value: f64,
    pub extent: (f64, f64),
    pub label: String,
}

impl CellContent {
    /// Pick the presentation for `value`. `extent` is only evaluated for mini bars.
    pub fn classify(
        value: &Value,
        column: &Column,
        settings: &ColumnSettings,
        extent: impl FnOnce() -> (f64, f64),
    ) -> Self {
        if value.is_null() {
            return CellContent::Placeholder;
        }
        if settings.show_mini_bar {
            if let Some(number) = value.as_f64() {
                let label = format_value(value, column, settings, FormatOptions { rich: true })
                    .text()
                    .to_string();
                return CellContent::MiniBar(MiniBar {
                    value: number,
                    extent: extent(),
                    label,
                });
            }
        }
        match format_value(value, column, settings, FormatOptions { rich: true }) {
            FormattedValue::Link { text, url } => CellContent::Link { text, url },
            FormattedValue::Text(text) => CellContent::Text { text },
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, CellContent::Link { .. })
    }

    /// Plain text for hosts that cannot draw bars.
    pub fn text(&self) -> &str {
        match self {
            CellContent::Placeholder => NULL_PLACEHOLDER,
            CellContent::MiniBar(bar) => &bar.label,
            CellContent::Link { text, .. } | CellContent::Text { text } => text,
        }
    }
}

impl MiniBar {
    /// Fraction of the bar filled, in `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        let (min, max) = self.extent;
        let scale = min.abs().max(max.abs());
        if scale == 0.0 {
            return 0.0;
        }
        (self.value.abs() / scale).clamp(0.0, 1.0)
    }

    /// Draw the bar in `width` cells. Columns containing negatives center the
    /// zero line, negatives growing left and positives right.
    pub fn render(&self, width: usize) -> String {
        let (min, _) = self.extent;
        let fraction = self.fraction();
        if min >= 0.0 {
            let filled = ((fraction * width as f64).round() as usize).min(width);
            return format!("{}{}", "█".repeat(filled), " ".repeat(width - filled));
        }

        let half = width / 2;
        let filled = ((fraction * half as f64).round() as usize).min(half);
        let right_half = width - half;
        if self.value < 0.0 {
            format!(
                "{}{}{}",
                " ".repeat(half - filled),
                "█".repeat(filled),
                " ".repeat(right_half)
            )
        } else {
            format!(
                "{}{}{}",
                " ".repeat(half),
                "█".repeat(filled.min(right_half)),
                " ".repeat(right_half - filled.min(right_half))
            )
        }
    }
}

/// `(min, max)` over the numeric cells of `column`, or `(0, 0)` when none are numeric.
pub fn column_extent(data: &ResultSet, column: usize) -> (f64, f64) {
    let mut numbers = (0..data.row_count()).filter_map(|row| data.cell(row, column).as_f64());
    let Some(first) = numbers.next() else {
        return (0.0, 0.0);
    };
    numbers.fold((first, first), |(min, max), n| (min.min(n), max.max(n)))
}
