//! Page size derived from measured layout.
//!
//! The host measures the rendered grid after each draw and reports the
//! metrics here; the result feeds back into [`super::ViewState::page_size`].

/// Heights measured after a layout pass, in the host's units (pixels, lines).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    pub available_height: u32,
    pub header_height: u32,
    /// Zero when the footer was not rendered.
    pub footer_height: u32,
    pub row_height: u32,
    /// Space taken by the separator under each row.
    pub row_spacing: u32,
}

impl LayoutMetrics {
    /// Metrics for a grid whose rows carry a one-unit bottom border.
    pub fn measured(
        available_height: u32,
        header_height: u32,
        footer_height: u32,
        row_height: u32,
    ) -> Self {
        Self {
            available_height,
            header_height,
            footer_height,
            row_height,
            row_spacing: 1,
        }
    }

    pub fn with_row_spacing(mut self, row_spacing: u32) -> Self {
        self.row_spacing = row_spacing;
        self
    }

    pub fn page_size(&self) -> usize {
        page_size_for(self)
    }
}

/// `max(1, floor((available - header - footer) / (row_height + 1)))`.
pub fn compute_page_size(
    available_height: u32,
    header_height: u32,
    footer_height: u32,
    row_height: u32,
) -> usize {
    LayoutMetrics::measured(available_height, header_height, footer_height, row_height).page_size()
}

fn page_size_for(metrics: &LayoutMetrics) -> usize {
    let body = metrics
        .available_height
        .saturating_sub(metrics.header_height)
        .saturating_sub(metrics.footer_height);
    let per_row = metrics.row_height.saturating_add(metrics.row_spacing);
    if per_row == 0 {
        return 1;
    }
    ((body / per_row) as usize).max(1)
}
