//! Visible slice and pagination label.

use super::state::ViewState;

/// Maximum number of rows the backend returns for an unlimited query.
/// A result this large is assumed to be truncated.
pub const HARD_ROW_LIMIT: usize = 2000;

/// Slice of `order` shown on the current page.
///
/// Covers positions `[page * page_size, min(row_count, (page + 1) * page_size))`;
/// a page past the end yields an empty slice.
pub fn visible_slice<'a>(order: &'a [usize], state: &ViewState) -> &'a [usize] {
    let start = state.page_start().min(order.len());
    let end = state.page_end(order.len());
    &order[start..end.max(start)]
}

/// Footer text, e.g. `"Rows 21-25 of 25"`.
///
/// When the query had no explicit limit and the result hit
/// [`HARD_ROW_LIMIT`], the count reads `"of first N"`.
pub fn pagination_label(state: &ViewState, row_count: usize, row_limit: Option<u64>) -> String {
    let start = state.page_start();
    // Exclusive 0-based end is the inclusive 1-based end of the label.
    let end = state.page_end(row_count);
    if row_limit.is_none() && row_count >= HARD_ROW_LIMIT {
        format!("Rows {}-{} of first {}", start + 1, end, row_count)
    } else {
        format!("Rows {}-{} of {}", start + 1, end, row_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(page: usize, page_size: usize) -> ViewState {
        ViewState {
            page,
            page_size,
            ..Default::default()
        }
    }

    #[test]
    fn test_last_partial_page() {
        let order: Vec<usize> = (0..25).collect();
        let s = state(2, 10);
        assert_eq!(visible_slice(&order, &s), &[20, 21, 22, 23, 24]);
        assert_eq!(pagination_label(&s, 25, None), "Rows 21-25 of 25");
    }

    #[test]
    fn test_pages_are_contiguous_and_disjoint() {
        let order: Vec<usize> = (0..37).rev().collect();
        let page_size = 8;
        let mut covered = Vec::new();
        let mut page = 0;
        loop {
            let s = state(page, page_size);
            let slice = visible_slice(&order, &s);
            assert!(slice.len() <= page_size);
            if slice.is_empty() {
                break;
            }
            covered.extend_from_slice(slice);
            page += 1;
        }
        assert_eq!(covered, order);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let order: Vec<usize> = (0..5).collect();
        assert!(visible_slice(&order, &state(3, 10)).is_empty());
        assert!(visible_slice(&[], &state(0, 10)).is_empty());
    }

    #[test]
    fn test_truncated_label() {
        let s = state(0, 50);
        assert_eq!(
            pagination_label(&s, HARD_ROW_LIMIT, None),
            "Rows 1-50 of first 2000"
        );
        assert_eq!(
            pagination_label(&s, HARD_ROW_LIMIT, Some(5000)),
            "Rows 1-50 of 2000"
        );
        assert_eq!(pagination_label(&s, 1999, None), "Rows 1-50 of 1999");
    }

    #[test]
    fn test_empty_result_label() {
        assert_eq!(pagination_label(&state(0, 10), 0, None), "Rows 1-0 of 0");
    }
}
