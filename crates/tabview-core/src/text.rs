//! Display-width aware text helpers.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to at most `max_width` display columns, ending in `...`
/// when cut. CJK characters count as two columns.
///
/// # Examples
/// ```
/// use tabview_core::text::truncate_to_width;
/// assert_eq!(truncate_to_width("hello world", 8), "hello...");
/// assert_eq!(truncate_to_width("short", 8), "short");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut result = String::new();
    let mut current_width = 0;
    for ch in text.chars() {
        let char_width = ch.width().unwrap_or(0);
        if current_width + char_width > budget {
            break;
        }
        result.push(ch);
        current_width += char_width;
    }
    result.push_str("...");
    result
}

/// Pad `text` with spaces to exactly `width` display columns, truncating
/// first if needed.
pub fn fit_to_width(text: &str, width: usize, right_align: bool) -> String {
    let text = truncate_to_width(text, width);
    let padding = " ".repeat(width.saturating_sub(text.width()));
    if right_align {
        format!("{}{}", padding, text)
    } else {
        format!("{}{}", text, padding)
    }
}
