//! Shared style definitions for TUI components.

use ratatui::style::{Color, Modifier, Style};

/// Border style for focused components.
pub const BORDER_FOCUSED: Style = Style::new().fg(Color::Cyan);

/// Border style for unfocused components.
pub const BORDER_UNFOCUSED: Style = Style::new().fg(Color::DarkGray);

#[inline]
pub fn border_style(focused: bool) -> Style {
    if focused {
        BORDER_FOCUSED
    } else {
        BORDER_UNFOCUSED
    }
}

// === Table Styles ===

pub fn header_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Header of the column the table is sorted on.
pub fn sorted_header_style() -> Style {
    header_style().add_modifier(Modifier::UNDERLINED)
}

/// The cell under the cursor.
pub fn cursor_cell_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Row containing the cursor.
pub fn cursor_row_style() -> Style {
    Style::default().bg(Color::Rgb(40, 44, 52))
}

/// Null placeholder cells.
pub const PLACEHOLDER: Style = Style::new().fg(Color::DarkGray);

/// Cells that open something when clicked (PK/FK values).
pub fn clickable_id_style() -> Style {
    Style::default()
        .fg(Color::LightBlue)
        .add_modifier(Modifier::BOLD)
}

pub fn link_style() -> Style {
    Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::UNDERLINED)
}

pub const MINI_BAR_POSITIVE: Style = Style::new().fg(Color::Cyan);

pub const MINI_BAR_NEGATIVE: Style = Style::new().fg(Color::Red);

// === Text Styles ===

pub const TEXT_DIM: Style = Style::new().fg(Color::DarkGray);

pub const TEXT_WARNING: Style = Style::new().fg(Color::Yellow);

pub const TEXT_SUCCESS: Style = Style::new().fg(Color::Green);

/// Highlight colors named in settings, mapped to the terminal palette.
pub fn highlight_color(name: &str) -> Color {
    match name.to_ascii_lowercase().as_str() {
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" | "purple" => Color::Magenta,
        "cyan" => Color::Cyan,
        _ => Color::DarkGray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_style_focused() {
        assert_eq!(border_style(true).fg, Some(Color::Cyan));
        assert_eq!(border_style(false).fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_cursor_cell_style() {
        let style = cursor_cell_style();
        assert_eq!(style.bg, Some(Color::Cyan));
        assert_eq!(style.fg, Some(Color::Black));
    }

    #[test]
    fn test_highlight_color() {
        assert_eq!(highlight_color("RED"), Color::Red);
        assert_eq!(highlight_color("teal"), Color::DarkGray);
    }
}
