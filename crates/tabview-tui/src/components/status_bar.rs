//! Status bar component.
//!
//! Displays keybindings and status messages at the bottom of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use super::styles::{TEXT_SUCCESS, TEXT_WARNING};

/// Key binding display item.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyBinding {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Status bar showing keybindings and messages.
pub struct StatusBar {
    message: String,
    warning: bool,
    bindings: Vec<KeyBinding>,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            message: String::new(),
            warning: false,
            bindings: vec![
                KeyBinding::new("↑↓←→", "Move"),
                KeyBinding::new("s", "Sort"),
                KeyBinding::new("n/p", "Page"),
                KeyBinding::new("Enter", "Click"),
                KeyBinding::new("q", "Quit"),
            ],
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.warning = false;
    }

    pub fn set_warning(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.warning = true;
    }

    #[cfg(test)]
    pub fn is_warning(&self) -> bool {
        self.warning
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Component for StatusBar {
    fn draw(&mut self, frame: &mut Frame, area: Rect, _focused: bool) {
        let mut spans: Vec<Span> = Vec::new();

        for (i, binding) in self.bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                format!(" {} ", binding.key),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(binding.action));
        }

        if !self.message.is_empty() {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            let style = if self.warning { TEXT_WARNING } else { TEXT_SUCCESS };
            spans.push(Span::styled(self.message.clone(), style));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        frame.render_widget(paragraph, area);
    }
}
