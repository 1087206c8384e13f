//! # TitleBar Component
//!
//! Top status bar: app name, then the latest status message.
//!
//! ## Conditional Formatting
//!
//! 1. **Warning** (persistence trouble): `"Tally | Not saved: ..."` in yellow
//! 2. **Status message**: `"Tally | Added Book 12 INR"`
//! 3. **Default**: `"Tally"`
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub struct TitleBar {
    /// Status message (e.g., "Added Book 12 INR")
    pub status_message: String,
    /// Render the status as a warning
    pub warning: bool,
}

impl TitleBar {
    pub fn new(status_message: String, warning: bool) -> Self {
        Self {
            status_message,
            warning,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            "Tally".to_string()
        } else {
            format!("Tally | {}", self.status_message)
        };

        let style = if self.warning {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        frame.render_widget(Span::styled(title_text, style), area);
    }
}
