//! # AmountField Component
//!
//! The big amount readout with its currency label and add hint.
//!
//! ```text
//!  ┌ width ┐
//!   █▀█ █▀█  INR  ⏎ add
//!   █▀▀   █
//!   ▀▀▀   ▀
//! ```
//!
//! `width` comes from `AdaptiveWidth` and may briefly lag the text while
//! the resize animates; the digits are centered within it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::width::TextMeasure;
use crate::tui::component::Component;
use crate::tui::components::big_digits::{BigDigitMeasure, GLYPH_HEIGHT, big_text};

const ADD_HINT: &str = "⏎ add";

pub struct AmountField {
    /// What to draw: the draft while focused, the animated value otherwise.
    pub text: String,
    /// Draw dimmed, as a placeholder.
    pub dimmed: bool,
    pub width: u16,
    pub focused: bool,
    pub currency_label: String,
    /// Both drafts are filled in; show the add hint.
    pub can_submit: bool,
}

/// A display width as a cell count, saturating at `u16::MAX`.
fn cells(width: usize) -> u16 {
    u16::try_from(width).unwrap_or(u16::MAX)
}

impl AmountField {
    pub fn height() -> u16 {
        GLYPH_HEIGHT
    }
}

impl Component for AmountField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let label_width = cells(self.currency_label.width()).saturating_add(1);
        let hint_width = if self.can_submit {
            cells(ADD_HINT.width()).saturating_add(2)
        } else {
            0
        };

        let [digits_area, label_area, hint_area] = Layout::horizontal([
            Constraint::Length(self.width),
            Constraint::Length(label_width),
            Constraint::Length(hint_width),
        ])
        .flex(Flex::Center)
        .areas(area);

        let style = if self.dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let digits = Paragraph::new(big_text(&self.text))
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(digits, digits_area);

        let middle = |r: Rect| Rect {
            y: r.y + r.height.min(GLYPH_HEIGHT) / 2,
            height: 1.min(r.height),
            ..r
        };

        frame.render_widget(
            Span::styled(
                format!(" {}", self.currency_label),
                Style::default().fg(Color::Gray),
            ),
            middle(label_area),
        );

        if self.can_submit {
            frame.render_widget(
                Span::styled(
                    format!("  {ADD_HINT}"),
                    Style::default().fg(Color::Black).bg(Color::White),
                ),
                middle(hint_area),
            );
        }

        if self.focused {
            let text_width = BigDigitMeasure.measure(&self.text);
            let left = digits_area.x + digits_area.width.saturating_sub(text_width) / 2;
            let x = (left + text_width).min(digits_area.right().saturating_sub(1));
            let row = middle(digits_area);
            frame.set_cursor_position((x, row.y));
        }
    }
}
