//! # TextField Component
//!
//! Single-line editor shared by the title and amount fields.
//!
//! ## Responsibilities
//!
//! - Append typed or pasted characters the field accepts
//! - Remove the last character on Backspace
//! - Emit `Submit` on Enter
//! - Render the title field (the amount field has its own renderer)
//!
//! ## State Management
//!
//! The text itself lives in `core::input::AmountInput`. The parent copies it
//! into `text` before dispatching events, and forwards `FieldEvent::Changed`
//! back to the core as an `Action`. The field never owns the truth.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::input::Field;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by a TextField
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEvent {
    /// The text changed; carries the new full text.
    Changed(String),
    /// Enter pressed
    Submit,
}

/// Characters a numeric field lets through.
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

pub struct TextField {
    pub field: Field,
    /// Current text (Prop, synced from core)
    pub text: String,
    /// Shown dimmed when `text` is empty and unfocused (Prop)
    pub placeholder: Option<&'static str>,
    pub focused: bool,
}

impl TextField {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            text: String::new(),
            placeholder: None,
            focused: false,
        }
    }

    fn accepts(&self, c: char) -> bool {
        match self.field {
            Field::Title => !c.is_control(),
            Field::Amount => is_number_char(c),
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) if self.accepts(*c) => {
                self.text.push(*c);
                Some(FieldEvent::Changed(self.text.clone()))
            }
            TuiEvent::Paste(pasted) => {
                let accepted: String = pasted.chars().filter(|c| self.accepts(*c)).collect();
                if accepted.is_empty() {
                    return None;
                }
                self.text.push_str(&accepted);
                Some(FieldEvent::Changed(self.text.clone()))
            }
            TuiEvent::Backspace => self
                .text
                .pop()
                .map(|_| FieldEvent::Changed(self.text.clone())),
            TuiEvent::Submit => Some(FieldEvent::Submit),
            _ => None,
        }
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = match (self.text.is_empty(), self.placeholder) {
            (true, Some(placeholder)) => {
                Paragraph::new(placeholder).style(Style::default().fg(Color::DarkGray))
            }
            _ => Paragraph::new(self.text.as_str())
                .style(Style::default().add_modifier(Modifier::BOLD)),
        };
        frame.render_widget(paragraph.alignment(Alignment::Center), area);

        if self.focused {
            // Centered text: the cursor sits just past its right edge.
            let text_width = u16::try_from(self.text.width()).unwrap_or(u16::MAX);
            let left = area.x + area.width.saturating_sub(text_width) / 2;
            let x = (left + text_width).min(area.right().saturating_sub(1));
            frame.set_cursor_position((x, area.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut field = TextField::new(Field::Title);

        let res = field.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(FieldEvent::Changed("a".to_string())));

        let res = field.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(res, Some(FieldEvent::Changed("ab".to_string())));

        let res = field.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(FieldEvent::Changed("a".to_string())));
    }

    #[test]
    fn test_backspace_on_empty_is_ignored() {
        let mut field = TextField::new(Field::Title);
        assert_eq!(field.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_amount_field_filters_characters() {
        let mut field = TextField::new(Field::Amount);
        assert_eq!(field.handle_event(&TuiEvent::InputChar('x')), None);
        assert_eq!(
            field.handle_event(&TuiEvent::Paste("1,250.5 INR".to_string())),
            Some(FieldEvent::Changed("1250.5".to_string()))
        );
        assert_eq!(
            field.handle_event(&TuiEvent::InputChar('e')),
            Some(FieldEvent::Changed("1250.5e".to_string()))
        );
    }

    #[test]
    fn test_submit() {
        let mut field = TextField::new(Field::Amount);
        assert_eq!(field.handle_event(&TuiEvent::Submit), Some(FieldEvent::Submit));
    }

    #[test]
    fn test_render_shows_placeholder() {
        let backend = TestBackend::new(30, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut field = TextField::new(Field::Title);
        field.placeholder = Some("Expense Title");

        terminal.draw(|f| field.render(f, f.area())).unwrap();
        assert!(screen_text(&terminal).contains("Expense Title"));
    }

    #[test]
    fn test_render_shows_text() {
        let backend = TestBackend::new(30, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut field = TextField::new(Field::Title);
        field.text = "Coffee".to_string();
        field.focused = true;

        terminal.draw(|f| field.render(f, f.area())).unwrap();
        assert!(screen_text(&terminal).contains("Coffee"));
    }
}
