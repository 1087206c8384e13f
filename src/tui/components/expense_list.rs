//! # Expense List Component
//!
//! Newest-first list of recorded expenses with a total footer.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ExpenseListState` lives in `TuiState`
//! - `ExpenseList` is created each frame with borrowed state and records
//!
//! The total footer only appears once there is more than one expense;
//! with a single entry its own amount already is the total.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::expense::{Amount, ExpenseRecord};
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Events emitted by the expense list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// Delete the record at this index.
    Delete(usize),
}

/// Persistent selection state for the expense list.
pub struct ExpenseListState {
    pub list_state: ListState,
    /// Number of records (Prop, synced before events are handled)
    pub len: usize,
}

impl ExpenseListState {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            len: 0,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Keep the selection inside the list after it grew or shrank.
    pub fn clamp_selection(&mut self) {
        match (self.len, self.list_state.selected()) {
            (0, _) => self.list_state.select(None),
            (len, Some(i)) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    /// Select the first row if nothing is selected yet.
    pub fn ensure_selection(&mut self) {
        if self.len > 0 && self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }
    }
}

impl EventHandler for ExpenseListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        if self.len == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorUp => {
                let i = self.selected().map_or(0, |i| i.saturating_sub(1));
                self.list_state.select(Some(i));
                None
            }
            TuiEvent::CursorDown => {
                let i = self.selected().map_or(0, |i| (i + 1).min(self.len - 1));
                self.list_state.select(Some(i));
                None
            }
            TuiEvent::Delete | TuiEvent::Backspace | TuiEvent::InputChar('d') => {
                self.selected().map(ListEvent::Delete)
            }
            _ => None,
        }
    }
}

impl Default for ExpenseListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient render wrapper for the expense list.
pub struct ExpenseList<'a> {
    state: &'a mut ExpenseListState,
    records: &'a [ExpenseRecord],
    total: Amount,
    currency_label: &'a str,
    focused: bool,
}

impl<'a> ExpenseList<'a> {
    pub fn new(
        state: &'a mut ExpenseListState,
        records: &'a [ExpenseRecord],
        total: Amount,
        currency_label: &'a str,
        focused: bool,
    ) -> Self {
        Self {
            state,
            records,
            total,
            currency_label,
            focused,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let show_total = self.records.len() > 1;
        let footer_height = if show_total { 2 } else { 0 };
        let [list_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(footer_height)]).areas(area);

        let inner_width = list_area.width as usize;
        let items: Vec<ListItem> = self
            .records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let selected = self.focused && self.state.selected() == Some(i);
                let marker = if selected { "↳ " } else { "  " };
                let amount = format!("{} {}", record.amount, self.currency_label);
                let style = if selected {
                    Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default()
                };
                ListItem::new(spread_line(marker, &record.title, &amount, inner_width, style))
            })
            .collect();

        frame.render_stateful_widget(List::new(items), list_area, &mut self.state.list_state);

        if show_total {
            let [rule_area, total_area] =
                Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(footer_area);
            let rule = "╌".repeat(footer_area.width as usize);
            frame.render_widget(
                Paragraph::new(rule).style(Style::default().fg(Color::DarkGray)),
                rule_area,
            );
            let total = format!("{} {}", self.total, self.currency_label);
            let style = Style::default().add_modifier(Modifier::BOLD);
            frame.render_widget(
                Paragraph::new(spread_line("  ", "Total", &total, footer_area.width as usize, style)),
                total_area,
            );
        }
    }
}

/// `marker title ......... amount` padded to `width`. Long titles are cut with `...`.
fn spread_line(marker: &str, title: &str, amount: &str, width: usize, style: Style) -> Line<'static> {
    let fixed = marker.width() + amount.width() + 1;
    let title_width = width.saturating_sub(fixed);
    let title = truncate_str(title, title_width);
    let gap = width.saturating_sub(marker.width() + title.width() + amount.width());
    Line::from(vec![
        Span::styled(marker.to_string(), style),
        Span::styled(title, style),
        Span::styled(" ".repeat(gap), style),
        Span::styled(amount.to_string(), style),
    ])
}

/// Truncate a string to fit within `max_width` cells, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    for c in s.chars() {
        if out.width() + c.to_string().width() > max_width - 3 {
            break;
        }
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::expense::ExpenseId;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn record(id: u64, title: &str, minor: i64) -> ExpenseRecord {
        ExpenseRecord {
            id: ExpenseId(id),
            title: title.to_string(),
            amount: Amount::from_minor(minor),
        }
    }

    fn draw(records: &[ExpenseRecord], state: &mut ExpenseListState) -> String {
        let backend = TestBackend::new(40, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let total = records.iter().map(|r| r.amount).sum();
        terminal
            .draw(|f| ExpenseList::new(state, records, total, "INR", true).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_navigation_clamps() {
        let mut state = ExpenseListState::new();
        state.len = 3;
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected(), Some(0));
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected(), Some(2));
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn test_delete_emits_selected_index() {
        let mut state = ExpenseListState::new();
        state.len = 2;
        assert_eq!(state.handle_event(&TuiEvent::InputChar('d')), None);
        state.ensure_selection();
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.handle_event(&TuiEvent::Delete), Some(ListEvent::Delete(1)));
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut state = ExpenseListState::new();
        state.len = 3;
        state.list_state.select(Some(2));
        state.len = 2;
        state.clamp_selection();
        assert_eq!(state.selected(), Some(1));
        state.len = 0;
        state.clamp_selection();
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_total_shown_only_for_several_records() {
        let mut state = ExpenseListState::new();
        let one = [record(1, "Coffee", 350)];
        assert!(!draw(&one, &mut state).contains("Total"));

        let two = [record(2, "Book", 1200), record(1, "Coffee", 350)];
        let text = draw(&two, &mut state);
        assert!(text.contains("Book"));
        assert!(text.contains("12 INR"));
        assert!(text.contains("Total"));
        assert!(text.contains("15.5 INR"));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Coffee", 10), "Coffee");
        assert_eq!(truncate_str("Groceries for the week", 10), "Groceri...");
        assert_eq!(truncate_str("Groceries", 2), "..");
    }
}
