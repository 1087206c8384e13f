use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::core::input::Field;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{AmountField, ExpenseList, TitleBar};
use crate::tui::{Focus, TuiState};

/// Widest the centered column gets.
const COLUMN_WIDTH: u16 = 60;

const HELP_TEXT: &str = "Tab focus · Enter add · ↑↓ select · d delete · Esc quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, body_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    let mut title_bar = TitleBar::new(
        app.status_message.clone(),
        app.ledger.warning().is_some(),
    );
    title_bar.render(frame, title_area);

    let [column] = Layout::horizontal([Constraint::Max(COLUMN_WIDTH)])
        .flex(Flex::Center)
        .areas(body_area);
    let [_, field_area, _, amount_area, _, list_area] = Layout::vertical([
        Length(1),
        Length(1),
        Length(1),
        Length(AmountField::height()),
        Length(1),
        Min(0),
    ])
    .areas(column);

    tui.title_field.render(frame, field_area);

    let displayed = app.interpolator.displayed();
    let mut amount_field = AmountField {
        text: app.input.amount_display(displayed),
        dimmed: app.input.placeholder(Field::Amount).is_some() && displayed == 0,
        width: tui.amount_width.width(),
        focused: tui.focus == Focus::Amount,
        currency_label: app.currency_label.clone(),
        can_submit: app.input.can_submit(),
    };
    amount_field.render(frame, amount_area);

    draw_expenses(frame, list_area, app, tui);

    frame.render_widget(
        Paragraph::new(HELP_TEXT)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

fn draw_expenses(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let records = app.ledger.records();
    if records.is_empty() {
        frame.render_widget(
            Paragraph::new("No expenses yet.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    }

    ExpenseList::new(
        &mut tui.list,
        records,
        app.ledger.compute_total(),
        &app.currency_label,
        tui.focus == Focus::List,
    )
    .render(frame, area);
}
