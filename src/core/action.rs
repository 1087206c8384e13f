//! # Actions
//!
//! Everything that can happen in Tally becomes an `Action`.
//! User types in the amount field? That's `Action::EditAmount(text)`.
//! User presses Enter? That's `Action::Submit`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the adapter what else needs doing (re-measuring the
//! amount field, quitting). Persistence is mirrored inside the ledger, so
//! the adapter never has to remember to save.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::expense::ExpenseId;
use crate::core::input::Field;
use crate::core::state::{App, WELCOME_MESSAGE};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// New contents of the title field.
    EditTitle(String),
    /// New raw contents of the amount field.
    EditAmount(String),
    Focus(Field),
    Blur,
    /// Add the drafted expense.
    Submit,
    Delete(ExpenseId),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The raw amount text changed; the amount field must be re-measured.
    AmountTextChanged,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::EditTitle(text) => {
            app.input.set_title(text);
            Effect::None
        }
        Action::EditAmount(text) => {
            if text == app.input.raw_amount() {
                return Effect::None;
            }
            if app.input.set_amount_text(text) {
                app.interpolator.retarget(app.input.committed());
            }
            Effect::AmountTextChanged
        }
        Action::Focus(field) => {
            app.input.focus(field);
            Effect::None
        }
        Action::Blur => {
            app.input.blur();
            Effect::None
        }
        Action::Submit => {
            let title = app.input.title().to_string();
            let raw_amount = app.input.raw_amount().to_string();
            let Some(id) = app.ledger.add_expense(&title, &raw_amount) else {
                return Effect::None;
            };
            if app.input.clear() {
                app.interpolator.retarget(app.input.committed());
            }
            app.status_message = match app.ledger.warning() {
                Some(warning) => warning.to_string(),
                None => {
                    let amount = app.ledger.ledger().get(id).map(|r| r.amount);
                    match amount {
                        Some(amount) => format!("Added {} {}", title.trim(), app.format_amount(amount)),
                        None => WELCOME_MESSAGE.to_string(),
                    }
                }
            };
            Effect::AmountTextChanged
        }
        Action::Delete(id) => {
            if let Some(removed) = app.ledger.delete_expense(id) {
                app.status_message = match app.ledger.warning() {
                    Some(warning) => warning.to_string(),
                    None => format!("Deleted {}", removed.title.trim()),
                };
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
