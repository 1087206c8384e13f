//! # Amount Input Controller
//!
//! Owns what the user is typing: the title, the raw amount text, and the
//! amount that text currently stands for.
//!
//! ```text
//! raw_amount ("12.", "1e", "-", ...)  ──parse──►  committed (Amount)
//! ```
//!
//! The raw text is never rewritten by parsing. An unparseable draft simply
//! commits to zero until the user finishes typing.

use crate::core::expense::Amount;

/// Which text field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Amount,
}

pub const TITLE_PLACEHOLDER: &str = "Expense Title";
pub const AMOUNT_PLACEHOLDER: &str = "0";

#[derive(Debug, Default)]
pub struct AmountInput {
    title: String,
    raw_amount: String,
    committed: Amount,
    title_focused: bool,
    amount_focused: bool,
}

impl AmountInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn raw_amount(&self) -> &str {
        &self.raw_amount
    }

    pub fn committed(&self) -> Amount {
        self.committed
    }

    pub fn set_title(&mut self, text: impl Into<String>) {
        self.title = text.into();
    }

    /// Store `text` verbatim and re-derive the committed amount.
    /// Returns `true` if the committed amount changed.
    pub fn set_amount_text(&mut self, text: impl Into<String>) -> bool {
        self.raw_amount = text.into();
        let committed = Amount::parse(&self.raw_amount).unwrap_or(Amount::ZERO);
        let changed = committed != self.committed;
        self.committed = committed;
        changed
    }

    pub fn focus(&mut self, field: Field) {
        self.title_focused = field == Field::Title;
        self.amount_focused = field == Field::Amount;
    }

    pub fn blur(&mut self) {
        self.title_focused = false;
        self.amount_focused = false;
    }

    pub fn focused(&self) -> Option<Field> {
        if self.title_focused {
            Some(Field::Title)
        } else if self.amount_focused {
            Some(Field::Amount)
        } else {
            None
        }
    }

    pub fn is_focused(&self, field: Field) -> bool {
        self.focused() == Some(field)
    }

    /// Both fields hold something other than whitespace.
    pub fn can_submit(&self) -> bool {
        !self.title.trim().is_empty() && !self.raw_amount.trim().is_empty()
    }

    /// Text for the amount field: the draft while editing, the animated value otherwise.
    pub fn amount_display(&self, displayed: i64) -> String {
        if self.amount_focused {
            self.raw_amount.clone()
        } else {
            displayed.to_string()
        }
    }

    /// Placeholder for `field`, shown only while it is empty and unfocused.
    pub fn placeholder(&self, field: Field) -> Option<&'static str> {
        let (empty, text) = match field {
            Field::Title => (self.title.is_empty(), TITLE_PLACEHOLDER),
            Field::Amount => (self.raw_amount.is_empty(), AMOUNT_PLACEHOLDER),
        };
        (empty && !self.is_focused(field)).then_some(text)
    }

    /// Reset both drafts after a successful add. Returns `true` if the
    /// committed amount changed.
    pub fn clear(&mut self) -> bool {
        self.title.clear();
        self.set_amount_text(String::new())
    }
}
