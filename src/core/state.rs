//! # Application State
//!
//! Core business state for Tally. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── ledger: PersistentLedger         // records + storage mirror
//! ├── input: AmountInput               // title/amount drafts, focus
//! ├── interpolator: DisplayInterpolator // animated amount readout
//! ├── currency_label: String           // suffix shown after amounts
//! └── status_message: String           // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::config::ResolvedConfig;
use crate::core::input::AmountInput;
use crate::core::interpolator::DisplayInterpolator;
use crate::core::persistence::PersistentLedger;
use crate::core::storage::LedgerStorage;

pub const WELCOME_MESSAGE: &str = "Welcome to Tally!";

pub struct App {
    pub ledger: PersistentLedger,
    pub input: AmountInput,
    pub interpolator: DisplayInterpolator,
    pub currency_label: String,
    pub status_message: String,
}

impl App {
    /// Opens the ledger from `storage`. A load failure shows up as the initial status.
    pub fn new(storage: Box<dyn LedgerStorage>, config: &ResolvedConfig) -> Self {
        let ledger = PersistentLedger::open(storage);
        let status_message = ledger
            .warning()
            .map(str::to_string)
            .unwrap_or_else(|| WELCOME_MESSAGE.to_string());
        Self {
            ledger,
            input: AmountInput::new(),
            interpolator: DisplayInterpolator::new(config.animation),
            currency_label: config.currency_label.clone(),
            status_message,
        }
    }

    /// Format an amount with the currency label, e.g. `"15.5 INR"`.
    pub fn format_amount(&self, amount: impl std::fmt::Display) -> String {
        format!("{} {}", amount, self.currency_label)
    }
}
