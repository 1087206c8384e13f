//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: top status line
//! - `AmountField`: big-digit amount readout with currency label
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that handle events and emit high-level events:
//! - `TextField`: single-line editor for the title and amount drafts
//! - `ExpenseList`: selectable record list with a total footer
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into `App`.
//! The drafts themselves live in the core; the TUI copies them in each frame
//! and turns edits back into `Action`s.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── text_field.rs    (Title/amount editor)
//! ├── amount_field.rs  (Big amount readout)
//! ├── big_digits.rs    (Block font + its TextMeasure)
//! └── expense_list.rs  (Records and total)
//! ```

pub mod amount_field;
pub mod big_digits;
pub mod expense_list;
pub mod text_field;
mod title_bar;

pub use amount_field::AmountField;
pub use big_digits::BigDigitMeasure;
pub use expense_list::{ExpenseList, ExpenseListState, ListEvent};
pub use text_field::{FieldEvent, TextField};
pub use title_bar::TitleBar;
