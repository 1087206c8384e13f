//! Tally: a terminal expense ledger.
//!
//! `core` holds the ledger and its animations; `tui` draws them.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
