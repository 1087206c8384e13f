//! # Core Application Logic
//!
//! This module contains Tally's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────────┐
//!                    │            CORE             │
//!                    │  (this module)              │
//!                    │                             │
//!                    │  • Ledger (records, total)  │
//!                    │  • Persistence bridge       │
//!                    │  • Amount input controller  │
//!                    │  • Display interpolator     │
//!                    │  • Adaptive width           │
//!                    │  • update() (reducer)       │
//!                    │                             │
//!                    │  No terminal. No sleeping.  │
//!                    └──────────────┬──────────────┘
//!                                   │
//!                  ┌────────────────┴────────────────┐
//!                  ▼                                 ▼
//!           ┌────────────┐                    ┌────────────┐
//!           │    TUI     │                    │  Storage   │
//!           │  Adapter   │                    │  backends  │
//!           │ (ratatui)  │                    │ (json/mem) │
//!           └────────────┘                    └────────────┘
//! ```
//!
//! Time only enters through arguments (`tick(now)`, `tick(dt)`), so the
//! animations are tested with made-up instants.
//!
//! ## Modules
//!
//! - [`expense`]: `ExpenseRecord`, `ExpenseId`, `Amount`
//! - [`ledger`]: the newest-first record list and its total
//! - [`storage`]: the `LedgerStorage` trait and its backends
//! - [`persistence`]: keeps storage in step with the ledger
//! - [`input`]: title/amount drafts and focus
//! - [`interpolator`]: animated amount readout
//! - [`width`]: content-sized amount field
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: settings and their override hierarchy

pub mod action;
pub mod config;
pub mod expense;
pub mod input;
pub mod interpolator;
pub mod ledger;
pub mod persistence;
pub mod state;
pub mod storage;
pub mod width;
