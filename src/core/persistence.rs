//! # Persistence Bridge
//!
//! Wraps the `Ledger` and keeps a storage backend in sync with it.
//!
//! ```text
//!  open()          add_expense / delete_expense
//!    │                        │
//!    ▼                        ▼
//! storage.load()  ──►  Ledger  ──►  storage.save(all records)
//! ```
//!
//! Persistence is best-effort. A failed save leaves the mutation in place. A
//! failed load starts an empty ledger that is never written back, so the
//! unreadable snapshot survives the session for the user to repair. Either
//! way the failure is logged and kept as a warning the UI may show; nothing
//! here returns an error.

use log::{debug, info, warn};

use crate::core::expense::{Amount, ExpenseId, ExpenseRecord};
use crate::core::ledger::Ledger;
use crate::core::storage::LedgerStorage;

pub struct PersistentLedger {
    ledger: Ledger,
    storage: Box<dyn LedgerStorage>,
    /// False after a failed load: saving would clobber the snapshot.
    mirroring: bool,
    warning: Option<String>,
}

impl PersistentLedger {
    /// Load the saved snapshot (if any) into a fresh ledger.
    pub fn open(storage: Box<dyn LedgerStorage>) -> Self {
        let mut ledger = Ledger::new();
        let mut warning = None;
        let mut mirroring = true;

        match storage.load() {
            Ok(records) if records.is_empty() => {
                info!("No saved expenses in {} storage", storage.name());
            }
            Ok(records) => {
                info!("Loaded {} expenses from {} storage", records.len(), storage.name());
                ledger.replace_all(records);
            }
            Err(e) => {
                warn!("Failed to load expenses, continuing in memory: {}", e);
                warning = Some(format!("Could not load saved expenses: {e} (changes stay in memory)"));
                mirroring = false;
            }
        }

        Self {
            ledger,
            storage,
            mirroring,
            warning,
        }
    }

    pub fn add_expense(&mut self, title: &str, amount_text: &str) -> Option<ExpenseId> {
        let id = self.ledger.add_expense(title, amount_text)?;
        self.mirror();
        Some(id)
    }

    pub fn delete_expense(&mut self, id: ExpenseId) -> Option<ExpenseRecord> {
        let removed = self.ledger.delete_expense(id)?;
        self.mirror();
        Some(removed)
    }

    pub fn compute_total(&self) -> Amount {
        self.ledger.compute_total()
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        self.ledger.records()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Latest persistence problem, if any. Cleared by the next good save.
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// Write the whole ledger to storage, overwriting the previous snapshot.
    fn mirror(&mut self) {
        if !self.mirroring {
            debug!("Skipping save to {} storage after failed load", self.storage.name());
            return;
        }
        match self.storage.save(self.ledger.records()) {
            Ok(()) => self.warning = None,
            Err(e) => {
                warn!("Failed to save expenses: {}", e);
                self.warning = Some(format!("Not saved: {e}"));
            }
        }
    }
}
