//! # Ledger Store
//!
//! The ordered, newest-first list of expense records. This is the single
//! source of truth for the session; whatever is on disk is a mirror of it.
//!
//! Mutations are plain synchronous methods. Invalid adds and deletes of
//! unknown ids are no-ops, reported through `Option` rather than errors.

use chrono::Utc;
use log::{debug, warn};
use std::collections::HashSet;

use crate::core::expense::{Amount, ExpenseId, ExpenseRecord};

/// Hands out strictly increasing ids.
///
/// Ids are epoch milliseconds when the clock allows it, otherwise
/// `last + 1`, so two adds within the same millisecond never collide.
/// Once `u64::MAX` has been handed out the generator is exhausted.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn next(&mut self) -> Option<ExpenseId> {
        let now_ms = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_at(now_ms)
    }

    pub fn next_at(&mut self, now_ms: u64) -> Option<ExpenseId> {
        let id = now_ms.max(self.last.checked_add(1)?);
        self.last = id;
        Some(ExpenseId(id))
    }

    /// Make sure future ids are greater than `id`.
    pub fn observe(&mut self, id: ExpenseId) {
        self.last = self.last.max(id.0);
    }
}

#[derive(Debug, Default)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
    ids: IdGenerator,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record from raw user text and prepend it.
    ///
    /// Returns `None` (and changes nothing) when the title or amount is blank,
    /// the amount does not parse to a finite number, or no fresh id is left.
    pub fn add_expense(&mut self, title: &str, amount_text: &str) -> Option<ExpenseId> {
        if title.trim().is_empty() {
            return None;
        }
        let amount = Amount::parse(amount_text)?;
        let Some(id) = self.ids.next() else {
            warn!("Expense ids exhausted, not adding {:?}", title);
            return None;
        };
        self.records.insert(
            0,
            ExpenseRecord {
                id,
                title: title.to_string(),
                amount,
            },
        );
        debug!("Added expense {} ({} records)", id, self.records.len());
        Some(id)
    }

    /// Remove the record with `id`. Unknown ids are a no-op.
    pub fn delete_expense(&mut self, id: ExpenseId) -> Option<ExpenseRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        let removed = self.records.remove(index);
        debug!("Deleted expense {} ({} records)", id, self.records.len());
        Some(removed)
    }

    pub fn compute_total(&self) -> Amount {
        self.records.iter().map(|r| r.amount).sum()
    }

    /// Replace the whole ledger with a loaded snapshot.
    ///
    /// Order is kept. Records repeating an id already seen are dropped so ids
    /// stay pairwise distinct; the id generator is moved past every loaded id.
    pub fn replace_all(&mut self, records: Vec<ExpenseRecord>) {
        let mut seen = HashSet::with_capacity(records.len());
        let mut kept = Vec::with_capacity(records.len());
        for record in records {
            if !seen.insert(record.id) {
                warn!("Dropping loaded expense with duplicate id {}", record.id);
                continue;
            }
            self.ids.observe(record.id);
            kept.push(record);
        }
        self.records = kept;
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn get(&self, id: ExpenseId) -> Option<&ExpenseRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
