//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::config::{ResolvedConfig, resolve};
use crate::core::expense::ExpenseRecord;
use crate::core::state::App;
use crate::core::storage::{LedgerStorage, MemoryStorage, StorageError};

/// A backend that is never reachable.
pub struct FailingStorage;

impl LedgerStorage for FailingStorage {
    fn name(&self) -> &str {
        "failing"
    }

    fn load(&self) -> Result<Vec<ExpenseRecord>, StorageError> {
        Err(StorageError::Unavailable("disk unplugged".to_string()))
    }

    fn save(&mut self, _records: &[ExpenseRecord]) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("disk unplugged".to_string()))
    }
}

/// Loads as empty, refuses every save.
pub struct ReadOnlyStorage;

impl LedgerStorage for ReadOnlyStorage {
    fn name(&self) -> &str {
        "read-only"
    }

    fn load(&self) -> Result<Vec<ExpenseRecord>, StorageError> {
        Ok(Vec::new())
    }

    fn save(&mut self, _records: &[ExpenseRecord]) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read-only volume".to_string()))
    }
}

/// A `MemoryStorage` the test keeps a handle to after boxing it.
#[derive(Clone, Default)]
pub struct SharedStorage(Rc<RefCell<MemoryStorage>>);

impl SharedStorage {
    pub fn snapshot(&self) -> Vec<ExpenseRecord> {
        self.0.borrow().snapshot().to_vec()
    }

    pub fn saves(&self) -> usize {
        self.0.borrow().saves()
    }
}

impl LedgerStorage for SharedStorage {
    fn name(&self) -> &str {
        "shared"
    }

    fn load(&self) -> Result<Vec<ExpenseRecord>, StorageError> {
        self.0.borrow().load()
    }

    fn save(&mut self, records: &[ExpenseRecord]) -> Result<(), StorageError> {
        self.0.borrow_mut().save(records)
    }
}

/// Defaults only: no config file, no env, no CLI.
pub fn test_config() -> ResolvedConfig {
    resolve(&Default::default(), &Default::default())
}

/// Creates a test App backed by an empty in-memory store.
pub fn test_app() -> App {
    App::new(Box::new(MemoryStorage::new()), &test_config())
}
