//! # Ledger Storage
//!
//! The storage collaborator behind the persistence bridge. Backends only
//! know whole snapshots: `load()` returns everything, `save()` replaces
//! everything.
//!
//! `JsonFileStorage` writes a JSON array to `~/.tally/expenses.json` by
//! default. Writes use atomic rename (write `.tmp`, then `rename()`).

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::core::expense::ExpenseRecord;

#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Parse(serde_json::Error),
    Unavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "storage I/O error: {e}"),
            StorageError::Parse(e) => write!(f, "storage parse error: {e}"),
            StorageError::Unavailable(reason) => write!(f, "storage unavailable: {reason}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Parse(e) => Some(e),
            StorageError::Unavailable(_) => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Parse(e)
    }
}

/// Whole-snapshot persistence for the ledger.
pub trait LedgerStorage {
    /// Short name for logs and the status bar.
    fn name(&self) -> &str;

    /// The saved snapshot in ledger order, or empty if nothing was saved yet.
    fn load(&self) -> Result<Vec<ExpenseRecord>, StorageError>;

    /// Persist `records` as the complete state, replacing what was there.
    fn save(&mut self, records: &[ExpenseRecord]) -> Result<(), StorageError>;
}

/// Returns `~/.tally/expenses.json`, or `None` without a home directory.
pub fn default_data_file() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tally").join("expenses.json"))
}

/// JSON array on disk.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStorage for JsonFileStorage {
    fn name(&self) -> &str {
        "json"
    }

    fn load(&self) -> Result<Vec<ExpenseRecord>, StorageError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No ledger file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        if json.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&json)?)
    }

    fn save(&mut self, records: &[ExpenseRecord]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        atomic_write_json(&self.path, &records)?;
        debug!("Saved {} expenses to {}", records.len(), self.path.display());
        Ok(())
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> Result<(), StorageError> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Keeps the snapshot in memory. Used for `--ephemeral` runs and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    snapshot: Vec<ExpenseRecord>,
    saves: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: Vec<ExpenseRecord>) -> Self {
        Self { snapshot, saves: 0 }
    }

    pub fn snapshot(&self) -> &[ExpenseRecord] {
        &self.snapshot
    }

    /// Number of `save()` calls so far.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl LedgerStorage for MemoryStorage {
    fn name(&self) -> &str {
        "memory"
    }

    fn load(&self) -> Result<Vec<ExpenseRecord>, StorageError> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, records: &[ExpenseRecord]) -> Result<(), StorageError> {
        self.snapshot = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}
