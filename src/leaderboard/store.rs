//! Where player records live

use super::record::PlayerRecord;
use crate::core::PlayerId;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("No record for player {0}")]
    RecordNotFound(PlayerId),

    #[error("Record store I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Record store is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read-all / write-one access to player records, keyed by id
pub trait RecordStore {
    /// Every record, in storage order
    ///
    /// # Errors
    /// Fails if the backing storage cannot be read.
    fn all(&self) -> Result<Vec<PlayerRecord>, StoreError>;

    /// One player's record
    ///
    /// # Errors
    /// Returns `StoreError::RecordNotFound` for an unknown player.
    fn get(&self, id: &PlayerId) -> Result<PlayerRecord, StoreError> {
        self.all()?
            .into_iter()
            .find(|r| &r.id == id)
            .ok_or_else(|| StoreError::RecordNotFound(id.clone()))
    }

    /// Insert a record, replacing any with the same id in place
    ///
    /// # Errors
    /// Fails if the backing storage cannot be written.
    fn put(&mut self, record: PlayerRecord) -> Result<(), StoreError>;
}

fn upsert(records: &mut Vec<PlayerRecord>, record: PlayerRecord) {
    match records.iter_mut().find(|r| r.id == record.id) {
        Some(existing) => *existing = record,
        None => records.push(record),
    }
}

/// Records held in memory for the life of the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<PlayerRecord>,
}

impl MemoryStore {
    #[must_use]
    pub const fn new(records: Vec<PlayerRecord>) -> Self {
        Self { records }
    }
}

impl RecordStore for MemoryStore {
    fn all(&self) -> Result<Vec<PlayerRecord>, StoreError> {
        Ok(self.records.clone())
    }

    fn put(&mut self, record: PlayerRecord) -> Result<(), StoreError> {
        upsert(&mut self.records, record);
        Ok(())
    }
}

/// Records kept in one pretty-printed JSON file
///
/// A missing file reads as no records. Every write rewrites the whole file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn all(&self) -> Result<Vec<PlayerRecord>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn put(&mut self, record: PlayerRecord) -> Result<(), StoreError> {
        let mut records = self.all()?;
        upsert(&mut records, record);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&records)?)?;
        debug!(path = %self.path.display(), records = records.len(), "record store written");
        Ok(())
    }
}
