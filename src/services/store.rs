//! Signal persistence.

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::error::StoreError;
use crate::models::{SignalRecord, StoredSignal};

/// Append-only sink for classification records.
#[async_trait]
pub trait SignalStore: Send + Sync {
    async fn append(&self, record: &SignalRecord) -> Result<(), StoreError>;
}

/// One JSON object per line, appended to a local file.
pub struct JsonlSignalStore {
    path: PathBuf,
}

impl JsonlSignalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SignalStore for JsonlSignalStore {
    async fn append(&self, record: &SignalRecord) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(&record.to_stored())?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| StoreError::Append(format!("open {}: {e}", self.path.display())))?;
        file.write_all(line.as_bytes())
            .await
            .map_err(|e| StoreError::Append(format!("write {}: {e}", self.path.display())))?;
        Ok(())
    }
}

/// In-memory store for tests and the demo binary.
#[derive(Default)]
pub struct MemorySignalStore {
    records: Mutex<Vec<StoredSignal>>,
}

impl MemorySignalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<StoredSignal> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl SignalStore for MemorySignalStore {
    async fn append(&self, record: &SignalRecord) -> Result<(), StoreError> {
        self.records.lock().unwrap().push(record.to_stored());
        Ok(())
    }
}
