//! Persistence port and its implementations

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use common::models::DiagnosisRecord;
use common::{Error, Result};
use tracing::debug;

/// Key under which the serialized ledger is stored
pub const STORAGE_KEY: &str = "plant-md-diagnoses";

/// Capability for loading and saving the full ledger.
///
/// `save` is an unconditional full rewrite of the stored value; the
/// ledger is local and small, so no incremental append is needed.
pub trait DiagnosisStore: Send + Sync {
    /// Read the persisted ledger. `None` when nothing has been stored yet.
    fn load(&self) -> impl Future<Output = Result<Option<Vec<DiagnosisRecord>>>> + Send;

    /// Overwrite the stored value with the full record sequence.
    fn save(&self, records: &[DiagnosisRecord]) -> impl Future<Output = Result<()>> + Send;
}

/// File-backed store: one JSON document per storage key under a data
/// directory, the server-side analog of browser local storage.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DiagnosisStore for FileStore {
    async fn load(&self) -> Result<Option<Vec<DiagnosisRecord>>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::Storage(e.to_string())),
        };

        let records: Vec<DiagnosisRecord> = serde_json::from_slice(&bytes)
            .map_err(|e| Error::Storage(format!("corrupt ledger document: {e}")))?;

        debug!("loaded {} diagnosis records from {:?}", records.len(), self.path);
        Ok(Some(records))
    }

    async fn save(&self, records: &[DiagnosisRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::Storage(e.to_string()))?;
        }

        let bytes =
            serde_json::to_vec(records).map_err(|e| Error::Storage(e.to_string()))?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| Error::Storage(e.to_string()))?;

        debug!("persisted {} diagnosis records to {:?}", records.len(), self.path);
        Ok(())
    }
}

/// In-memory store used in tests
#[derive(Default, Clone)]
pub struct MemoryStore {
    records: Arc<Mutex<Option<Vec<DiagnosisRecord>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-populated store
    pub fn with_records(records: Vec<DiagnosisRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(Some(records))),
        }
    }

    /// The currently stored value, as a load would see it
    pub fn stored(&self) -> Option<Vec<DiagnosisRecord>> {
        self.records.lock().unwrap().clone()
    }
}

impl DiagnosisStore for MemoryStore {
    async fn load(&self) -> Result<Option<Vec<DiagnosisRecord>>> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn save(&self, records: &[DiagnosisRecord]) -> Result<()> {
        *self.records.lock().unwrap() = Some(records.to_vec());
        Ok(())
    }
}
