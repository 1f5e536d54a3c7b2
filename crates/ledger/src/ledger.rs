//! Ledger lifecycle: seeding, appending, persistence

use common::models::{DiagnosisRecord, HEALTHY};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::store::DiagnosisStore;

/// Image shown for the sample record on first run
pub const SEED_IMAGE_URL: &str = "https://picsum.photos/seed/plant1/800/600";

const SEED_REMEDY_TIPS: &str = "Your plant appears to be healthy! Keep up the great work.\n\n- **Sunlight**: Ensure it receives 4-6 hours of indirect sunlight daily.\n- **Watering**: Water when the top inch of soil is dry. Avoid overwatering.\n- **Nutrients**: Feed with a balanced liquid fertilizer every 4-6 weeks during the growing season.\n- **Monitoring**: Regularly check leaves for any signs of pests or discoloration.";

/// The single sample record a fresh ledger starts with, dated 24 hours
/// before `now_ms` so the history sidebar is never empty on first run.
pub fn seed_ledger(now_ms: i64) -> Vec<DiagnosisRecord> {
    vec![DiagnosisRecord {
        id: "sample-1".to_string(),
        image: SEED_IMAGE_URL.to_string(),
        disease: HEALTHY.to_string(),
        confidence: 0.98,
        remedy_tips: SEED_REMEDY_TIPS.to_string(),
        timestamp: now_ms - 24 * 60 * 60 * 1000,
    }]
}

/// Returns a new sequence with `record` at index 0 and all existing
/// records shifted. The input sequence is left untouched.
pub fn append(records: &[DiagnosisRecord], record: DiagnosisRecord) -> Vec<DiagnosisRecord> {
    let mut next = Vec::with_capacity(records.len() + 1);
    next.push(record);
    next.extend_from_slice(records);
    next
}

/// The diagnosis ledger: a newest-first record sequence held in memory
/// and mirrored to a [`DiagnosisStore`] after every change.
///
/// The sequence is only ever replaced wholesale, never mutated in
/// place, so readers always observe a consistent snapshot.
pub struct Ledger<S> {
    store: S,
    records: RwLock<Vec<DiagnosisRecord>>,
}

impl<S: DiagnosisStore> Ledger<S> {
    /// Load the persisted ledger, falling back to the seed on missing,
    /// empty, or corrupt state. Load failures are logged, never raised.
    ///
    /// The loaded sequence is written back once to normalize the stored
    /// format; that write is best-effort.
    pub async fn open(store: S, now_ms: i64) -> Self {
        let records = match store.load().await {
            Ok(Some(records)) if !records.is_empty() => records,
            Ok(_) => {
                info!("no stored diagnoses, seeding ledger");
                seed_ledger(now_ms)
            }
            Err(e) => {
                warn!("failed to load diagnosis ledger, seeding: {e}");
                seed_ledger(now_ms)
            }
        };

        if let Err(e) = store.save(&records).await {
            warn!("failed to persist diagnosis ledger: {e}");
        }

        Self {
            store,
            records: RwLock::new(records),
        }
    }

    /// A cloned, newest-first snapshot of the current ledger
    pub async fn snapshot(&self) -> Vec<DiagnosisRecord> {
        self.records.read().await.clone()
    }

    /// Prepend `record`, replace the in-memory sequence, and persist.
    ///
    /// A persistence failure must not fail the diagnosis flow; it is
    /// logged and the in-memory ledger keeps the new record.
    pub async fn append(&self, record: DiagnosisRecord) -> Vec<DiagnosisRecord> {
        let next = {
            let mut guard = self.records.write().await;
            let next = append(&guard, record);
            *guard = next.clone();
            next
        };

        if let Err(e) = self.store.save(&next).await {
            warn!("failed to persist diagnosis ledger: {e}");
        }

        next
    }
}
