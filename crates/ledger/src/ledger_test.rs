#[cfg(test)]
mod tests {
    use crate::ledger::{append, seed_ledger, Ledger};
    use crate::store::MemoryStore;
    use common::models::DiagnosisRecord;

    fn make_record(id: &str, disease: &str, confidence: f64, timestamp: i64) -> DiagnosisRecord {
        DiagnosisRecord {
            id: id.to_string(),
            image: format!("https://example.com/{id}.jpg"),
            disease: disease.to_string(),
            confidence,
            remedy_tips: "Water less.".to_string(),
            timestamp,
        }
    }

    #[test]
    fn test_append_prepends_and_keeps_tail() {
        let existing = vec![
            make_record("a", "Rust", 0.8, 2_000),
            make_record("b", "Black Spot", 0.9, 1_000),
        ];
        let new = make_record("c", "Early Blight", 0.85, 3_000);

        let next = append(&existing, new.clone());

        assert_eq!(next.len(), 3);
        assert_eq!(next[0], new);
        assert_eq!(&next[1..], &existing[..]);
    }

    #[test]
    fn test_append_leaves_input_untouched() {
        let existing = vec![make_record("a", "Rust", 0.8, 2_000)];
        let before = existing.clone();

        let _ = append(&existing, make_record("b", "Rust", 0.9, 3_000));

        assert_eq!(existing, before);
    }

    #[test]
    fn test_seed_ledger_single_healthy_sample() {
        let now_ms = 1_700_000_000_000;
        let seed = seed_ledger(now_ms);

        assert_eq!(seed.len(), 1);
        assert_eq!(seed[0].id, "sample-1");
        assert_eq!(seed[0].disease, "Healthy");
        assert_eq!(seed[0].confidence, 0.98);
        assert_eq!(seed[0].timestamp, now_ms - 24 * 60 * 60 * 1000);
        assert!(!seed[0].remedy_tips.is_empty());
    }

    #[tokio::test]
    async fn test_open_empty_store_seeds() {
        let ledger = Ledger::open(MemoryStore::new(), 1_700_000_000_000).await;

        let records = ledger.snapshot().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].disease, "Healthy");
    }

    #[tokio::test]
    async fn test_open_empty_array_seeds() {
        let store = MemoryStore::with_records(vec![]);
        let ledger = Ledger::open(store, 1_700_000_000_000).await;

        assert_eq!(ledger.snapshot().await.len(), 1);
    }

    #[tokio::test]
    async fn test_open_keeps_existing_records() {
        let existing = vec![
            make_record("a", "Rust", 0.8, 2_000),
            make_record("b", "Healthy", 0.9, 1_000),
        ];
        let store = MemoryStore::with_records(existing.clone());

        let ledger = Ledger::open(store, 1_700_000_000_000).await;

        assert_eq!(ledger.snapshot().await, existing);
    }

    #[tokio::test]
    async fn test_open_normalizes_storage() {
        let store = MemoryStore::new();
        let ledger = Ledger::open(store.clone(), 1_700_000_000_000).await;

        // The seed is written back so storage matches the in-memory state.
        assert_eq!(store.stored(), Some(ledger.snapshot().await));
    }

    struct ReadOnlyStore;

    impl crate::store::DiagnosisStore for ReadOnlyStore {
        async fn load(&self) -> common::Result<Option<Vec<DiagnosisRecord>>> {
            Ok(None)
        }

        async fn save(&self, _records: &[DiagnosisRecord]) -> common::Result<()> {
            Err(common::Error::Storage("quota exceeded".to_string()))
        }
    }

    #[tokio::test]
    async fn test_save_failure_does_not_lose_the_append() {
        let ledger = Ledger::open(ReadOnlyStore, 1_700_000_000_000).await;

        let record = make_record("c", "Rust", 0.8, 1_700_000_100_000);
        let next = ledger.append(record.clone()).await;

        // The write failed silently; the in-memory ledger still grew.
        assert_eq!(next.len(), 2);
        assert_eq!(ledger.snapshot().await[0], record);
    }

    #[tokio::test]
    async fn test_append_persists_full_sequence() {
        let store = MemoryStore::new();
        let ledger = Ledger::open(store.clone(), 1_700_000_000_000).await;

        let record = make_record("c", "Late Blight", 0.77, 1_700_000_100_000);
        let next = ledger.append(record.clone()).await;

        assert_eq!(next.len(), 2);
        assert_eq!(next[0], record);
        assert_eq!(store.stored(), Some(next));
    }
}
