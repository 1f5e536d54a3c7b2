#[cfg(test)]
mod tests {
    use crate::ledger::Ledger;
    use crate::store::{DiagnosisStore, FileStore, STORAGE_KEY};
    use common::models::DiagnosisRecord;

    fn make_record(id: &str, timestamp: i64) -> DiagnosisRecord {
        DiagnosisRecord {
            id: id.to_string(),
            image: "data:image/jpeg;base64,abc".to_string(),
            disease: "Powdery Mildew".to_string(),
            confidence: 0.85,
            remedy_tips: "Improve air circulation around the plant.".to_string(),
            timestamp,
        }
    }

    #[tokio::test]
    async fn test_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        let records = vec![make_record("a", 2_000), make_record("b", 1_000)];
        store.save(&records).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(records));
    }

    #[tokio::test]
    async fn test_file_is_named_after_storage_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        store.save(&[make_record("a", 1_000)]).await.unwrap();

        assert!(dir.path().join(format!("{STORAGE_KEY}.json")).exists());
    }

    #[tokio::test]
    async fn test_corrupt_document_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(format!("{STORAGE_KEY}.json"));
        tokio::fs::write(&path, b"{not json").await.unwrap();

        let store = FileStore::new(dir.path());
        assert!(store.load().await.is_err());
    }

    #[tokio::test]
    async fn test_open_falls_back_to_seed_on_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(format!("{STORAGE_KEY}.json"));
        tokio::fs::write(&path, b"[[[").await.unwrap();

        let ledger = Ledger::open(FileStore::new(dir.path()), 1_700_000_000_000).await;

        let records = ledger.snapshot().await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "sample-1");
    }

    #[tokio::test]
    async fn test_serialized_shape_uses_wire_field_names() {
        let json = serde_json::to_value(make_record("a", 1_000)).unwrap();

        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("remedyTips"));
        assert!(obj.contains_key("timestamp"));
        assert!(!obj.contains_key("remedy_tips"));
    }
}
