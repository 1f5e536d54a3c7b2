//! Plant collection derivation
//!
//! Groups the ledger into one entry per distinct disease key. Records
//! arrive newest-first, so the first record seen for a key supplies the
//! entry's image, health, and date; later (older) records only bump the
//! count.

use std::collections::HashMap;

use common::models::{DiagnosisRecord, PlantCollectionEntry, PlantHealth};

/// Synthetic key all `Healthy` records collapse into
pub const HEALTHY_KEY: &str = "healthy-plant";

pub fn plant_collection(records: &[DiagnosisRecord]) -> Vec<PlantCollectionEntry> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<PlantCollectionEntry> = Vec::new();

    for record in records {
        let key = if record.is_healthy() {
            HEALTHY_KEY.to_string()
        } else {
            record.disease.clone()
        };

        match index.get(&key) {
            None => {
                index.insert(key.clone(), entries.len());
                entries.push(PlantCollectionEntry {
                    id: key,
                    name: if record.is_healthy() {
                        "Healthy Plant".to_string()
                    } else {
                        format!("Plant with {}", record.disease)
                    },
                    species: record.disease.clone(),
                    image: record.image.clone(),
                    date_added: record.timestamp,
                    last_diagnosis: record.timestamp,
                    health: if record.is_healthy() {
                        PlantHealth::Healthy
                    } else {
                        PlantHealth::Warning
                    },
                    diagnosis_count: 1,
                });
            }
            Some(&i) => {
                let entry = &mut entries[i];
                entry.diagnosis_count += 1;
                entry.last_diagnosis = entry.last_diagnosis.max(record.timestamp);
            }
        }
    }

    entries.sort_by(|a, b| b.last_diagnosis.cmp(&a.last_diagnosis));
    entries
}
