//! Domain models

use serde::{Deserialize, Serialize};

/// Disease labels the classifier can assign.
pub const DISEASE_CATALOG: [&str; 5] = [
    "Powdery Mildew",
    "Black Spot",
    "Rust",
    "Early Blight",
    "Late Blight",
];

/// Sentinel label for a plant with no detected issue.
///
/// Only the seed record carries this label; the classifier never
/// assigns it (see the design notes on the asymmetric catalog).
pub const HEALTHY: &str = "Healthy";

/// One completed diagnosis event.
///
/// Records are immutable once created; the ledger only ever grows by
/// prepending new records. The serialized shape matches the persisted
/// `plant-md-diagnoses` format: `{id, image, disease, confidence,
/// remedyTips, timestamp}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisRecord {
    pub id: String,
    /// Opaque image reference (data URL or remote URL)
    pub image: String,
    pub disease: String,
    /// Model confidence in [0, 1]
    pub confidence: f64,
    /// Free-form remedy text; empty if the provider returned nothing
    pub remedy_tips: String,
    /// Milliseconds since epoch
    pub timestamp: i64,
}

impl DiagnosisRecord {
    pub fn is_healthy(&self) -> bool {
        self.disease == HEALTHY
    }
}

/// Classifier output for a single image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub disease: String,
    pub confidence: f64,
}

/// Gamification level derived from the total diagnosis count
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LevelInfo {
    pub level: i32,
    pub name: String,
    /// Diagnosis count needed for the next level; `None` at the top
    pub next: Option<u32>,
}

/// Aggregates derived from the ledger on every read
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerStats {
    pub total_diagnoses: usize,
    pub healthy_count: usize,
    pub problem_count: usize,
    /// Mean confidence over all records as a fraction; 0 if empty
    pub average_confidence: f64,
    /// Records within the last 7 days
    pub this_week: usize,
    /// Records within the last 30 days
    pub this_month: usize,
    pub streak_days: u32,
    pub level: LevelInfo,
}

/// A catalog achievement evaluated against the current ledger
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AchievementStatus {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub unlocked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocked_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_progress: Option<f64>,
}

/// Health state shown for a plant collection entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlantHealth {
    Healthy,
    Warning,
}

/// One entry per distinct disease key seen in the ledger
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlantCollectionEntry {
    pub id: String,
    pub name: String,
    pub species: String,
    pub image: String,
    pub date_added: i64,
    pub last_diagnosis: i64,
    pub health: PlantHealth,
    pub diagnosis_count: u32,
}
