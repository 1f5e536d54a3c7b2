//! Diagnosis workflow and ledger analytics

pub mod achievements;
pub mod analytics;
pub mod classifier;
pub mod collection;
pub mod workflow;

pub use classifier::{Classifier, RandomClassifier};
pub use workflow::{DiagnosisWorkflow, RemedyProvider};
