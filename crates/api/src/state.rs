//! Application state

use std::time::Duration;

use common::Config;
use engine::{DiagnosisWorkflow, RandomClassifier};
use ledger::{FileStore, Ledger};
use remedy::RemedyClient;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub ledger: Ledger<FileStore>,
    pub workflow: DiagnosisWorkflow<RandomClassifier, RemedyClient>,
}

impl AppState {
    pub fn new(config: Config, ledger: Ledger<FileStore>) -> Self {
        let provider = RemedyClient::new(
            config.remedy_api_url.clone(),
            config.remedy_api_key.clone(),
        );
        let workflow = DiagnosisWorkflow::new(
            RandomClassifier,
            provider,
            Duration::from_secs(config.remedy_timeout_secs),
        );
        Self {
            config,
            ledger,
            workflow,
        }
    }
}
