//! Application configuration

use std::env;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted diagnosis ledger
    pub data_dir: PathBuf,
    pub remedy_api_url: String,
    pub remedy_api_key: Option<String>,
    /// Upper bound on a single remedy provider call, in seconds
    pub remedy_timeout_secs: u64,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            remedy_api_url: env::var("REMEDY_API_URL")
                .unwrap_or_else(|_| "http://localhost:3400/remedy-tips".to_string()),
            remedy_api_key: env::var("REMEDY_API_KEY").ok(),
            remedy_timeout_secs: env::var("REMEDY_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
        }
    }
}
