//! Error types

use thiserror::Error;

/// Main error type for PlantMD
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Remedy provider error: {0}")]
    Provider(String),

    #[error("A diagnosis is already in progress")]
    Busy,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
