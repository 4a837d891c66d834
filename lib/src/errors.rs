// lib/src/errors.rs

use std::path::PathBuf;
use thiserror::Error;

use thalcare_models::errors::ValidationError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML serialization/deserialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Invalid input or data: {0}")]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
