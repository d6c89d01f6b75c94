//! Error types for medman-core.

use thiserror::Error;

use crate::validate::ValidationError;

#[derive(Error, Debug)]
pub enum MedmanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("index {index} out of range (collection has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, MedmanError>;
