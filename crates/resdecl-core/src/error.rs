//! Error types for resdecl.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: missing required constant: {0}")]
    Configuration(String),

    #[error("unknown resource type: {0}")]
    UnknownResourceType(String),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
