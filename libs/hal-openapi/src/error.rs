//! Error types for schema generation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Tuples, and types nesting themselves deeper than the configured bound
    #[error("Cannot generate schema for {0}")]
    NotSupported(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
