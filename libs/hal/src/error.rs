//! Error types for the facade

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Build(#[from] halcyon_builder::Error),

    #[error(transparent)]
    Format(#[from] halcyon_format::Error),

    #[error(transparent)]
    Schema(#[from] halcyon_openapi::Error),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

pub type Result<T> = std::result::Result<T, Error>;
