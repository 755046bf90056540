//! Error types for building resource descriptions

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Link '{rel}' references unresolved variable '{variable}'")]
    UnresolvedVariable { rel: String, variable: String },

    #[error("Embedding of '{type_name}' exceeds maximum depth {depth}")]
    CycleDetected { type_name: String, depth: usize },

    #[error("Type '{0}' is already registered")]
    DuplicateType(String),

    #[error("Invalid link template: {0}")]
    Template(#[from] halcyon_uri_template::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
