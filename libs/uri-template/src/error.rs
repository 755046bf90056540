//! Error types for URI Template parsing and expansion

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// URI Template errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Malformed template at offset {position}: {reason}")]
    MalformedTemplate { position: usize, reason: String },

    #[error("Unresolved variable: {0}")]
    UnresolvedVariable(String),
}

impl Error {
    pub(crate) fn malformed(position: usize, reason: impl Into<String>) -> Self {
        Error::MalformedTemplate {
            position,
            reason: reason.into(),
        }
    }
}
