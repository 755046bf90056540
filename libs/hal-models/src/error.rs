//! Error types for the document model

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Link relation '{0}' has no values")]
    EmptyLinkSet(String),

    #[error("Embedded group '{0}' declared as single must hold exactly one resource, found {1}")]
    InvalidSingleGroup(String, usize),
}

pub type Result<T> = std::result::Result<T, Error>;
