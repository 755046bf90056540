//! Error types for HAL formatting

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("'{0}' is not a valid XML name")]
    InvalidName(String),
    #[error("invalid HAL document: {0}")]
    InvalidDocument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
