//! Cart error types.
//!
//! The reducer itself never fails. These errors only surface at the edges:
//! reading catalog files and decoding action text.

use thiserror::Error;

/// Errors that can occur around the cart core.
#[derive(Error, Debug)]
pub enum CartError {
    /// Item id is not in the catalog.
    #[error("Item not in catalog: {0}")]
    UnknownItem(u64),

    /// Action command could not be parsed.
    #[error("Invalid action command: {0}")]
    InvalidCommand(String),

    /// Item id could not be parsed.
    #[error("Invalid item id: {0}")]
    InvalidItemId(String),

    /// Catalog file has an extension we do not read.
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CartError {
    fn from(e: serde_json::Error) -> Self {
        CartError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for CartError {
    fn from(e: toml::de::Error) -> Self {
        CartError::SerializationError(e.to_string())
    }
}
