//! Error types for the tonal core.

use thiserror::Error;

/// Errors produced by palette operations.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// An export format name was not recognized.
    #[error("unknown export format: {0}")]
    UnknownFormat(String),

    /// A palette could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for PaletteError {
    fn from(e: serde_json::Error) -> Self {
        PaletteError::Serialization(e.to_string())
    }
}
