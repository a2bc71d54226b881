//! Error types for message conversion

use thiserror::Error;

/// Errors that can occur while converting a message
#[derive(Error, Debug)]
pub enum ConvertError {
    /// A capability this conversion depends on is not compiled in
    #[error("converting {format} messages requires the `{feature}` feature")]
    MissingCapability {
        feature: &'static str,
        format: &'static str,
    },

    /// The input could not be opened as a compound document
    #[error("failed to open compound document: {0}")]
    Container(#[from] std::io::Error),
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
