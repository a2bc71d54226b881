//! Input metadata and conversion output types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Advisory metadata about an input, as declared by the caller.
///
/// Both fields are hints. Either can be missing or wrong; detection
/// treats them as cheap signals to check before touching the bytes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreamInfo {
    /// Declared file extension, including the leading dot (e.g. ".msg")
    pub extension: Option<String>,

    /// Declared media type (e.g. "application/vnd.ms-outlook")
    pub mimetype: Option<String>,
}

impl StreamInfo {
    /// Metadata with both signals present
    #[must_use]
    pub fn new(extension: impl Into<String>, mimetype: impl Into<String>) -> Self {
        Self {
            extension: Some(extension.into()),
            mimetype: Some(mimetype.into()),
        }
    }

    /// Metadata carrying only a declared extension
    #[must_use]
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self {
            extension: Some(extension.into()),
            mimetype: None,
        }
    }

    /// Metadata carrying only a declared media type
    #[must_use]
    pub fn with_mimetype(mimetype: impl Into<String>) -> Self {
        Self {
            extension: None,
            mimetype: Some(mimetype.into()),
        }
    }
}

/// The document produced by a successful conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Rendered markdown: header block followed by the content section
    pub markdown: String,

    /// Document title, taken from the decoded Subject header
    pub title: Option<String>,
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.markdown)
    }
}
