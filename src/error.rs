//! Error types for pdf-slides-server

use thiserror::Error;

/// Result type alias for pdf-slides-server
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for pdf-slides-server
#[derive(Error, Debug)]
pub enum Error {
    /// Base64 decode error
    #[error("Invalid base64 data: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// Invalid PDF file
    #[error("Invalid PDF file: {reason}")]
    InvalidPdf { reason: String },

    /// PDF parse/extraction error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Return a sanitized error message safe to send to clients.
    /// Internal details (library errors, offsets, object ids) are omitted.
    /// Full details should be logged via tracing before calling this.
    pub fn client_message(&self) -> String {
        match self {
            Error::Base64Decode(_) => "Invalid base64 data".to_string(),
            Error::InvalidPdf { .. } => "Invalid PDF file".to_string(),
            Error::Pdf(_) => "PDF processing error".to_string(),
            Error::Serialization(_) => "Serialization error".to_string(),
        }
    }
}
