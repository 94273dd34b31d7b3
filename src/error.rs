// Error types module

use thiserror::Error;

/// Errors produced while building an imgproxy URL
///
/// Decoding errors surface immediately from option application. Constraint
/// and configuration errors are latched on the [`ImageUrl`](crate::ImageUrl)
/// and reported when the URL is finalized.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UrlError {
    /// Hex-encoded key or salt could not be decoded
    #[error("Failed to hex-decode {field}: {source}")]
    Decode {
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    /// A processing option violates one of its constraints
    #[error("Invalid option '{option}': {message}")]
    Constraint { option: String, message: String },

    /// Signing material or other configuration is inconsistent
    #[error("Configuration error: {0}")]
    Config(String),

    /// The URL was finalized without a source locator
    #[error("Source URL is required")]
    MissingSource,
}

impl UrlError {
    pub fn constraint(option: impl Into<String>, message: impl Into<String>) -> Self {
        UrlError::Constraint {
            option: option.into(),
            message: message.into(),
        }
    }

    pub fn decode(field: &'static str, source: hex::FromHexError) -> Self {
        UrlError::Decode { field, source }
    }

    pub fn config(message: impl Into<String>) -> Self {
        UrlError::Config(message.into())
    }

    /// Whether this error is latched on the URL rather than returned immediately
    pub fn is_latched(&self) -> bool {
        matches!(self, UrlError::Constraint { .. } | UrlError::Config(_))
    }
}

/// Result type alias for URL construction
pub type Result<T> = std::result::Result<T, UrlError>;
