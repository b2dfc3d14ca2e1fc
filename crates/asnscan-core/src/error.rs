use thiserror::Error;

/// Result type alias for BGP directory operations
pub type Result<T> = std::result::Result<T, AsnScanError>;

/// Errors that can occur when querying a BGP directory
#[derive(Error, Debug)]
pub enum AsnScanError {
    /// Rate limit exceeded
    #[error("rate limit exceeded by the BGP API")]
    RateLimited,

    /// Resource not found
    #[error("resource not found: {resource}")]
    NotFound {
        /// Description of the resource that wasn't found
        resource: String,
    },

    /// API returned an error response
    #[error("HTTP {code}: {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the API
        message: String,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out: {0}")]
    Timeout(String),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl AsnScanError {
    /// Returns the HTTP status code if the API answered with an error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::RateLimited => Some(429),
            Self::NotFound { .. } => Some(404),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns true if the error came from decoding the response body
    #[must_use]
    pub const fn is_decode_error(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}
