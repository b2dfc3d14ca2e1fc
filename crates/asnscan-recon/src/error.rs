use thiserror::Error;

/// Result type alias for reconnaissance operations
pub type ReconResult<T> = std::result::Result<T, ReconError>;

/// Errors from CIDR expansion and DNS lookups
#[derive(Error, Debug)]
pub enum ReconError {
    /// The prefix is not valid IPv4 CIDR notation
    #[error("invalid CIDR '{cidr}': {reason}")]
    InvalidCidr {
        /// The offending input
        cidr: String,
        /// Why it was rejected
        reason: String,
    },

    /// DNS resolution error
    #[error("DNS error: {0}")]
    Dns(String),

    /// The system resolver configuration could not be loaded
    #[error("resolver setup failed: {0}")]
    ResolverConfig(String),
}

impl ReconError {
    pub(crate) fn invalid_cidr(cidr: &str, reason: impl Into<String>) -> Self {
        Self::InvalidCidr {
            cidr: cidr.to_string(),
            reason: reason.into(),
        }
    }
}
