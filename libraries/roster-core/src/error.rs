/// Core error types for Roster
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster client operations
///
/// Every variant renders a human-readable message through `Display`; the
/// store records that message as its `error` state, so callers never need to
/// match on variants to show something useful.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Input failed shape validation before reaching the repository
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Base URL rejected at adapter construction
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Server answered with a non-success status
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Response body text, if any
        message: String,
    },

    /// Transport failure (connect, timeout, or other network error)
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be parsed
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl RosterError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a server error from a status code and body text
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }
}
