//! Error types for the auth client.

use thiserror::Error;

/// Result type for auth client operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Auth client errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Configuration error (missing base URL, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport or body-decode failure, passed through from reqwest
    /// unmodified. Non-2xx responses are not an error; the backend reports
    /// failures inside its JSON envelope and callers inspect that.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
