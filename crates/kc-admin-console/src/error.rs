//! Console error types.

use thiserror::Error;

/// Errors a screen reports to its host instead of as an alert.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The screen was opened for a user without an id.
    #[error("user has no id")]
    MissingUserId,

    /// No credential with this id is shown.
    #[error("credential not found: {0}")]
    CredentialNotFound(String),
}

/// Result type for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
