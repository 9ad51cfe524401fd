//! CLI error types.

use kc_admin_client::AdminClientError;
use kc_admin_console::ConsoleError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Resource not found.
    #[error("{resource_type} not found: {id}")]
    NotFound {
        /// Type of resource.
        resource_type: String,
        /// Resource identifier.
        id: String,
    },

    /// Admin API error raised outside a screen.
    #[error(transparent)]
    Client(#[from] AdminClientError),

    /// Screen setup error.
    #[error(transparent)]
    Console(#[from] ConsoleError),

    /// The screen reported one or more failures.
    #[error("{0}")]
    Failed(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation cancelled.
    #[error("operation cancelled")]
    Cancelled,
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
