//! Admin client error types.

use thiserror::Error;

/// Errors returned by the admin REST API client.
#[derive(Debug, Error)]
pub enum AdminClientError {
    /// The server answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, or a placeholder if it could not be read.
        message: String,
    },

    /// Transport level failure (connection refused, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required identifier was missing on a representation.
    #[error("{resource_type} has no id")]
    MissingId {
        /// Type of resource.
        resource_type: &'static str,
    },

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl AdminClientError {
    /// Creates a missing-id error for a resource type.
    #[must_use]
    pub const fn missing_id(resource_type: &'static str) -> Self {
        Self::MissingId { resource_type }
    }

    /// Returns the HTTP status code, if the server produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Checks if this is a 404 from the server.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Result type for admin client operations.
pub type AdminClientResult<T> = Result<T, AdminClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_exposes_status() {
        let err = AdminClientError::Api {
            status: 404,
            message: "User not found".to_string(),
        };

        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("User not found"));
    }

    #[test]
    fn missing_id_has_no_status() {
        let err = AdminClientError::missing_id("credential");

        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "credential has no id");
    }
}
