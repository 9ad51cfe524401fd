//! Credential representations.
//!
//! Credentials are authentication factors bound to a user. Their order
//! within the list returned by the server is their authentication
//! priority.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Type name of password credentials.
pub const PASSWORD_TYPE: &str = "password";

/// Type name of TOTP/HOTP credentials.
pub const OTP_TYPE: &str = "otp";

/// A stored credential as returned by
/// `GET /admin/realms/{realm}/users/{id}/credentials`.
///
/// Secret material is never returned by the server, so only metadata is
/// modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRepresentation {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Credential type (e.g., "password", "otp").
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub credential_type: Option<String>,
    /// User-defined label (e.g., "My Yubikey").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_label: Option<String>,
    /// When the credential was created (milliseconds since epoch).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<i64>,
    /// Non-secret metadata (algorithm, digits, counter...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_data: Option<String>,
    /// Priority among credentials of the same user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl CredentialRepresentation {
    /// Creates a credential of the given type.
    #[must_use]
    pub fn new(id: impl Into<String>, credential_type: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            credential_type: Some(credential_type.into()),
            ..Default::default()
        }
    }

    /// Sets the user label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.user_label = Some(label.into());
        self
    }

    /// Returns the type, or an empty string when the server omitted it.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.credential_type.as_deref().unwrap_or_default()
    }

    /// Checks if this is a password credential.
    #[must_use]
    pub fn is_password(&self) -> bool {
        self.type_name() == PASSWORD_TYPE
    }

    /// Creation time, if the server reported one.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_date
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }
}

/// Body of `PUT /admin/realms/{realm}/users/{id}/reset-password`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordReset {
    /// Always "password".
    #[serde(rename = "type")]
    pub credential_type: String,
    /// New password value.
    pub value: String,
    /// Whether the user must change the password on next login.
    #[serde(default)]
    pub temporary: bool,
}

impl PasswordReset {
    /// Creates a password reset request.
    #[must_use]
    pub fn new(value: impl Into<String>, temporary: bool) -> Self {
        Self {
            credential_type: PASSWORD_TYPE.to_string(),
            value: value.into(),
            temporary,
        }
    }
}
