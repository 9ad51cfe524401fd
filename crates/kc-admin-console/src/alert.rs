//! User-visible notifications.
//!
//! Every remote failure is caught where the call is made and turned into
//! an [`Alert`] keyed by the operation that failed. Nothing is retried.

use kc_admin_client::AdminClientError;
use serde::Serialize;

/// Severity of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertVariant {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Danger,
}

/// Operation an alert reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AlertKey {
    /// Listing users failed.
    FetchUsersError,
    /// Listing users failed while user federation is configured.
    FetchUsersErrorStorage,
    /// All lockouts cleared.
    UnlockUsersSuccess,
    /// Clearing lockouts failed.
    UnlockUsersError,
    /// Selected users deleted.
    DeleteUserSuccess,
    /// Deleting users failed.
    DeleteUserError,
    /// Credential deleted.
    DeleteCredentialSuccess,
    /// Deleting a credential failed.
    DeleteCredentialError,
    /// Credential reordered.
    MoveCredentialSuccess,
    /// Reordering a credential failed.
    MoveCredentialError,
    /// Credential label saved.
    UpdateCredentialLabelSuccess,
    /// Saving a credential label failed.
    UpdateCredentialLabelError,
    /// Password saved.
    SavePasswordSuccess,
    /// Saving a password failed.
    SavePasswordError,
    /// Password and confirmation differ.
    PasswordMismatch,
    /// Credential reset e-mail sent.
    CredentialResetEmailSuccess,
    /// Sending the credential reset e-mail failed.
    CredentialResetEmailError,
}

impl AlertKey {
    /// Message key in the admin console bundle.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::FetchUsersError => "users:noUsersFoundError",
            Self::FetchUsersErrorStorage => "users:noUsersFoundErrorStorage",
            Self::UnlockUsersSuccess => "unlockUsersSuccess",
            Self::UnlockUsersError => "users:unlockUsersError",
            Self::DeleteUserSuccess => "userDeletedSuccess",
            Self::DeleteUserError => "users:userDeletedError",
            Self::DeleteCredentialSuccess => "deleteCredentialsSuccess",
            Self::DeleteCredentialError => "users:deleteCredentialsError",
            Self::MoveCredentialSuccess => "users:updatedCredentialMoveSuccess",
            Self::MoveCredentialError => "users:updatedCredentialMoveError",
            Self::UpdateCredentialLabelSuccess => "updateCredentialUserLabelSuccess",
            Self::UpdateCredentialLabelError => "users:updateCredentialUserLabelError",
            Self::SavePasswordSuccess => "savePasswordSuccess",
            Self::SavePasswordError => "users:savePasswordError",
            Self::PasswordMismatch => "confirmPasswordDoesNotMatch",
            Self::CredentialResetEmailSuccess => "credentialResetEmailSuccess",
            Self::CredentialResetEmailError => "users:credentialResetEmailError",
        }
    }

    /// English text of the message.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::FetchUsersError => "Could not fetch users",
            Self::FetchUsersErrorStorage => {
                "Could not fetch users from the configured user federation"
            }
            Self::UnlockUsersSuccess => "Any temporarily locked users are now unlocked",
            Self::UnlockUsersError => "Could not unlock all users",
            Self::DeleteUserSuccess => "The user has been deleted",
            Self::DeleteUserError => "The user could not be deleted",
            Self::DeleteCredentialSuccess => "The credential has been deleted",
            Self::DeleteCredentialError => "Could not delete the credential",
            Self::MoveCredentialSuccess => "Credential priority changed",
            Self::MoveCredentialError => "Could not change credential priority",
            Self::UpdateCredentialLabelSuccess => "User label changed",
            Self::UpdateCredentialLabelError => "Could not change the user label",
            Self::SavePasswordSuccess => "The password has been set",
            Self::SavePasswordError => "Could not set the password",
            Self::PasswordMismatch => "Password and confirmation do not match",
            Self::CredentialResetEmailSuccess => "Email sent to user",
            Self::CredentialResetEmailError => "Could not send the email",
        }
    }

    /// Severity implied by the key.
    #[must_use]
    pub const fn variant(self) -> AlertVariant {
        match self {
            Self::UnlockUsersSuccess
            | Self::DeleteUserSuccess
            | Self::DeleteCredentialSuccess
            | Self::MoveCredentialSuccess
            | Self::UpdateCredentialLabelSuccess
            | Self::SavePasswordSuccess
            | Self::CredentialResetEmailSuccess => AlertVariant::Success,
            _ => AlertVariant::Danger,
        }
    }
}

/// A notification raised by a screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    /// Operation reported on.
    pub key: AlertKey,
    /// Severity.
    pub variant: AlertVariant,
    /// Error description, for failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Alert {
    /// Full text including the error detail.
    #[must_use]
    pub fn message(&self) -> String {
        match &self.detail {
            Some(detail) => format!("{}: {}", self.key.text(), detail),
            None => self.key.text().to_string(),
        }
    }
}

/// Queue of alerts raised by a screen, oldest first.
#[derive(Debug, Default)]
pub struct Alerts {
    queue: Vec<Alert>,
}

impl Alerts {
    /// Raises an alert without detail.
    pub fn add_alert(&mut self, key: AlertKey) {
        tracing::info!(key = key.message_key(), "alert");
        self.queue.push(Alert {
            key,
            variant: key.variant(),
            detail: None,
        });
    }

    /// Raises an error alert carrying the failure's description.
    pub fn add_error(&mut self, key: AlertKey, error: &AdminClientError) {
        tracing::warn!(key = key.message_key(), %error, "alert");
        self.queue.push(Alert {
            key,
            variant: AlertVariant::Danger,
            detail: Some(error.to_string()),
        });
    }

    /// Removes and returns every queued alert.
    pub fn drain(&mut self) -> Vec<Alert> {
        std::mem::take(&mut self.queue)
    }

    /// Queued alerts.
    #[must_use]
    pub fn as_slice(&self) -> &[Alert] {
        &self.queue
    }

    /// Most recent alert.
    #[must_use]
    pub fn last(&self) -> Option<&Alert> {
        self.queue.last()
    }

    /// Checks whether an alert with the key was raised.
    #[must_use]
    pub fn contains(&self, key: AlertKey) -> bool {
        self.queue.iter().any(|a| a.key == key)
    }

    /// Checks whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_alert_keeps_detail() {
        let mut alerts = Alerts::default();
        let err = AdminClientError::Api {
            status: 500,
            message: "boom".to_string(),
        };

        alerts.add_error(AlertKey::MoveCredentialError, &err);

        let alert = alerts.last().unwrap();
        assert_eq!(alert.variant, AlertVariant::Danger);
        assert_eq!(alert.key.message_key(), "users:updatedCredentialMoveError");
        assert!(alert.message().contains("boom"));
    }

    #[test]
    fn success_variant_follows_key() {
        let mut alerts = Alerts::default();
        alerts.add_alert(AlertKey::UnlockUsersSuccess);
        alerts.add_alert(AlertKey::PasswordMismatch);

        let drained = alerts.drain();
        assert_eq!(drained[0].variant, AlertVariant::Success);
        assert_eq!(drained[1].variant, AlertVariant::Danger);
        assert!(alerts.is_empty());
    }
}
