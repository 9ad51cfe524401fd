//! User representations returned by the Admin API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::credential::CredentialRepresentation;

/// User representation as returned by `GET /admin/realms/{realm}/users`.
///
/// Listing with `briefRepresentation=true` omits attributes and
/// credentials, so every collection defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRepresentation {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Username.
    #[serde(default)]
    pub username: String,
    /// Whether the user is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// User's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Whether the email has been verified.
    #[serde(default)]
    pub email_verified: bool,
    /// User's first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// User's last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// When the user was created (milliseconds since epoch).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<i64>,
    /// Id of the user storage component this user is linked to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub federation_link: Option<String>,
    /// Id of the component the user originates from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// Custom user attributes.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, Vec<String>>,
    /// Required actions for the user.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_actions: Vec<String>,
    /// Credentials provided by federated storage.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub credentials: Vec<CredentialRepresentation>,
    /// Credential types the admin may disable.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disableable_credential_types: Vec<String>,
    /// Permissions of the calling admin on this user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access: Option<UserAccess>,
}

impl UserRepresentation {
    /// Creates a representation with an id and a username.
    #[must_use]
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            username: username.into(),
            enabled: true,
            ..Default::default()
        }
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the federation link.
    #[must_use]
    pub fn with_federation_link(mut self, link: impl Into<String>) -> Self {
        self.federation_link = Some(link.into());
        self
    }

    /// Sets the access flags.
    #[must_use]
    pub const fn with_access(mut self, access: UserAccess) -> Self {
        self.access = Some(access);
        self
    }

    /// Checks whether the calling admin may manage this user.
    #[must_use]
    pub fn can_manage(&self) -> bool {
        self.access.as_ref().is_some_and(|a| a.manage)
    }

    /// Checks whether the user's data lives in external storage.
    #[must_use]
    pub const fn is_federated(&self) -> bool {
        self.federation_link.is_some() || self.origin.is_some()
    }
}

/// Admin permissions on a single user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccess {
    /// May view the user.
    #[serde(default)]
    pub view: bool,
    /// May update or delete the user.
    #[serde(default)]
    pub manage: bool,
    /// May impersonate the user.
    #[serde(default)]
    pub impersonate: bool,
    /// May change role mappings.
    #[serde(default)]
    pub map_roles: bool,
    /// May change group membership.
    #[serde(default)]
    pub manage_group_membership: bool,
}

/// Brute-force detection state of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BruteForceStatus {
    /// Number of consecutive login failures.
    #[serde(default)]
    pub num_failures: u32,
    /// Whether the user is temporarily locked out.
    #[serde(default)]
    pub disabled: bool,
    /// Address of the last failed attempt.
    #[serde(rename = "lastIPFailure", skip_serializing_if = "Option::is_none")]
    pub last_ip_failure: Option<String>,
    /// Time of the last failure (milliseconds since epoch).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_failure: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brief_representation_parses() {
        let json = r#"{
            "id": "4c2b",
            "username": "jdoe",
            "enabled": true,
            "emailVerified": false,
            "email": "jdoe@example.com",
            "access": {"manage": true, "view": true}
        }"#;
        let user: UserRepresentation = serde_json::from_str(json).unwrap();

        assert_eq!(user.id.as_deref(), Some("4c2b"));
        assert!(user.enabled);
        assert!(!user.email_verified);
        assert!(user.can_manage());
        assert!(!user.is_federated());
        assert!(user.credentials.is_empty());
    }

    #[test]
    fn missing_access_cannot_manage() {
        let user = UserRepresentation::new("1", "jdoe");
        assert!(!user.can_manage());
    }

    #[test]
    fn origin_marks_user_federated() {
        let user = UserRepresentation {
            origin: Some("ldap-1".to_string()),
            ..UserRepresentation::new("1", "jdoe")
        };
        assert!(user.is_federated());
    }

    #[test]
    fn brute_force_status_parses_ip_field() {
        let json = r#"{"numFailures": 3, "disabled": true, "lastIPFailure": "10.0.0.1", "lastFailure": 1700000000000}"#;
        let status: BruteForceStatus = serde_json::from_str(json).unwrap();

        assert!(status.disabled);
        assert_eq!(status.num_failures, 3);
        assert_eq!(status.last_ip_failure.as_deref(), Some("10.0.0.1"));
    }
}
