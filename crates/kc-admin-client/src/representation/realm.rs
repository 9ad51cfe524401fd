//! Realm, component and user-profile representations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Provider type of user storage (federation) components.
pub const USER_STORAGE_PROVIDER_TYPE: &str = "org.keycloak.storage.UserStorageProvider";

/// Realm representation.
///
/// Only the fields the user screens read are modelled; unknown fields
/// are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealmRepresentation {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Realm name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Whether the realm is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Whether brute-force detection is on.
    #[serde(default)]
    pub brute_force_protected: bool,
    /// Whether usernames can be edited.
    #[serde(default)]
    pub edit_username_allowed: bool,
}

/// Component representation, used here for user storage providers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRepresentation {
    /// Unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Implementation id (e.g., "ldap", "kerberos").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    /// Provider SPI type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<String>,
    /// Owning realm id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Multi-valued configuration.
    #[serde(default)]
    pub config: HashMap<String, Vec<String>>,
}

impl ComponentRepresentation {
    /// Checks whether the first `enabled` config value is `"true"`.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.config
            .get("enabled")
            .and_then(|values| values.first())
            .is_some_and(|v| v == "true")
    }
}

/// User profile configuration (`GET /admin/realms/{realm}/users/profile`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileConfig {
    /// Declared attributes.
    #[serde(default)]
    pub attributes: Vec<UserProfileAttribute>,
    /// Attribute groups.
    #[serde(default)]
    pub groups: Vec<UserProfileGroup>,
}

impl UserProfileConfig {
    /// Looks up an attribute by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&UserProfileAttribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// A declared user profile attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileAttribute {
    /// Attribute name.
    pub name: String,
    /// Human readable name; may be a `${key}` message reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Group the attribute belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// A user profile attribute group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileGroup {
    /// Group name.
    pub name: String,
    /// Group header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_header: Option<String>,
}
