//! Navigation targets exposed to the host router.

use std::fmt;

use serde::Serialize;

/// Tab of the user details view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserTab {
    /// Profile settings.
    Settings,
    /// Credential panel.
    Credentials,
}

impl UserTab {
    /// Path segment of the tab.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Settings => "settings",
            Self::Credentials => "credentials",
        }
    }
}

/// A view the user screens navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "camelCase")]
pub enum Route {
    /// User creation form.
    AddUser {
        /// Realm name.
        realm: String,
    },
    /// Details of one user.
    User {
        /// Realm name.
        realm: String,
        /// User id.
        id: String,
        /// Tab to open.
        tab: UserTab,
    },
}

impl Route {
    /// Path of the route in the console.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::AddUser { realm } => format!("/{realm}/users/add-user"),
            Self::User { realm, id, tab } => format!("/{realm}/users/{id}/{}", tab.as_str()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
