//! Rendering helpers for user table rows.

use kc_admin_client::{BruteForceStatus, UserRepresentation};
use serde::Serialize;

/// Placeholder for empty cells.
pub const EMPTY_CELL: &str = "—";

/// Formats an optional value, using [`EMPTY_CELL`] when absent or empty.
#[must_use]
pub fn empty_formatter(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => EMPTY_CELL.to_string(),
    }
}

/// A listed user with its lockout status.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BruteUser {
    /// The user.
    #[serde(flatten)]
    pub user: UserRepresentation,
    /// Lockout status; `None` when it could not be fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brute_force_status: Option<BruteForceStatus>,
}

impl BruteUser {
    /// Checks whether the user is temporarily locked out.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.brute_force_status
            .as_ref()
            .is_some_and(|s| s.disabled)
    }

    /// Labels of the status column.
    #[must_use]
    pub fn status_labels(&self) -> Vec<StatusLabel> {
        let mut labels = Vec::new();
        if !self.user.enabled {
            labels.push(StatusLabel::Disabled);
        }
        if self.is_locked() {
            labels.push(StatusLabel::TemporaryLocked);
        }
        labels
    }

    /// Text of the status column.
    #[must_use]
    pub fn status_text(&self) -> String {
        let labels = self.status_labels();
        if labels.is_empty() {
            return EMPTY_CELL.to_string();
        }
        labels
            .iter()
            .map(|l| l.text())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Content of the email column.
    #[must_use]
    pub fn email_cell(&self) -> EmailCell {
        EmailCell {
            not_verified: !self.user.email_verified,
            text: empty_formatter(self.user.email.as_deref()),
        }
    }
}

/// A status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusLabel {
    /// Account disabled (red).
    Disabled,
    /// Locked by brute-force detection (orange).
    TemporaryLocked,
}

impl StatusLabel {
    /// Label text.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Disabled => "Disabled",
            Self::TemporaryLocked => "Temporarily locked",
        }
    }
}

/// The email column: address plus a warning marker when unverified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailCell {
    /// Show the "not verified" marker.
    pub not_verified: bool,
    /// Address or placeholder.
    pub text: String,
}

/// Table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    /// Username, linking to the user's settings.
    Username,
    /// Email with verification marker.
    Email,
    /// Last name.
    LastName,
    /// First name.
    FirstName,
    /// Status badges.
    Status,
}

impl Column {
    /// All columns.
    pub const ALL: [Self; 5] = [
        Self::Username,
        Self::Email,
        Self::LastName,
        Self::FirstName,
        Self::Status,
    ];

    /// Header message key.
    #[must_use]
    pub const fn display_key(self) -> &'static str {
        match self {
            Self::Username => "users:username",
            Self::Email => "users:email",
            Self::LastName => "users:lastName",
            Self::FirstName => "users:firstName",
            Self::Status => "users:status",
        }
    }
}

/// An entry of the per-row action menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RowAction {
    /// Delete the row's user after confirmation.
    Delete,
}
