//! Confirmation dialogs.

use serde::Serialize;

/// Style of the continue button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Regular action.
    Primary,
    /// Destructive action.
    Danger,
}

/// A modal asking the admin to confirm an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmDialog {
    /// Title message key.
    pub title_key: &'static str,
    /// Body text.
    pub message: String,
    /// Continue button message key.
    pub continue_label: &'static str,
    /// Continue button style.
    pub variant: ButtonVariant,
    open: bool,
}

impl ConfirmDialog {
    /// Creates a closed dialog.
    #[must_use]
    pub fn new(
        title_key: &'static str,
        message: impl Into<String>,
        continue_label: &'static str,
        variant: ButtonVariant,
    ) -> Self {
        Self {
            title_key,
            message: message.into(),
            continue_label,
            variant,
            open: false,
        }
    }

    /// Opens a closed dialog and closes an open one.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Closes the dialog.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Checks whether the dialog is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }
}
