//! Credential panel of the user details screen.
//!
//! Shows a user's stored credentials grouped by type, in priority order.
//! Rows can be dragged to change priority, deleted, relabelled, and the
//! password can be set or reset. Credentials held by a federation
//! provider are listed separately and cannot be reordered.

pub mod drag;
pub mod group;
pub mod reorder;

use std::sync::Arc;

use kc_admin_client::{
    AdminClient, AdminClientError, AdminClientResult, CredentialRepresentation,
    ExecuteActionsEmail, PasswordReset, UserRepresentation, PASSWORD_TYPE,
};
use serde::Serialize;

use crate::alert::{AlertKey, Alerts};
use crate::dialog::{ButtonVariant, ConfirmDialog};
use crate::error::{ConsoleError, ConsoleResult};
use crate::refresh::RefreshKey;

pub use drag::{move_item, DragState};
pub use group::{capitalize, CredentialGroup, CredentialGroups, RowKey};
pub use reorder::{MoveStep, ReorderPlan};

/// Required action sent by default in the credential reset e-mail.
pub const UPDATE_PASSWORD_ACTION: &str = "UPDATE_PASSWORD";

/// Credential type a federation provider holds for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FederatedCredentialRow {
    /// Credential type.
    pub credential_type: String,
    /// Federation provider id the row links to.
    pub provided_by: Option<String>,
    /// Passwords of federated users can still be set from the console.
    pub can_set_password: bool,
}

/// Set/reset password dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordDialog {
    /// Resetting an existing password rather than setting the first one.
    pub reset: bool,
}

impl PasswordDialog {
    /// Title message key.
    #[must_use]
    pub const fn title_key(self) -> &'static str {
        if self.reset {
            "resetPasswordFor"
        } else {
            "setPasswordFor"
        }
    }
}

/// Inline edit of a credential's user label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelEdit {
    /// Credential being edited.
    pub credential_id: String,
    /// Text in the edit box.
    pub value: String,
}

/// State of the credential panel.
pub struct UserCredentials {
    client: Arc<dyn AdminClient>,
    user: UserRepresentation,
    user_id: String,
    alerts: Alerts,
    key: RefreshKey,

    credentials: Vec<CredentialRepresentation>,
    groups: CredentialGroups,
    federated_types: Vec<String>,

    drag: DragState,
    delete_dialog: ConfirmDialog,
    pending_delete: Option<CredentialRepresentation>,
    label_edit: Option<LabelEdit>,
    password_dialog: Option<PasswordDialog>,
    reset_email_open: bool,
}

impl UserCredentials {
    /// Creates the panel for `user`; call [`Self::mount`] before rendering.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::MissingUserId`] if the user has no id.
    pub fn new(client: Arc<dyn AdminClient>, user: UserRepresentation) -> ConsoleResult<Self> {
        let user_id = user.id.clone().ok_or(ConsoleError::MissingUserId)?;
        Ok(Self {
            client,
            user,
            user_id,
            alerts: Alerts::default(),
            key: RefreshKey::default(),
            credentials: Vec::new(),
            groups: CredentialGroups::default(),
            federated_types: Vec::new(),
            drag: DragState::default(),
            delete_dialog: ConfirmDialog::new(
                "deleteCredentialsConfirmTitle",
                "deleteCredentialsConfirm",
                "delete",
                ButtonVariant::Danger,
            ),
            pending_delete: None,
            label_edit: None,
            password_dialog: None,
            reset_email_open: false,
        })
    }

    /// Loads the federated credential types, then the credentials.
    pub async fn mount(&mut self) {
        self.federated_types = match self
            .client
            .user_storage_credential_types(&self.user_id)
            .await
        {
            Ok(types) => types,
            Err(error) => {
                tracing::warn!(user = %self.user_id, %error, "could not load federated credential types");
                Vec::new()
            }
        };
        self.fetch_credentials().await;
    }

    /// Refetches the credentials and regroups them. Groups that were
    /// expanded stay expanded. Failures degrade to an empty list.
    pub async fn fetch_credentials(&mut self) {
        let credentials = match self.client.credentials(&self.user_id).await {
            Ok(credentials) => credentials,
            Err(error) => {
                tracing::warn!(user = %self.user_id, %error, "could not load credentials, continuing empty");
                Vec::new()
            }
        };

        let expanded: Vec<String> = self
            .groups
            .as_slice()
            .iter()
            .filter(|g| g.expanded)
            .map(|g| g.credential_type.clone())
            .collect();
        let mut groups = CredentialGroups::from_credentials(&credentials);
        for index in 0..groups.len() {
            if expanded.contains(&groups.as_slice()[index].credential_type) {
                groups.toggle_expanded(index);
            }
        }

        self.credentials = credentials;
        self.groups = groups;
        self.drag.cancel();
    }

    /// Bumps the refresh key and refetches.
    pub async fn refresh(&mut self) {
        self.key.bump();
        self.fetch_credentials().await;
    }

    // === Derived view state ===

    /// The user's password credential, if any.
    #[must_use]
    pub fn password_credential(&self) -> Option<&CredentialRepresentation> {
        self.credentials.iter().find(|c| c.is_password())
    }

    /// "Set password" is offered while the user has no password.
    #[must_use]
    pub fn show_set_password_button(&self) -> bool {
        self.password_credential().is_none()
    }

    /// "Credential reset" needs an e-mail address to send to.
    #[must_use]
    pub fn show_reset_credential_button(&self) -> bool {
        self.user.email.as_deref().is_some_and(|e| !e.is_empty())
    }

    /// Neither stored nor federated credentials exist.
    #[must_use]
    pub fn is_empty_state(&self) -> bool {
        self.groups.is_empty() && self.federated_types.is_empty()
    }

    /// Rows of the federated credentials section.
    #[must_use]
    pub fn federated_rows(&self) -> Vec<FederatedCredentialRow> {
        self.federated_types
            .iter()
            .map(|t| FederatedCredentialRow {
                credential_type: t.clone(),
                provided_by: self.user.federation_link.clone(),
                can_set_password: t == PASSWORD_TYPE,
            })
            .collect()
    }

    /// Visual row order, following the drag in progress.
    #[must_use]
    pub fn item_order(&self) -> Vec<RowKey> {
        self.drag.order(&self.groups.item_order())
    }

    /// Expands or collapses a group.
    pub fn toggle_expand(&mut self, index: usize) -> bool {
        self.groups.toggle_expanded(index)
    }

    // === Delete ===

    /// Opens the delete confirmation for a credential, or closes it.
    pub fn toggle_delete(&mut self, credential: Option<CredentialRepresentation>) {
        if let Some(credential) = &credential {
            self.delete_dialog.message = format!(
                "Are you sure you want to delete the {} credential?",
                capitalize(credential.type_name())
            );
        }
        self.pending_delete = credential;
        self.delete_dialog.toggle();
    }

    /// Deletes the credential the confirmation was opened for.
    pub async fn confirm_delete_credential(&mut self) {
        self.delete_dialog.close();
        let Some(credential) = self.pending_delete.take() else {
            return;
        };

        let result = match credential.id.as_deref() {
            Some(id) => self.client.delete_credential(&self.user_id, id).await,
            None => Err(AdminClientError::missing_id("credential")),
        };
        match result {
            Ok(()) => {
                self.alerts.add_alert(AlertKey::DeleteCredentialSuccess);
                self.refresh().await;
            }
            Err(error) => self
                .alerts
                .add_error(AlertKey::DeleteCredentialError, &error),
        }
    }

    // === User label ===

    /// Starts editing a credential's label, or cancels the edit when the
    /// same credential is already being edited.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::CredentialNotFound`] for an unknown id.
    pub fn toggle_label_edit(&mut self, credential_id: &str) -> ConsoleResult<()> {
        if self
            .label_edit
            .as_ref()
            .is_some_and(|e| e.credential_id == credential_id)
        {
            self.label_edit = None;
            return Ok(());
        }
        let credential = self
            .credential(credential_id)
            .ok_or_else(|| ConsoleError::CredentialNotFound(credential_id.to_string()))?;
        self.label_edit = Some(LabelEdit {
            credential_id: credential_id.to_string(),
            value: credential.user_label.clone().unwrap_or_default(),
        });
        Ok(())
    }

    /// Replaces the text of the label being edited.
    pub fn set_label_value(&mut self, value: impl Into<String>) {
        if let Some(edit) = &mut self.label_edit {
            edit.value = value.into();
        }
    }

    /// Saves the label being edited.
    pub async fn save_label(&mut self) {
        let Some(edit) = self.label_edit.take() else {
            return;
        };
        match self
            .client
            .update_credential_label(&self.user_id, &edit.credential_id, &edit.value)
            .await
        {
            Ok(()) => {
                self.alerts.add_alert(AlertKey::UpdateCredentialLabelSuccess);
                self.refresh().await;
            }
            Err(error) => self
                .alerts
                .add_error(AlertKey::UpdateCredentialLabelError, &error),
        }
    }

    // === Password ===

    /// Opens the set (or reset) password dialog.
    pub fn open_password_dialog(&mut self, reset: bool) {
        self.password_dialog = Some(PasswordDialog { reset });
    }

    /// Closes the password dialog.
    pub fn close_password_dialog(&mut self) {
        self.password_dialog = None;
    }

    /// Saves a new password. A confirmation that does not match raises an
    /// alert and keeps the dialog open without calling the server.
    pub async fn submit_password(&mut self, password: &str, confirmation: &str, temporary: bool) {
        if password != confirmation {
            self.alerts.add_alert(AlertKey::PasswordMismatch);
            return;
        }
        self.password_dialog = None;

        let reset = PasswordReset::new(password, temporary);
        match self.client.reset_password(&self.user_id, &reset).await {
            Ok(()) => {
                self.alerts.add_alert(AlertKey::SavePasswordSuccess);
                self.refresh().await;
            }
            Err(error) => self.alerts.add_error(AlertKey::SavePasswordError, &error),
        }
    }

    /// Opens or closes the credential reset dialog.
    pub fn toggle_credential_reset(&mut self) {
        self.reset_email_open = !self.reset_email_open;
    }

    /// Sends the e-mail asking the user to perform `actions`. With no
    /// actions the user is asked to update the password.
    pub async fn send_credential_reset(&mut self, actions: Vec<String>, lifespan: Option<u64>) {
        self.reset_email_open = false;
        let actions = if actions.is_empty() {
            vec![UPDATE_PASSWORD_ACTION.to_string()]
        } else {
            actions
        };
        let params = ExecuteActionsEmail {
            actions,
            lifespan,
            ..Default::default()
        };
        match self
            .client
            .execute_actions_email(&self.user_id, &params)
            .await
        {
            Ok(()) => self.alerts.add_alert(AlertKey::CredentialResetEmailSuccess),
            Err(error) => self
                .alerts
                .add_error(AlertKey::CredentialResetEmailError, &error),
        }
    }

    // === Drag and drop ===

    /// Picks up a row. Group rows can only be dragged when there is more
    /// than one group.
    pub fn drag_start(&mut self, row: &RowKey) -> bool {
        if matches!(row, RowKey::Group { .. }) && !self.groups.groups_draggable() {
            return false;
        }
        if !self.groups.item_order().contains(row) {
            return false;
        }
        self.drag.start(row.clone())
    }

    /// Hovers the dragged row over a slot.
    pub fn drag_over(&mut self, target_index: usize) -> bool {
        let items = self.groups.item_order();
        self.drag.over(&items, target_index)
    }

    /// The pointer left the table.
    pub fn drag_leave(&mut self) {
        self.drag.leave();
    }

    /// Abandons the drag.
    pub fn drag_cancel(&mut self) {
        self.drag.cancel();
    }

    /// Drops the dragged row and persists the new position.
    ///
    /// Dropping where the row started makes no call and does not refetch.
    /// Otherwise the moves are issued one by one; the first failure stops
    /// the rest and raises an alert, leaving earlier moves applied and the
    /// list as it was. On success the list is refetched.
    ///
    /// An up move sends the credential to the front of the whole list, so
    /// raising a member of an expanded group also places it ahead of the
    /// credentials of every other type.
    pub async fn drop_dragged(&mut self) {
        let items = self.groups.item_order();
        let Some((source, order)) = self.drag.finish(&items) else {
            return;
        };
        let plan = ReorderPlan::new(&items, &source, &order);
        if plan.is_empty() {
            tracing::debug!(row = ?source, "drop without position change");
            return;
        }

        match self.execute(&plan).await {
            Ok(moves) => {
                tracing::debug!(user = %self.user_id, moves, "credential priority updated");
                self.refresh().await;
                self.alerts.add_alert(AlertKey::MoveCredentialSuccess);
            }
            Err(error) => self.alerts.add_error(AlertKey::MoveCredentialError, &error),
        }
    }

    async fn execute(&self, plan: &ReorderPlan) -> AdminClientResult<usize> {
        plan.execute(self.client.as_ref(), &self.user_id).await
    }

    /// Drags the row shown at `from` onto the slot `to` and drops it.
    pub async fn move_row(&mut self, from: usize, to: usize) -> ConsoleResult<()> {
        let items = self.groups.item_order();
        let row = items
            .get(from)
            .ok_or_else(|| ConsoleError::CredentialNotFound(format!("row {from}")))?
            .clone();
        if !self.drag_start(&row) {
            return Ok(());
        }
        self.drag_over(to);
        self.drop_dragged().await;
        Ok(())
    }

    // === Accessors ===

    fn credential(&self, id: &str) -> Option<&CredentialRepresentation> {
        self.credentials
            .iter()
            .find(|c| c.id.as_deref() == Some(id))
    }

    /// User the panel is for.
    #[must_use]
    pub fn user(&self) -> &UserRepresentation {
        &self.user
    }

    /// Credentials in priority order.
    #[must_use]
    pub fn credentials(&self) -> &[CredentialRepresentation] {
        &self.credentials
    }

    /// Credentials grouped by type.
    #[must_use]
    pub fn groups(&self) -> &CredentialGroups {
        &self.groups
    }

    /// Credential types held by a federation provider.
    #[must_use]
    pub fn federated_types(&self) -> &[String] {
        &self.federated_types
    }

    /// Drag gesture state.
    #[must_use]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Current refresh key.
    #[must_use]
    pub const fn key(&self) -> RefreshKey {
        self.key
    }

    /// Delete confirmation dialog.
    #[must_use]
    pub fn delete_dialog(&self) -> &ConfirmDialog {
        &self.delete_dialog
    }

    /// Label being edited.
    #[must_use]
    pub fn label_edit(&self) -> Option<&LabelEdit> {
        self.label_edit.as_ref()
    }

    /// Open password dialog.
    #[must_use]
    pub fn password_dialog(&self) -> Option<PasswordDialog> {
        self.password_dialog
    }

    /// Whether the credential reset dialog is shown.
    #[must_use]
    pub const fn credential_reset_open(&self) -> bool {
        self.reset_email_open
    }

    /// Raised alerts.
    pub fn alerts_mut(&mut self) -> &mut Alerts {
        &mut self.alerts
    }

    /// Raised alerts.
    #[must_use]
    pub fn alerts(&self) -> &Alerts {
        &self.alerts
    }
}
