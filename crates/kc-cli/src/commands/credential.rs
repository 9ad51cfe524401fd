//! Credential management commands.

use kc_admin_client::{CredentialRepresentation, UserRepresentation};
use kc_admin_console::credentials::FederatedCredentialRow;
use kc_admin_console::{RowKey, UserCredentials};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::CredentialCommand;
use crate::config::OutputFormat;
use crate::output::{confirm, info, output, prompt_password, report, warning};

use super::Context;

/// One row of the credential table.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct CredentialDisplay {
    /// Row number, as accepted by `credential move`.
    #[tabled(rename = "Row")]
    pub row: usize,
    /// Credential type, indented for group members.
    #[tabled(rename = "Type")]
    pub credential_type: String,
    /// User label.
    #[tabled(rename = "User label")]
    pub user_label: String,
    /// Creation time.
    #[tabled(rename = "Created")]
    pub created: String,
    /// Credential ID, or the member count of a group.
    #[tabled(rename = "ID")]
    pub id: String,
}

impl CredentialDisplay {
    fn credential(row: usize, credential_type: String, credential: &CredentialRepresentation) -> Self {
        Self {
            row,
            credential_type,
            user_label: credential.user_label.clone().unwrap_or_default(),
            created: credential
                .created_at()
                .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
            id: credential.id.clone().unwrap_or_default(),
        }
    }
}

/// Federated credential for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct FederatedDisplay {
    /// Credential type.
    #[tabled(rename = "Type")]
    pub credential_type: String,
    /// Federation provider.
    #[tabled(rename = "Provided by")]
    pub provided_by: String,
}

impl From<FederatedCredentialRow> for FederatedDisplay {
    fn from(row: FederatedCredentialRow) -> Self {
        Self {
            credential_type: row.credential_type,
            provided_by: row.provided_by.unwrap_or_default(),
        }
    }
}

/// Runs a credential command.
pub async fn run_credential(cmd: CredentialCommand, ctx: &Context) -> crate::CliResult<()> {
    let client = ctx.client()?;
    let open = |user: &str| UserCredentials::new(client.clone(), UserRepresentation::new(user, ""));

    match cmd {
        CredentialCommand::List { user } => {
            let mut panel = open(&user)?;
            panel.mount().await;
            list_credentials(&panel, ctx.output)
        }
        CredentialCommand::Move {
            user,
            from,
            to,
            expand,
        } => {
            let mut panel = open(&user)?;
            panel.mount().await;
            move_credential(&mut panel, from, to, &expand).await
        }
        CredentialCommand::Delete {
            user,
            credential,
            force,
        } => {
            let mut panel = open(&user)?;
            panel.mount().await;
            delete_credential(&mut panel, &credential, force).await
        }
        CredentialCommand::Label {
            user,
            credential,
            label,
        } => {
            let mut panel = open(&user)?;
            panel.mount().await;
            panel.toggle_label_edit(&credential)?;
            panel.set_label_value(label);
            panel.save_label().await;
            report(panel.alerts_mut().drain())
        }
        CredentialCommand::ResetPassword {
            user,
            password,
            temporary,
        } => {
            let mut panel = open(&user)?;
            panel.mount().await;
            reset_password(&mut panel, password, temporary).await
        }
        CredentialCommand::ResetEmail {
            user,
            actions,
            lifespan,
        } => {
            let mut panel = open(&user)?;
            panel.toggle_credential_reset();
            panel.send_credential_reset(actions, lifespan).await;
            report(panel.alerts_mut().drain())
        }
    }
}

/// Rows of the credential table in visual order.
fn table_rows(panel: &UserCredentials) -> Vec<CredentialDisplay> {
    let mut rows = Vec::new();
    for (index, key) in panel.item_order().iter().enumerate() {
        match key {
            RowKey::Group { ids, .. } => {
                let Some(group) = panel
                    .groups()
                    .as_slice()
                    .iter()
                    .find(|g| &g.row_key() == key)
                else {
                    continue;
                };
                match group.credentials.as_slice() {
                    [single] => rows.push(CredentialDisplay::credential(
                        index,
                        group.display_type(),
                        single,
                    )),
                    _ => rows.push(CredentialDisplay {
                        row: index,
                        credential_type: group.display_type(),
                        user_label: String::new(),
                        created: String::new(),
                        id: format!("{} credentials", ids.len()),
                    }),
                }
            }
            RowKey::Credential { id } => {
                if let Some(credential) = panel
                    .credentials()
                    .iter()
                    .find(|c| c.id.as_deref() == Some(id.as_str()))
                {
                    rows.push(CredentialDisplay::credential(
                        index,
                        format!("  {}", credential.type_name()),
                        credential,
                    ));
                }
            }
        }
    }
    rows
}

/// Lists credentials and federated credential types.
fn list_credentials(panel: &UserCredentials, format: OutputFormat) -> crate::CliResult<()> {
    if panel.is_empty_state() && format == OutputFormat::Table {
        info("No credentials. Set one with `kc credential reset-password`.");
        return Ok(());
    }

    let rows = table_rows(panel);
    if !rows.is_empty() || format != OutputFormat::Table {
        output(&rows, format)?;
    }

    let federated: Vec<FederatedDisplay> = panel
        .federated_rows()
        .into_iter()
        .map(FederatedDisplay::from)
        .collect();
    if !federated.is_empty() {
        if format == OutputFormat::Table {
            info("Credentials held by user federation:");
        }
        output(&federated, format)?;
    }
    Ok(())
}

/// Expands the named groups, then moves a row.
async fn move_credential(
    panel: &mut UserCredentials,
    from: usize,
    to: usize,
    expand: &[String],
) -> crate::CliResult<()> {
    for credential_type in expand {
        let index = panel
            .groups()
            .as_slice()
            .iter()
            .position(|g| &g.credential_type == credential_type)
            .ok_or_else(|| crate::CliError::NotFound {
                resource_type: "credential type".to_string(),
                id: credential_type.clone(),
            })?;
        if !panel.toggle_expand(index) {
            warning(&format!("{credential_type} has a single credential and cannot be expanded"));
        }
    }

    let rows = panel.item_order().len();
    if from >= rows || to >= rows {
        return Err(crate::CliError::InvalidArgument(format!(
            "row out of range: the table has {rows} rows"
        )));
    }

    panel.move_row(from, to).await?;
    let alerts = panel.alerts_mut().drain();
    if alerts.is_empty() {
        info("Nothing to move.");
    }
    report(alerts)
}

/// Deletes a credential after confirmation.
async fn delete_credential(
    panel: &mut UserCredentials,
    credential_id: &str,
    force: bool,
) -> crate::CliResult<()> {
    let credential = panel
        .credentials()
        .iter()
        .find(|c| c.id.as_deref() == Some(credential_id))
        .cloned()
        .ok_or_else(|| crate::CliError::NotFound {
            resource_type: "credential".to_string(),
            id: credential_id.to_string(),
        })?;

    panel.toggle_delete(Some(credential));
    if !force && !confirm(&panel.delete_dialog().message)? {
        return Err(crate::CliError::Cancelled);
    }

    panel.confirm_delete_credential().await;
    report(panel.alerts_mut().drain())
}

/// Sets the password, prompting for it twice when not given.
async fn reset_password(
    panel: &mut UserCredentials,
    password: Option<String>,
    temporary: bool,
) -> crate::CliResult<()> {
    panel.open_password_dialog(!panel.show_set_password_button());

    let (password, confirmation) = match password {
        Some(password) => (password.clone(), password),
        None => (
            prompt_password("Password: ")?,
            prompt_password("Password confirmation: ")?,
        ),
    };

    panel.submit_password(&password, &confirmation, temporary).await;
    report(panel.alerts_mut().drain())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_column_formats_epoch_millis() {
        let mut credential = CredentialRepresentation::new("p1", "password");
        credential.created_date = Some(1_700_000_000_000);

        let row = CredentialDisplay::credential(0, "Password".to_string(), &credential);

        assert_eq!(row.created, "2023-11-14 22:13");
        assert_eq!(row.id, "p1");
    }

    #[test]
    fn federated_row_without_link_is_blank() {
        let display = FederatedDisplay::from(FederatedCredentialRow {
            credential_type: "kerberos".to_string(),
            provided_by: None,
            can_set_password: false,
        });
        assert_eq!(display.provided_by, "");
    }
}
