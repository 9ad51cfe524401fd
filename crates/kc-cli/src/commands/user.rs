//! User management commands.

use kc_admin_console::users::row::empty_formatter;
use kc_admin_console::users::{BruteUser, Page};
use kc_admin_console::{EmptyState, UserDataTable};
use kc_admin_client::UserRepresentation;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::UserCommand;
use crate::config::OutputFormat;
use crate::output::{confirm, info, output, report};

use super::Context;

/// User representation for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct UserDisplay {
    /// User ID.
    #[tabled(rename = "ID")]
    pub id: String,
    /// Username.
    #[tabled(rename = "Username")]
    pub username: String,
    /// Email, marked when not verified.
    #[tabled(rename = "Email")]
    pub email: String,
    /// Last name.
    #[tabled(rename = "Last name")]
    pub last_name: String,
    /// First name.
    #[tabled(rename = "First name")]
    pub first_name: String,
    /// Disabled / temporarily locked.
    #[tabled(rename = "Status")]
    pub status: String,
}

impl From<&BruteUser> for UserDisplay {
    fn from(row: &BruteUser) -> Self {
        let email = row.email_cell();
        Self {
            id: row.user.id.clone().unwrap_or_default(),
            username: row.user.username.clone(),
            email: if email.not_verified && row.user.email.is_some() {
                format!("{} (not verified)", email.text)
            } else {
                email.text
            },
            last_name: empty_formatter(row.user.last_name.as_deref()),
            first_name: empty_formatter(row.user.first_name.as_deref()),
            status: row.status_text(),
        }
    }
}

/// Runs a user command.
pub async fn run_user(cmd: UserCommand, ctx: &Context) -> crate::CliResult<()> {
    let mut table = UserDataTable::new(ctx.client()?);
    table.mount().await;

    match cmd {
        UserCommand::List {
            search,
            attributes,
            page,
            max,
        } => list_users(&mut table, search, &attributes, page, max, ctx.output).await,
        UserCommand::Delete { ids, force } => delete_users(&mut table, ids, force).await,
        UserCommand::UnlockAll { force } => unlock_all(&mut table, force).await,
    }
}

/// Splits `name=value`.
fn parse_attribute(raw: &str) -> crate::CliResult<(&str, &str)> {
    raw.split_once('=')
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| {
            crate::CliError::InvalidArgument(format!("attribute filter must be NAME=VALUE: {raw}"))
        })
}

/// Lists one page of users.
async fn list_users(
    table: &mut UserDataTable,
    search: Option<String>,
    attributes: &[String],
    page: usize,
    max: usize,
    format: OutputFormat,
) -> crate::CliResult<()> {
    if let Some(search) = search {
        table.set_search_user(search);
    }
    for raw in attributes {
        let (name, value) = parse_attribute(raw)?;
        table.add_filter(name, value);
    }
    table.apply_attribute_filters();
    table.set_page(Page {
        first: page.saturating_mul(max),
        max,
    });
    table.fetch_page().await;

    report(table.alerts_mut().drain())?;

    if table.rows().is_empty() && format == OutputFormat::Table {
        match table.empty_state() {
            EmptyState::SearchPrompt => {
                info("Users are stored in a federation provider; pass --search or --attr to look them up.");
            }
            EmptyState::NoUsersFound { create } => {
                info(&format!("No users found. Create one at {create}."));
            }
        }
        return Ok(());
    }

    let rows: Vec<UserDisplay> = table.rows().iter().map(UserDisplay::from).collect();
    output(&rows, format)?;

    if table.has_next_page() && format == OutputFormat::Table {
        info(&format!("More users available: --page {}", page.saturating_add(1)));
    }
    Ok(())
}

/// Deletes the given users after confirmation.
async fn delete_users(
    table: &mut UserDataTable,
    ids: Vec<String>,
    force: bool,
) -> crate::CliResult<()> {
    table.select_rows(
        ids.into_iter()
            .map(|id| UserRepresentation::new(id, String::new()))
            .collect(),
    );
    table.toggle_delete_dialog();

    if !force && !confirm(&table.delete_dialog().message)? {
        return Err(crate::CliError::Cancelled);
    }

    table.confirm_delete().await;
    report(table.alerts_mut().drain())
}

/// Clears all brute-force lockouts.
async fn unlock_all(table: &mut UserDataTable, force: bool) -> crate::CliResult<()> {
    table.toggle_unlock_dialog();

    if !force && !confirm("Unlock all temporarily locked users?")? {
        return Err(crate::CliError::Cancelled);
    }

    table.confirm_unlock().await;
    report(table.alerts_mut().drain())
}
