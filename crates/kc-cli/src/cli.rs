//! CLI argument parsing.

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

/// Keycloak CLI - user and credential management over the Admin API.
#[derive(Debug, Parser)]
#[command(name = "kc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Server URL (overrides config).
    #[arg(short, long, env = "KC_SERVER_URL")]
    pub server: Option<String>,

    /// Realm to operate on (overrides config).
    #[arg(short, long, env = "KC_REALM")]
    pub realm: Option<String>,

    /// Bearer token for the Admin API (overrides config).
    #[arg(long, env = "KC_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// User table commands.
    #[command(subcommand)]
    User(UserCommand),

    /// Credential commands for one user.
    #[command(subcommand)]
    Credential(CredentialCommand),

    /// Configuration management.
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Realm and user storage status.
    Status,
}

/// User commands.
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List users in a realm.
    List {
        /// Free-text search.
        #[arg(long)]
        search: Option<String>,

        /// Attribute filter as `name=value` (repeatable).
        #[arg(long = "attr", value_name = "NAME=VALUE")]
        attributes: Vec<String>,

        /// Page number, starting at 0.
        #[arg(long, default_value = "0")]
        page: usize,

        /// Rows per page.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Delete users.
    Delete {
        /// User IDs.
        #[arg(required = true)]
        ids: Vec<String>,

        /// Skip confirmation.
        #[arg(long)]
        force: bool,
    },

    /// Clear every temporary brute-force lockout in the realm.
    UnlockAll {
        /// Skip confirmation.
        #[arg(long)]
        force: bool,
    },
}

/// Credential commands.
#[derive(Debug, Subcommand)]
pub enum CredentialCommand {
    /// List a user's credentials in priority order.
    List {
        /// User ID.
        user: String,
    },

    /// Move a row of the credential table to another position.
    ///
    /// Positions are row numbers as shown by `list`. Groups named with
    /// `--expand` show their members as separate rows.
    Move {
        /// User ID.
        user: String,

        /// Current row.
        from: usize,

        /// Target row.
        to: usize,

        /// Credential type whose group is expanded (repeatable).
        #[arg(long)]
        expand: Vec<String>,
    },

    /// Delete a credential.
    Delete {
        /// User ID.
        user: String,

        /// Credential ID.
        credential: String,

        /// Skip confirmation.
        #[arg(long)]
        force: bool,
    },

    /// Change a credential's user label.
    Label {
        /// User ID.
        user: String,

        /// Credential ID.
        credential: String,

        /// New label.
        label: String,
    },

    /// Set or reset the user's password.
    ResetPassword {
        /// User ID.
        user: String,

        /// New password (will prompt if not provided).
        #[arg(long)]
        password: Option<String>,

        /// Require a change on next login.
        #[arg(long)]
        temporary: bool,
    },

    /// E-mail the user a link to update credentials.
    ResetEmail {
        /// User ID.
        user: String,

        /// Required action (repeatable, default UPDATE_PASSWORD).
        #[arg(long = "action")]
        actions: Vec<String>,

        /// Link validity in seconds.
        #[arg(long)]
        lifespan: Option<u64>,
    },
}

/// Config commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Initialize configuration interactively.
    Init,
}
