//! # Keycloak CLI
//!
//! Command-line tools for Keycloak user and credential management.

#![forbid(unsafe_code)]

use clap::Parser;
use kc_cli::{
    cli::{Cli, Command},
    commands::{run_config, run_credential, run_status, run_user, Context},
    config::CliConfig,
    output::error,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = match CliConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error(&format!("Failed to load configuration: {e}"));
            std::process::exit(1);
        }
    };

    let ctx = Context::resolve(
        &config,
        cli.server.as_deref(),
        cli.realm.as_deref(),
        cli.token.as_deref(),
        cli.output,
    );
    tracing::debug!(server = %ctx.server_url, realm = ?ctx.realm, "resolved connection settings");

    let result = match cli.command {
        Command::User(cmd) => run_user(cmd, &ctx).await,
        Command::Credential(cmd) => run_credential(cmd, &ctx).await,
        Command::Config(cmd) => run_config(cmd, &mut config),
        Command::Status => run_status(&ctx).await,
    };

    if let Err(e) = result {
        error(&e.to_string());
        std::process::exit(1);
    }
}
