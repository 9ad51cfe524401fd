//! Command implementations.

pub mod config;
pub mod credential;
pub mod status;
pub mod user;

pub use config::run_config;
pub use credential::run_credential;
pub use status::run_status;
pub use user::run_user;

use std::sync::Arc;

use kc_admin_client::HttpAdminClient;

use crate::config::OutputFormat;
use crate::CliConfig;

/// Connection settings resolved from flags, environment and config.
#[derive(Debug, Clone)]
pub struct Context {
    /// Server URL.
    pub server_url: String,
    /// Realm to operate on.
    pub realm: Option<String>,
    /// Bearer token.
    pub token: Option<String>,
    /// Output format.
    pub output: OutputFormat,
}

impl Context {
    /// Resolves settings: flags and environment first, then the config file.
    pub fn resolve(
        config: &CliConfig,
        server: Option<&str>,
        realm: Option<&str>,
        token: Option<&str>,
        output: Option<OutputFormat>,
    ) -> Self {
        Self {
            server_url: server
                .map(str::to_string)
                .unwrap_or_else(|| config.server_url.clone()),
            realm: config.effective_realm(realm),
            token: config.effective_token(token),
            output: output.unwrap_or(config.output_format),
        }
    }

    /// Realm, which every admin command needs.
    pub fn realm(&self) -> crate::CliResult<&str> {
        self.realm
            .as_deref()
            .ok_or_else(|| crate::CliError::InvalidArgument("realm is required".to_string()))
    }

    /// Builds the Admin API client for the realm.
    pub fn client(&self) -> crate::CliResult<Arc<HttpAdminClient>> {
        let mut client = HttpAdminClient::new(&self.server_url, self.realm()?)?;
        match &self.token {
            Some(token) => client = client.with_token(token),
            None => tracing::warn!("no access token configured, requests are unauthenticated"),
        }
        Ok(Arc::new(client))
    }
}
