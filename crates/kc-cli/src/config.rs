//! CLI configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration, stored in `~/.keycloak/kc.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Server URL (e.g., http://localhost:8080).
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Default realm to operate on.
    pub default_realm: Option<String>,

    /// Output format.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Authentication configuration.
    pub auth: Option<AuthConfig>,
}

/// Default server URL.
fn default_server_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            default_realm: None,
            output_format: OutputFormat::default(),
            auth: None,
        }
    }
}

impl CliConfig {
    /// Loads configuration from the default file.
    pub fn load() -> crate::CliResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> crate::CliResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| crate::CliError::Config(format!("failed to parse config: {e}")))
    }

    /// Saves configuration to the default file.
    pub fn save(&self) -> crate::CliResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves configuration to `path`, creating its directory.
    pub fn save_to(&self, path: &Path) -> crate::CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            crate::CliError::Config(format!("failed to serialize config: {e}"))
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Gets the configuration file path.
    pub fn config_path() -> crate::CliResult<PathBuf> {
        let home = dirs_next::home_dir()
            .ok_or_else(|| crate::CliError::Config("could not determine home directory".to_string()))?;
        Ok(home.join(".keycloak").join("kc.toml"))
    }

    /// Gets the effective realm (from args or config).
    pub fn effective_realm(&self, arg_realm: Option<&str>) -> Option<String> {
        arg_realm
            .map(str::to_string)
            .or_else(|| self.default_realm.clone())
    }

    /// Gets the effective access token (from args or config).
    pub fn effective_token(&self, arg_token: Option<&str>) -> Option<String> {
        arg_token
            .map(str::to_string)
            .or_else(|| self.auth.as_ref().and_then(|a| a.access_token.clone()))
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
    /// Quiet (minimal output).
    Quiet,
}

impl std::str::FromStr for OutputFormat {
    type Err = crate::CliError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            "quiet" => Ok(Self::Quiet),
            _ => Err(crate::CliError::InvalidArgument(format!(
                "Unknown output format: {value}. Supported: table, json, yaml, quiet"
            ))),
        }
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Bearer token sent to the Admin API.
    pub access_token: Option<String>,
}
