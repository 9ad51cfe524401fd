//! Configuration management commands.

use crate::cli::ConfigCommand;
use crate::config::{AuthConfig, OutputFormat};
use crate::output::{info, success};
use crate::CliConfig;

/// Runs a config command.
pub fn run_config(cmd: ConfigCommand, config: &mut CliConfig) -> crate::CliResult<()> {
    match cmd {
        ConfigCommand::Show => show_config(config),
        ConfigCommand::Set { key, value } => {
            set_value(config, &key, &value)?;
            config.save()?;
            success(&format!("Set {key} = {}", display_value(&key, &value)));
            Ok(())
        }
        ConfigCommand::Init => init_config(config),
    }
}

/// Shows the current configuration.
fn show_config(config: &CliConfig) -> crate::CliResult<()> {
    let config_path = CliConfig::config_path()?;

    info(&format!("Configuration file: {}", config_path.display()));
    println!();
    println!("server_url: {}", config.server_url);

    if let Some(realm) = &config.default_realm {
        println!("default_realm: {realm}");
    }

    println!("output_format: {:?}", config.output_format);

    if let Some(token) = config.auth.as_ref().and_then(|a| a.access_token.as_deref()) {
        println!("access_token: {}", mask_token(token));
    }

    Ok(())
}

/// Applies one `key = value` setting.
fn set_value(config: &mut CliConfig, key: &str, value: &str) -> crate::CliResult<()> {
    let unset = value.is_empty() || value == "none";
    match key {
        "server_url" | "server" => {
            config.server_url = value.trim_end_matches('/').to_string();
        }
        "default_realm" | "realm" => {
            config.default_realm = (!unset).then(|| value.to_string());
        }
        "output_format" | "output" => {
            config.output_format = value.parse()?;
        }
        "access_token" | "token" => {
            config.auth = (!unset).then(|| AuthConfig {
                access_token: Some(value.to_string()),
            });
        }
        _ => {
            return Err(crate::CliError::InvalidArgument(format!(
                "Unknown configuration key: {key}. Known keys: server_url, default_realm, output_format, access_token"
            )));
        }
    }
    Ok(())
}

fn display_value(key: &str, value: &str) -> String {
    if matches!(key, "access_token" | "token") {
        mask_token(value)
    } else {
        value.to_string()
    }
}

/// Initializes configuration interactively.
fn init_config(config: &mut CliConfig) -> crate::CliResult<()> {
    let config_path = CliConfig::config_path()?;

    info("Initializing Keycloak CLI configuration...");
    println!();

    if let Some(server) = ask(&format!("Server URL [{}]: ", config.server_url))? {
        set_value(config, "server_url", &server)?;
    }

    let current_realm = config.default_realm.as_deref().unwrap_or("(none)");
    if let Some(realm) = ask(&format!("Default realm [{current_realm}]: "))? {
        if realm != "(none)" {
            set_value(config, "default_realm", &realm)?;
        }
    }

    if let Some(format) = ask(&format!(
        "Output format (table/json/yaml/quiet) [{:?}]: ",
        config.output_format
    ))? {
        config.output_format = format.parse().unwrap_or(OutputFormat::Table);
    }

    config.save()?;

    println!();
    success(&format!("Configuration saved to: {}", config_path.display()));
    Ok(())
}

/// Prints a prompt and reads one line; blank input keeps the default.
fn ask(prompt: &str) -> crate::CliResult<Option<String>> {
    print!("{prompt}");
    std::io::Write::flush(&mut std::io::stdout())?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    let trimmed = input.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

/// Keeps the first few characters of a token.
fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    format!("{visible}****")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_known_keys() {
        let mut config = CliConfig::default();

        set_value(&mut config, "server", "https://kc.example/").unwrap();
        set_value(&mut config, "realm", "acme").unwrap();
        set_value(&mut config, "output", "yaml").unwrap();
        set_value(&mut config, "token", "abcdef").unwrap();

        assert_eq!(config.server_url, "https://kc.example");
        assert_eq!(config.default_realm.as_deref(), Some("acme"));
        assert_eq!(config.output_format, OutputFormat::Yaml);
        assert_eq!(config.effective_token(None).as_deref(), Some("abcdef"));

        set_value(&mut config, "realm", "none").unwrap();
        set_value(&mut config, "token", "").unwrap();
        assert!(config.default_realm.is_none());
        assert!(config.auth.is_none());
    }

    #[test]
    fn unknown_key_and_bad_format_are_rejected() {
        let mut config = CliConfig::default();
        assert!(set_value(&mut config, "database_url", "x").is_err());
        assert!(set_value(&mut config, "output", "xml").is_err());
    }

    #[test]
    fn tokens_are_masked() {
        assert_eq!(mask_token("eyJhbGciOi"), "eyJh****");
        assert_eq!(display_value("token", "abcdef"), "abcd****");
        assert_eq!(display_value("realm", "acme"), "acme");
    }
}
