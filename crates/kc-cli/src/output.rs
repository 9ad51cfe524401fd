//! Output formatting utilities.

use colored::Colorize;
use kc_admin_console::{Alert, AlertVariant};
use tabled::{settings::Style, Table, Tabled};

use crate::config::OutputFormat;

/// Prints a success message.
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Prints an error message.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Prints a warning message.
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message);
}

/// Prints an info message.
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Prints the alerts a screen raised.
///
/// Fails with the text of the failure alerts, if any, so the process
/// exits non-zero.
pub fn report(alerts: Vec<Alert>) -> crate::CliResult<()> {
    let mut failures = Vec::new();
    for alert in alerts {
        match alert.variant {
            AlertVariant::Success => success(&alert.message()),
            AlertVariant::Danger => failures.push(alert.message()),
        }
    }
    if failures.is_empty() {
        Ok(())
    } else {
        Err(crate::CliError::Failed(failures.join("; ")))
    }
}

/// Outputs data in the specified format.
pub fn output<T: Tabled + serde::Serialize>(
    data: &[T],
    format: OutputFormat,
) -> crate::CliResult<()> {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                info("No results found.");
            } else {
                let table = Table::new(data).with(Style::rounded()).to_string();
                println!("{table}");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data)?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            for item in data {
                let json = serde_json::to_value(item)?;
                print!("{}", render_yaml(&json, 0));
                println!();
            }
        }
        OutputFormat::Quiet => {}
    }
    Ok(())
}

/// Outputs a single item.
pub fn output_single<T: serde::Serialize>(item: &T, format: OutputFormat) -> crate::CliResult<()> {
    match format {
        OutputFormat::Table | OutputFormat::Yaml => {
            let json = serde_json::to_value(item)?;
            print!("{}", render_yaml(&json, 0));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item)?;
            println!("{json}");
        }
        OutputFormat::Quiet => {}
    }
    Ok(())
}

/// Renders a JSON value as YAML-like text.
fn render_yaml(value: &serde_json::Value, indent: usize) -> String {
    let prefix = "  ".repeat(indent);

    match value {
        serde_json::Value::Array(arr) => arr
            .iter()
            .map(|item| format!("{prefix}- {}", render_yaml(item, indent + 1).trim_start()))
            .collect(),
        serde_json::Value::Object(map) => map
            .iter()
            .map(|(key, val)| {
                if val.is_object() || val.is_array() {
                    format!("{prefix}{key}:\n{}", render_yaml(val, indent + 1))
                } else {
                    format!("{prefix}{key}: {}", render_yaml(val, 0))
                }
            })
            .collect(),
        serde_json::Value::Null => format!("{prefix}null\n"),
        serde_json::Value::Bool(b) => format!("{prefix}{b}\n"),
        serde_json::Value::Number(n) => format!("{prefix}{n}\n"),
        serde_json::Value::String(s) => format!("{prefix}{s}\n"),
    }
}

/// Prompts for confirmation.
pub fn confirm(message: &str) -> crate::CliResult<bool> {
    print!("{message} [y/N]: ");
    std::io::Write::flush(&mut std::io::stdout())?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y") || input.trim().eq_ignore_ascii_case("yes"))
}

/// Prompts for password input (hidden).
pub fn prompt_password(prompt: &str) -> crate::CliResult<String> {
    Ok(rpassword::prompt_password(prompt)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kc_admin_console::{AlertKey, Alerts};
    use serde_json::json;

    #[test]
    fn yaml_nests_objects_and_lists() {
        let value = json!({
            "username": "alice",
            "access": { "manage": true },
            "requiredActions": ["UPDATE_PASSWORD"]
        });

        assert_eq!(
            render_yaml(&value, 0),
            "access:\n  manage: true\nrequiredActions:\n  - UPDATE_PASSWORD\nusername: alice\n"
        );
    }

    #[test]
    fn report_fails_on_danger_alerts() {
        let mut alerts = Alerts::default();
        alerts.add_alert(AlertKey::MoveCredentialSuccess);
        assert!(report(alerts.drain()).is_ok());

        alerts.add_alert(AlertKey::PasswordMismatch);
        let err = report(alerts.drain()).unwrap_err();
        assert!(err.to_string().contains("do not match"));
    }
}
