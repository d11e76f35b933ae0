//! `fragment config`: read and write configuration values.

use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&display_value(&value))?;
        }

        ConfigCommands::Set { key, value } => {
            // Reject typos before touching the file.
            get_config_value(&config, &key)?;
            let path = config.active_path();
            set_config_value(&path, &key, &value)?;
            info!(%key, path = %path.display(), "Configuration updated");
            output.success(&format!("{key} = {value}  ({})", path.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&config.active_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `defaults.style`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<Value> {
    let root = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    key.split('.')
        .try_fold(&root, |node, part| node.get(part))
        .filter(|_| key.contains('.'))
        .cloned()
        .ok_or_else(|| CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        })
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

/// `true`/`false` become booleans, comma lists become arrays for list
/// keys; everything else is stored as a string.
fn parse_value(key: &str, raw: &str) -> toml::Value {
    match raw {
        "true" => toml::Value::Boolean(true),
        "false" => toml::Value::Boolean(false),
        _ if key == "workspace.ignore" => toml::Value::Array(
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| toml::Value::String(s.to_string()))
                .collect(),
        ),
        _ => toml::Value::String(raw.to_string()),
    }
}

/// Update one key in the TOML file at `path`, creating it if needed.
fn set_config_value(path: &Path, key: &str, raw: &str) -> CliResult<()> {
    let mut doc = if path.exists() {
        let text = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
        toml::from_str::<toml::Table>(&text).map_err(|e| CliError::ConfigError {
            message: format!("Failed to parse '{}': {e}", path.display()),
            source: Some(Box::new(e)),
        })?
    } else {
        toml::Table::new()
    };

    let Some((section, field)) = key.split_once('.') else {
        return Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        });
    };
    let table = doc
        .entry(section)
        .or_insert(toml::Value::Table(toml::Table::new()));
    let Some(table) = table.as_table_mut() else {
        return Err(CliError::ConfigError {
            message: format!("'{section}' is not a table in '{}'", path.display()),
            source: None,
        });
    };
    table.insert(field.to_string(), parse_value(key, raw));

    let text = toml::to_string_pretty(&doc).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;
    toml::from_str::<AppConfig>(&text).map_err(|e| CliError::ConfigError {
        message: format!("Invalid value for '{key}': {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, text).with_cli_context(|| format!("Failed to write '{}'", path.display()))
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        let value = get_config_value(&cfg, "defaults.style").unwrap();
        assert_eq!(display_value(&value), "css");
    }

    #[test]
    fn get_unset_optional_is_empty() {
        let cfg = AppConfig::default();
        let value = get_config_value(&cfg, "defaults.project").unwrap();
        assert_eq!(display_value(&value), "");
    }

    #[test]
    fn get_unknown_or_section_key_is_error() {
        let cfg = AppConfig::default();
        for key in ["does.not.exist", "defaults", "defaults.colour"] {
            assert!(
                matches!(
                    get_config_value(&cfg, key),
                    Err(CliError::ConfigError { .. })
                ),
                "{key}"
            );
        }
    }

    #[test]
    fn set_creates_and_updates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        set_config_value(&path, "defaults.style", "scss").unwrap();
        set_config_value(&path, "defaults.js", "true").unwrap();
        set_config_value(&path, "workspace.ignore", "node_modules, build").unwrap();

        let cfg = AppConfig::load_from(Some((&path, true)), false).unwrap();
        assert_eq!(cfg.defaults.style, "scss");
        assert!(cfg.defaults.js);
        assert_eq!(cfg.workspace.ignore, vec!["node_modules", "build"]);
    }

    #[test]
    fn set_rejects_wrong_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(set_config_value(&path, "defaults.js", "maybe").is_err());
        assert!(!path.exists());
    }
}
