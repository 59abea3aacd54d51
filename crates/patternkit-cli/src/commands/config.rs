//! `patternkit config` - read and write configuration values.
//!
//! Keys are dotted paths into the TOML file, e.g. `demo.drink_amount`.
//! Only keys that exist in the built-in defaults are accepted, and `set`
//! parses the value with the type of the default.

use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::info;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Set { key, value } => {
            let path = AppConfig::resolve_path(config_file.as_ref());
            let stored = set_config_value(&path, &key, &value)?;
            info!(%key, path = %path.display(), "Configuration updated");
            output.success(&format!("{key} = {stored}  ({})", path.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised = config.to_toml().map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise config: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.print(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            output.print(
                &AppConfig::resolve_path(config_file.as_ref())
                    .display()
                    .to_string(),
            )?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    }
}

fn to_table(config: &AppConfig) -> CliResult<Table> {
    let text = config.to_toml().map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;
    parse_table(&text)
}

fn parse_table(text: &str) -> CliResult<Table> {
    toml::from_str(text).map_err(|e| CliError::ConfigError {
        message: format!("Config file is not valid TOML: {e}"),
        source: Some(Box::new(e)),
    })
}

fn lookup<'a>(table: &'a Table, key: &str) -> Option<&'a Value> {
    let (section, field) = key.split_once('.')?;
    table.get(section)?.as_table()?.get(field)
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let table = to_table(config)?;
    match lookup(&table, key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Ok(other.to_string()),
        None => Err(unknown_key(key)),
    }
}

/// Parse `raw` with the same TOML type as `default`.
fn parse_like(default: &Value, key: &str, raw: &str) -> CliResult<Value> {
    let invalid = |expected: &str| CliError::InvalidInput {
        message: format!("'{raw}' is not a valid {expected} for {key}"),
        source: None,
    };
    match default {
        Value::Integer(_) => raw
            .trim()
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| invalid("integer")),
        Value::Boolean(_) => raw
            .trim()
            .parse::<bool>()
            .map(Value::Boolean)
            .map_err(|_| invalid("boolean")),
        _ => Ok(Value::String(raw.to_string())),
    }
}

/// Update `key` in the file at `path`, creating the file if needed.
///
/// Returns the value as stored.
fn set_config_value(path: &Path, key: &str, raw: &str) -> CliResult<Value> {
    let defaults = AppConfig::default_table().map_err(|e| CliError::ConfigError {
        message: format!("Failed to build default config: {e}"),
        source: Some(e.into()),
    })?;
    let default = lookup(&defaults, key).ok_or_else(|| unknown_key(key))?;
    let value = parse_like(default, key, raw)?;

    let mut table = if path.exists() {
        let text = std::fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
        parse_table(&text)?
    } else {
        Table::new()
    };

    let (section, field) = key.split_once('.').ok_or_else(|| unknown_key(key))?;
    let section = table
        .entry(section.to_string())
        .or_insert(Value::Table(Table::new()));
    let Value::Table(section) = section else {
        return Err(CliError::ConfigError {
            message: format!("'{}' in {} is not a table", key, path.display()),
            source: None,
        });
    };
    section.insert(field.to_string(), value.clone());

    // Range and type checks, e.g. a negative drink amount.
    let _checked: AppConfig = Value::Table(table.clone()).try_into().map_err(|e| {
        CliError::InvalidInput {
            message: format!("{key} = {raw} is out of range: {e}"),
            source: Some(Box::new(e)),
        }
    })?;

    let text = toml::to_string_pretty(&table).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, text)
        .with_cli_context(|| format!("Failed to write '{}'", path.display()))?;

    Ok(value)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "demo.drink_amount").unwrap(), "12");
        assert_eq!(get_config_value(&cfg, "demo.channel").unwrap(), "7");
        assert_eq!(get_config_value(&cfg, "output.format").unwrap(), "table");
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        for key in ["does.not.exist", "demo", "demo.flavour"] {
            assert!(matches!(
                get_config_value(&cfg, key),
                Err(CliError::ConfigError { .. })
            ));
        }
    }

    #[test]
    fn set_creates_file_and_keeps_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        set_config_value(&path, "demo.drink_amount", "250").unwrap();
        set_config_value(&path, "journal.overwrite", "true").unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.demo.drink_amount, 250);
        assert!(loaded.journal.overwrite);
        assert_eq!(loaded.demo.channel, 7);
    }

    #[test]
    fn set_preserves_other_keys_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

        set_config_value(&path, "demo.channel", "9").unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.output.format, "json");
        assert_eq!(loaded.demo.channel, 9);
    }

    #[test]
    fn set_rejects_bad_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        assert!(matches!(
            set_config_value(&path, "demo.channel", "nine"),
            Err(CliError::InvalidInput { .. })
        ));
        assert!(matches!(
            set_config_value(&path, "demo.drink_amount", "-5"),
            Err(CliError::InvalidInput { .. })
        ));
        assert!(matches!(
            set_config_value(&path, "demo.flavour", "x"),
            Err(CliError::ConfigError { .. })
        ));
        assert!(!path.exists());
    }
}
