//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees [`DemoSettings`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `PATTERNKIT__DEMO__DRINK_AMOUNT=250`
//! 3. Config file (`--config FILE`, or [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use patternkit_core::application::DemoSettings;
use serde::{Deserialize, Serialize};
use tracing::debug;

const ENV_PREFIX: &str = "PATTERNKIT";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Knobs for the scripted demos.
    pub demo: DemoConfig,
    /// Where the journal command saves to.
    pub journal: JournalConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Millilitres poured when no `--amount` is given.
    pub drink_amount: u32,
    /// Favourite channel of the Hitachi remote.
    pub channel: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    pub path: PathBuf,
    pub overwrite: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Default `list` format: table, list, json or csv.
    pub format: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let settings = DemoSettings::default();
        Self {
            drink_amount: settings.drink_amount,
            channel: settings.favourite_channel,
        }
    }
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("journal.txt"),
            overwrite: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "table".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// A file passed with `--config` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(config_file, config_file.is_some())
    }

    /// Like [`Self::load`], with the caller deciding whether a missing file
    /// is an error.
    pub fn load_from(config_file: Option<&PathBuf>, required: bool) -> anyhow::Result<Self> {
        let path = Self::resolve_path(config_file);
        debug!(path = %path.display(), required, "Loading configuration");

        let defaults =
            Config::try_from(&Self::default()).context("Failed to seed config defaults")?;

        let config = Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path.clone())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from '{}'", path.display()))?;

        config
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.patternkit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "patternkit", "patternkit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".patternkit.toml"))
    }

    /// The `--config` file if one was given, else [`Self::config_path`].
    pub fn resolve_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }

    /// Settings handed to the demo service.
    pub fn demo_settings(&self) -> DemoSettings {
        DemoSettings {
            drink_amount: self.demo.drink_amount,
            favourite_channel: self.demo.channel,
        }
    }

    /// Serialise as pretty TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Default values as a TOML table, used to validate `config set` keys.
    pub fn default_table() -> anyhow::Result<toml::Table> {
        let text = toml::to_string(&Self::default())?;
        Ok(toml::from_str(&text)?)
    }
}
