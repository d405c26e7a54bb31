//! datebook configuration.
//!
//! Values are layered: built-in defaults, then the optional file at
//! `~/.config/datebook/config.toml`, then `DATEBOOK_*` environment variables.
//! The file is never created implicitly.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{DatebookError, DatebookResult};

static DEFAULT_DATA_FILE: &str = "data.json";
static DEFAULT_ICS_FILE: &str = "dates.ics";
static DEFAULT_LOG_LEVEL: &str = "warn";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_ics_file() -> PathBuf {
    PathBuf::from(DEFAULT_ICS_FILE)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DatebookConfig {
    /// JSON store. Relative paths resolve against the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Where `datebook` (no subcommand) writes the calendar
    #[serde(default = "default_ics_file")]
    pub ics_file: PathBuf,

    /// One of off, error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for DatebookConfig {
    fn default() -> Self {
        DatebookConfig {
            data_file: default_data_file(),
            ics_file: default_ics_file(),
            log_level: default_log_level(),
        }
    }
}

impl DatebookConfig {
    pub fn config_path() -> DatebookResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DatebookError::Config("Could not determine config directory".into()))?
            .join("datebook");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the standard config location and the environment.
    pub fn load() -> DatebookResult<Self> {
        let path = Self::config_path().ok();
        Self::load_from(path.as_deref())
    }

    /// Load with `path` as the config file (skipped if absent or `None`).
    pub fn load_from(path: Option<&Path>) -> DatebookResult<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path.to_path_buf()).required(false));
        }

        builder
            .add_source(Environment::with_prefix("DATEBOOK"))
            .build()
            .map_err(|e| DatebookError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DatebookError::Config(e.to_string()))
    }

    /// The store path with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    /// The calendar output path with `~` expanded.
    pub fn ics_path(&self) -> PathBuf {
        expand_tilde(&self.ics_file)
    }
}

fn expand_tilde(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
