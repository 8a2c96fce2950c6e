//! User configuration loaded from `config.toml`.

use crate::calculator::{DEFAULT_HISTORY_LIMIT, DEFAULT_TIMESTAMP_FORMAT};
use anyhow::{Context, Result, bail};
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Calculator configuration. Every field is optional in the file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// How many history entries are shown.
    pub history_limit: usize,
    /// strftime pattern for history timestamps.
    pub timestamp_format: String,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Default location: `<config dir>/zcalc/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
    }

    /// Load from `path`, falling back to defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read config {}", path.display()));
            }
        };

        Self::parse(&contents).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Load from an explicit path, or the default location if none is given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.history_limit == 0 {
            bail!("history_limit must be at least 1");
        }
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            bail!("timestamp_format {:?} is not a valid strftime pattern", self.timestamp_format);
        }
        Ok(())
    }
}
