use crate::{CONFIG_DIRECTORY, CONFIG_FILE, ui_state::ThemeImport};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;
const DEFAULT_MAX_PREVIEW_MB: u64 = 32;

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub log_level: String,
    pub fetch_timeout_secs: u64,
    pub max_preview_mb: u64,
    pub theme: ThemeImport,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            max_preview_mb: DEFAULT_MAX_PREVIEW_MB,
            theme: ThemeImport::default(),
        }
    }
}

impl Config {
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIRECTORY).join(CONFIG_FILE))
    }

    /// Read the user's config file. A missing file is not an error.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_str = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Could not read config file: {}", path.as_ref().display()))?;
        Self::from_toml_str(&file_str)
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str::<Config>(s)?)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs.max(1))
    }

    pub fn max_preview_bytes(&self) -> u64 {
        self.max_preview_mb.max(1) * 1024 * 1024
    }
}
