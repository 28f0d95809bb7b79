use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
pub use listo_core::SortMode;
use listo_store::{DEFAULT_KEY, FileStore};
use serde::Deserialize;

const APP_DIR: &str = "listo";
const CONFIG_FILE: &str = "listo.toml";

/// Top-level configuration loaded from `<config dir>/listo/listo.toml`.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ListoConfig {
    /// `[storage]` section.
    #[serde(default)]
    pub storage: StorageConfig,
    /// `[display]` section.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl ListoConfig {
    /// Load configuration from the platform config directory.
    ///
    /// # Errors
    /// Fails when the config directory cannot be resolved or the file is invalid.
    pub fn load() -> Result<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| anyhow!("failed to resolve the platform config directory"))?
            .join(APP_DIR);
        Self::from_dir(dir)
    }

    /// Load `listo.toml` from `dir`, falling back to defaults when it does not exist.
    ///
    /// # Errors
    /// Fails when the file exists but cannot be read, parsed or validated.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let config_path = dir.as_ref().join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::from_path(&config_path)
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    /// Fails when the file cannot be read, parsed or validated.
    pub fn from_path(config_path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.storage.ensure_valid_key()
    }
}

/// Where the collection blob lives.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    data_dir: PathBuf,
    #[serde(default = "default_key")]
    key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            key: default_key(),
        }
    }
}

impl StorageConfig {
    /// Storage rooted at `data_dir` under the default key.
    #[must_use]
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            key: default_key(),
        }
    }

    /// Directory holding the data file.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Key the collection is stored under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    fn ensure_valid_key(&self) -> Result<()> {
        FileStore::open(&self.data_dir)
            .path_for(&self.key)
            .map(drop)
            .with_context(|| format!("storage key '{}' cannot be used as a file name", self.key))
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from(".local/share"))
        .join(APP_DIR)
}

fn default_key() -> String {
    DEFAULT_KEY.to_owned()
}

/// How list items are presented.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Tie-break for active items: `newest` or `manual`.
    #[serde(default)]
    pub sort: SortMode,
}
