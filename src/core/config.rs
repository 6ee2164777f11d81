//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::store::DEFAULT_STORE_FILE;

/// Local config file name, looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = ".clubreg.yaml";

/// clubreg configuration with layered hierarchy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Snapshot file path
    pub store: Option<PathBuf>,

    /// Treat an unreadable snapshot as a hard error instead of starting empty
    pub strict_load: Option<bool>,

    /// Default output format
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let local = std::env::current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_FILE));

        let mut config = Self::from_files(Self::global_config_path().as_deref(), local.as_deref());
        config.apply_env();
        config
    }

    /// Merge the global and local config files (local takes precedence)
    pub fn from_files(global: Option<&Path>, local: Option<&Path>) -> Self {
        // 1. Built-in defaults (already in Default impl)
        let mut config = Config::default();

        // 2. Global user config (~/.config/clubreg/config.yaml)
        if let Some(global) = global.and_then(Self::read_file) {
            config.merge(global);
        }

        // 3. Working-directory config (.clubreg.yaml)
        if let Some(local) = local.and_then(Self::read_file) {
            config.merge(local);
        }

        config
    }

    /// 4. Environment variables
    fn apply_env(&mut self) {
        if let Ok(store) = std::env::var("CLUBREG_STORE") {
            if !store.is_empty() {
                self.store = Some(PathBuf::from(store));
            }
        }
        if let Ok(strict) = std::env::var("CLUBREG_STRICT_LOAD") {
            self.strict_load = Some(matches!(
                strict.to_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            ));
        }
    }

    fn read_file(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        let contents = std::fs::read_to_string(path).ok()?;
        match serde_yml::from_str::<Config>(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config file");
                None
            }
        }
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "clubreg")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.store.is_some() {
            self.store = other.store;
        }
        if other.strict_load.is_some() {
            self.strict_load = other.strict_load;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }

    /// Snapshot path, falling back to the fixed default
    pub fn store_path(&self) -> PathBuf {
        self.store
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
    }

    /// Whether an unreadable snapshot should abort
    pub fn strict_load(&self) -> bool {
        self.strict_load.unwrap_or(false)
    }
}
