//! Configuration management for CLI tools.
//!
//! Configuration is stored in ~/.vectorhub/{app_name}/config.yaml

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default base configuration directory name.
pub const DEFAULT_BASE_DIR: &str = ".vectorhub";
/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
/// Default model directory name, relative to the app directory.
pub const DEFAULT_MODEL_DIR: &str = "models";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Application name (not serialized).
    #[serde(skip)]
    pub app_name: String,

    /// Model used when none is given on the command line.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_model: String,

    /// Directory holding exported models, one subdirectory per model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_dir: Option<PathBuf>,

    /// Path to the config file (not serialized).
    #[serde(skip)]
    config_path: PathBuf,
}

impl Config {
    /// Gets the default config directory.
    pub fn default_config_dir(app_name: &str) -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_BASE_DIR).join(app_name))
    }

    /// Gets the default config file path.
    pub fn default_config_path(app_name: &str) -> Option<PathBuf> {
        Self::default_config_dir(app_name).map(|dir| dir.join(DEFAULT_CONFIG_FILE))
    }

    /// Returns the config file path.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the configured model directory, falling back to
    /// `models/` next to the config file.
    pub fn resolve_model_dir(&self) -> PathBuf {
        match &self.model_dir {
            Some(dir) => dir.clone(),
            None => self
                .config_path
                .parent()
                .map(|p| p.join(DEFAULT_MODEL_DIR))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_DIR)),
        }
    }

    /// Returns `name` if given and non-empty, else the default model.
    pub fn resolve_model<'a>(&'a self, name: Option<&'a str>) -> Option<&'a str> {
        match name {
            Some(n) if !n.is_empty() => Some(n),
            _ if !self.default_model.is_empty() => Some(self.default_model.as_str()),
            _ => None,
        }
    }

    /// Sets the default model and saves.
    pub fn set_default_model(&mut self, name: &str) -> anyhow::Result<()> {
        self.default_model = name.to_string();
        self.save()
    }

    /// Sets the model directory and saves.
    pub fn set_model_dir(&mut self, dir: impl Into<PathBuf>) -> anyhow::Result<()> {
        self.model_dir = Some(dir.into());
        self.save()
    }

    /// Saves the configuration to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&self.config_path, content)?;
        Ok(())
    }
}

/// Loads configuration for the specified app, creating an empty file when
/// none exists yet.
pub fn load_config(app_name: &str, custom_path: Option<&str>) -> anyhow::Result<Config> {
    let config_path = match custom_path {
        Some(p) => PathBuf::from(p),
        None => Config::default_config_path(app_name)
            .ok_or_else(|| anyhow::anyhow!("cannot determine config path"))?,
    };

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut cfg = if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        serde_yaml::from_str::<Option<Config>>(&content)?.unwrap_or_default()
    } else {
        let cfg = Config::default();
        let content = serde_yaml::to_string(&cfg)?;
        std::fs::write(&config_path, content)?;
        cfg
    };

    cfg.app_name = app_name.to_string();
    cfg.config_path = config_path;

    Ok(cfg)
}
