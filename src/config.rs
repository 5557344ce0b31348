use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::week::Convention;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_convention")]
    pub convention: Convention,
    #[serde(default)]
    pub json: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            convention: default_convention(),
            json: false,
        }
    }
}

fn default_convention() -> Convention {
    Convention::Cdc
}

impl Config {
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var("EPIWEEK_CONFIG_DIR") {
            PathBuf::from(expand_tilde(&dir))
        } else {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from(expand_tilde("~/.config")))
                .join("epiweek")
        }
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Loads the user config, falling back to built-in defaults when no file
    /// exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            let mut config = Config::default();
            config.apply_env()?;
            return Ok(config);
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.apply_env()?;
        debug!(
            path = %path.display(),
            convention = %config.defaults.convention,
            "loaded config"
        );
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(value) = env::var("EPIWEEK_CONVENTION") {
            self.defaults.convention = value
                .parse()
                .context("Invalid EPIWEEK_CONVENTION environment variable")?;
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }
}

fn expand_tilde(path: &str) -> String {
    shellexpand::tilde(path).into_owned()
}
