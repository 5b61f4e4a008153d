use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use vimhelp_engine::corrections::{self, Correction};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the `*.txt` help files.
    pub source_path: PathBuf,
    /// Directory the HTML fragments are written to.
    pub output_path: PathBuf,
    /// Vim's `tags` table, `<source_path>/tags` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_path: Option<PathBuf>,
    /// Apply the fixes shipped for the Vim 8.2 user manual.
    #[serde(default = "default_true")]
    pub builtin_corrections: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub corrections: Vec<Correction>,
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn new(source_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            output_path: output_path.into(),
            tags_path: None,
            builtin_corrections: true,
            corrections: Vec::new(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in every configured path
        config.source_path = Self::expand_path(&config.source_path).unwrap_or(config.source_path);
        config.output_path = Self::expand_path(&config.output_path).unwrap_or(config.output_path);
        config.tags_path = config
            .tags_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/vimhelp");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn tags_path(&self) -> PathBuf {
        self.tags_path
            .clone()
            .unwrap_or_else(|| self.source_path.join("tags"))
    }

    /// Built-in fixes, if enabled, followed by the configured ones.
    pub fn corrections(&self) -> Vec<Correction> {
        let mut all = if self.builtin_corrections {
            corrections::builtin()
        } else {
            Vec::new()
        };
        all.extend(self.corrections.iter().cloned());
        all
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
