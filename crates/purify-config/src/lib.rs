use purify_engine::PurifyOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

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

    #[error("Invalid value for `{key}`: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

/// User overrides layered over the engine defaults. Every field is optional;
/// anything left unset keeps the default.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    /// Set to `false` to drop the generated-file comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_text: Option<String>,
    pub markers: MarkerConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_matter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub omit_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub omit_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escape: Option<String>,
}

impl Config {
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

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

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

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/purify");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and environment variables in a user-supplied path.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    /// Writes every set field onto `options`.
    pub fn apply(&self, options: &mut PurifyOptions) -> Result<(), ConfigError> {
        if let Some(width) = self.width {
            if width == 0 {
                return Err(ConfigError::InvalidValue {
                    key: "width",
                    reason: "must be at least 1".to_string(),
                });
            }
            options.width = width;
        }

        if let Some(text) = &self.header_text {
            options.header = Some(text.clone());
        }
        if self.header == Some(false) {
            options.header = None;
        }

        let markers = &mut options.markers;
        let overrides = [
            (&self.markers.front_matter, &mut markers.front_matter),
            (&self.markers.challenge, &mut markers.challenge),
            (&self.markers.omit_start, &mut markers.omit_start),
            (&self.markers.omit_end, &mut markers.omit_end),
            (&self.markers.escape, &mut markers.escape),
        ];
        for (value, slot) in overrides {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }

        Ok(())
    }
}
