//! Configuration file handling for glyphcast.
//!
//! Loads configuration from `~/.config/glyphcast/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::ResolutionTier;

/// Configuration file structure for glyphcast.
/// Loaded from ~/.config/glyphcast/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Glyph ramp granularity: low, mid or high
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub invert: bool,
    /// Fit the terminal height instead of its width
    #[serde(default)]
    pub fit_height: bool,
}

impl RenderConfig {
    /// Parse the configured resolution, if one is set.
    pub fn tier(&self) -> Result<Option<ResolutionTier>, String> {
        self.resolution
            .as_deref()
            .map(|s| s.parse::<ResolutionTier>())
            .transpose()
    }
}

/// Default contents written by `glyphcast config init`.
pub const DEFAULT_CONFIG: &str = r#"# glyphcast configuration

[render]
# Glyph ramp: low (5 levels), mid (9 levels), high (17 levels)
resolution = "low"
# Reverse the ramp (for light terminal backgrounds)
invert = false
# Fit the terminal height instead of its width
fit_height = false
"#;

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            Self::load_from_explicit(&path)
        } else {
            log::debug!("no config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Load configuration from a path the user named explicitly.
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from_explicit(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        config
            .render
            .tier()
            .map_err(|message| ConfigError::InvalidValue {
                path: path.to_path_buf(),
                message,
            })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidValue {
        path: PathBuf,
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::InvalidValue { path, message } => {
                write!(f, "Invalid value in config file '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("glyphcast").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/glyphcast/config.toml")
        })
}
