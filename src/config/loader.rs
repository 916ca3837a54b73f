//! Configuration file loading with precedence handling.
//!
//! Precedence, lowest to highest: built-in defaults, TOML config file,
//! `PIZZAFORM_*` environment variables, CLI flags. Missing files are not
//! errors; only unreadable or malformed files are.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read a config file that exists.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; anything unset falls back to the built-in
/// default. Corresponds to `~/.config/pizzaform/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Whether colored output is enabled.
    #[serde(default)]
    pub color: Option<bool>,

    /// Path to the log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Key binding overrides, action name to key name.
    ///
    /// ```toml
    /// [keybindings]
    /// quit = "x"
    /// order = "enter"
    /// ```
    #[serde(default)]
    pub keybindings: Option<HashMap<String, String>>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Whether colored output is enabled.
    pub color: bool,
    /// Path to the log file for tracing output.
    pub log_file_path: PathBuf,
    /// Key binding overrides, action name to key name.
    pub keybindings: HashMap<String, String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            color: true,
            log_file_path: default_log_path(),
            keybindings: HashMap::new(),
        }
    }
}

/// Resolve the default log file path.
///
/// `~/.local/state/pizzaform/pizzaform.log` on Unix-like systems, the
/// platform state directory elsewhere, current directory as a last resort.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("pizzaform").join("pizzaform.log")
    } else {
        PathBuf::from("pizzaform.log")
    }
}

/// Resolve the default config file path.
///
/// `~/.config/pizzaform/config.toml` on Unix, the platform config
/// directory elsewhere. `None` if no home directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pizzaform").join("config.toml"))
}

/// Load a configuration file from a specific path.
///
/// Returns `Ok(None)` if the file does not exist.
///
/// # Errors
///
/// Returns an error only if the file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Locate and load the configuration file.
///
/// Search order: explicit path argument (CLI `--config`), the
/// `PIZZAFORM_CONFIG` environment variable, then the default path.
///
/// # Errors
///
/// Returns an error only if a located file cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("PIZZAFORM_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge an optional config file over the built-in defaults.
pub fn merge_config(file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();
    match file {
        Some(file) => ResolvedConfig {
            color: file.color.unwrap_or(defaults.color),
            log_file_path: file.log_file_path.unwrap_or(defaults.log_file_path),
            keybindings: file.keybindings.unwrap_or_default(),
        },
        None => defaults,
    }
}

/// Apply environment variable overrides to a resolved config.
///
/// Recognized: `PIZZAFORM_LOG_FILE` (log path), `NO_COLOR` (any value
/// disables color).
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(path) = std::env::var("PIZZAFORM_LOG_FILE") {
        config.log_file_path = PathBuf::from(path);
    }
    if std::env::var("NO_COLOR").is_ok() {
        config.color = false;
    }
    config
}

/// Apply CLI argument overrides, the highest-precedence layer.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    no_color: bool,
    log_file: Option<PathBuf>,
) -> ResolvedConfig {
    if no_color {
        config.color = false;
    }
    if let Some(path) = log_file {
        config.log_file_path = path;
    }
    config
}
