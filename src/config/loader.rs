//! Configuration file loading with precedence handling.
//!
//! The engine itself only needs [`crate::config::EngineConfig`]; everything
//! here serves the demo host, which resolves its settings through the chain
//! Defaults → Config File → Env Vars → CLI Args.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::EngineConfig;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
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
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/viewslice/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Overscan window, in items.
    #[serde(default)]
    pub overscan_count: Option<usize>,

    /// End-reached threshold, in content units.
    #[serde(default)]
    pub end_reached_threshold: Option<f64>,

    /// Grid gap, in content units.
    #[serde(default)]
    pub gap: Option<f64>,

    /// Number of synthetic items the demo generates per page.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Overscan window, in items.
    pub overscan_count: usize,
    /// End-reached threshold, in content units.
    pub end_reached_threshold: f64,
    /// Grid gap, in content units.
    pub gap: f64,
    /// Number of synthetic items the demo generates per page.
    pub page_size: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl ResolvedConfig {
    /// The engine-level slice of the resolved settings.
    pub fn engine(&self) -> EngineConfig {
        EngineConfig {
            overscan_count: self.overscan_count,
            end_reached_threshold: self.end_reached_threshold,
            gap: self.gap,
        }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let engine = EngineConfig::default();
        Self {
            overscan_count: engine.overscan_count,
            end_reached_threshold: engine.end_reached_threshold,
            gap: engine.gap,
            page_size: 500,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/viewslice/viewslice.log` on Unix-like systems,
/// or the platform's state directory elsewhere. If no state directory can
/// be determined, falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("viewslice").join("viewslice.log")
    } else {
        PathBuf::from("viewslice.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if the file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
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

/// Resolve default config file path.
///
/// Returns `~/.config/viewslice/config.toml` on Unix, the platform config
/// directory elsewhere. Returns `None` if it cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("viewslice").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `VIEWSLICE_CONFIG` environment variable
/// 3. Default path `~/.config/viewslice/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("VIEWSLICE_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// the default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        overscan_count: config.overscan_count.unwrap_or(defaults.overscan_count),
        end_reached_threshold: config
            .end_reached_threshold
            .unwrap_or(defaults.end_reached_threshold),
        gap: config.gap.unwrap_or(defaults.gap),
        page_size: config.page_size.unwrap_or(defaults.page_size),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `VIEWSLICE_OVERSCAN`: Override overscan count (ignored if unparsable)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var("VIEWSLICE_OVERSCAN") {
        if let Ok(overscan) = raw.parse::<usize>() {
            config.overscan_count = overscan;
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    overscan_override: Option<usize>,
    gap_override: Option<f64>,
    page_size_override: Option<usize>,
) -> ResolvedConfig {
    if let Some(overscan) = overscan_override {
        config.overscan_count = overscan;
    }

    if let Some(gap) = gap_override {
        config.gap = gap;
    }

    if let Some(page_size) = page_size_override {
        config.page_size = page_size;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
