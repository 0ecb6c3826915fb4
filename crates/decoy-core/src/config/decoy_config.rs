//! Top-level decoy configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DiagnosticsConfig, FakeConfig};
use crate::constants::{PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`DECOY_*`)
/// 3. Project config (`decoy.toml` in project root)
/// 4. User config (`~/.decoy/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DecoyConfig {
    pub fakes: FakeConfig,
    pub diagnostics: DiagnosticsConfig,
}

/// Programmatic overrides, typically set by a test harness.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub name_prefix: Option<String>,
    pub record_panics: Option<bool>,
    pub log_calls: Option<bool>,
    pub max_value_display_len: Option<usize>,
}

impl DecoyConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): programmatic overrides
        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &DecoyConfig) -> Result<(), ConfigError> {
        if config.diagnostics.max_value_display_len == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "diagnostics.max_value_display_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(prefix) = &config.fakes.name_prefix {
            if prefix.chars().any(char::is_control) {
                return Err(ConfigError::ValidationFailed {
                    field: "fakes.name_prefix".to_string(),
                    message: "must not contain control characters".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply programmatic overrides (highest priority).
    pub fn apply_overrides(config: &mut DecoyConfig, o: &ConfigOverrides) {
        if let Some(ref v) = o.name_prefix {
            config.fakes.name_prefix = Some(v.clone());
        }
        if let Some(v) = o.record_panics {
            config.fakes.record_panics = Some(v);
        }
        if let Some(v) = o.log_calls {
            config.diagnostics.log_calls = Some(v);
        }
        if let Some(v) = o.max_value_display_len {
            config.diagnostics.max_value_display_len = Some(v);
        }
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut DecoyConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let file_config: DecoyConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` win.
    fn merge(base: &mut DecoyConfig, other: &DecoyConfig) {
        if other.fakes.name_prefix.is_some() {
            base.fakes.name_prefix = other.fakes.name_prefix.clone();
        }
        if other.fakes.record_panics.is_some() {
            base.fakes.record_panics = other.fakes.record_panics;
        }
        if other.diagnostics.log_calls.is_some() {
            base.diagnostics.log_calls = other.diagnostics.log_calls;
        }
        if other.diagnostics.max_value_display_len.is_some() {
            base.diagnostics.max_value_display_len = other.diagnostics.max_value_display_len;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `DECOY_FAKES_NAME_PREFIX`, `DECOY_DIAGNOSTICS_LOG_CALLS`, etc.
    fn apply_env_overrides(config: &mut DecoyConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("DECOY_FAKES_NAME_PREFIX") {
            config.fakes.name_prefix = Some(val);
        }
        if let Some(v) = parse_env::<bool>("DECOY_FAKES_RECORD_PANICS")? {
            config.fakes.record_panics = Some(v);
        }
        if let Some(v) = parse_env::<bool>("DECOY_DIAGNOSTICS_LOG_CALLS")? {
            config.diagnostics.log_calls = Some(v);
        }
        if let Some(v) = parse_env::<usize>("DECOY_DIAGNOSTICS_MAX_VALUE_DISPLAY_LEN")? {
            config.diagnostics.max_value_display_len = Some(v);
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                field: key.to_string(),
                message: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
