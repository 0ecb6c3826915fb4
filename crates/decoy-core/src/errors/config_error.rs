//! Errors from loading a `decoy.toml` layer or a `DECOY_*` override.

use super::error_code::{self, DecoyErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A config layer that was expected to exist could not be read.
    #[error("cannot read decoy config at {path}")]
    FileNotFound { path: String },

    /// TOML that does not fit `DecoyConfig`. `path` is `<string>` for
    /// strings passed to `from_toml`.
    #[error("malformed decoy config ({path}): {message}")]
    ParseError { path: String, message: String },

    #[error("decoy setting {field} rejected: {message}")]
    ValidationFailed { field: String, message: String },

    /// An environment override that does not parse; `field` names the variable.
    #[error("{field} has an unusable value: {message}")]
    InvalidValue { field: String, message: String },
}

impl DecoyErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
