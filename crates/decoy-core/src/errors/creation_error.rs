//! Fake creation errors.

use super::error_code::{self, DecoyErrorCode};
use super::RegistryError;

/// Errors raised while creating a fake through a proxy factory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreationError {
    #[error("Proxy factory failed to create {type_name}: {message}")]
    ProxyFailed { type_name: String, message: String },

    #[error("Invalid fake options for {type_name}: {message}")]
    InvalidOptions { type_name: String, message: String },

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

impl DecoyErrorCode for CreationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Registry(e) => e.error_code(),
            _ => error_code::CREATION_FAILED,
        }
    }
}
