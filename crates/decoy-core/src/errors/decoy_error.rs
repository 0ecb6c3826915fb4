//! Top-level error aggregating every subsystem error.

use super::error_code::DecoyErrorCode;
use super::{
    ArgumentError, ConfigError, CreationError, ExpectationError, RegistryError,
    SpecificationError,
};

/// Any error the decoy framework itself can raise.
/// Behavior faults are not part of this enum: they are the observable
/// outcome of a faked call, not a framework failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecoyError {
    #[error("Argument error: {0}")]
    Argument(#[from] ArgumentError),

    #[error("Specification error: {0}")]
    Specification(#[from] SpecificationError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Creation error: {0}")]
    Creation(#[from] CreationError),

    #[error("Expectation error: {0}")]
    Expectation(#[from] ExpectationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl DecoyErrorCode for DecoyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Argument(e) => e.error_code(),
            Self::Specification(e) => e.error_code(),
            Self::Registry(e) => e.error_code(),
            Self::Creation(e) => e.error_code(),
            Self::Expectation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Result alias used across the decoy crates.
pub type DecoyResult<T> = Result<T, DecoyError>;
