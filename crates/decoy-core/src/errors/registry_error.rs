//! Fake registry lookup errors.

use super::error_code::{self, DecoyErrorCode};

/// Errors raised by the instance-to-fake lookup table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("No fake is associated with object {object}")]
    NoFakeAssociated { object: String },

    #[error("Object {object} is already registered as fake '{fake}'")]
    AlreadyRegistered { object: String, fake: String },
}

impl DecoyErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoFakeAssociated { .. } => error_code::NO_FAKE_ASSOCIATED,
            Self::AlreadyRegistered { .. } => error_code::ALREADY_REGISTERED,
        }
    }
}
