//! Call specification construction errors.

use super::error_code::{self, DecoyErrorCode};
use super::ArgumentError;

/// Errors raised while building a call specification or configuring a rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecificationError {
    #[error("Signature mismatch for {method}: {detail}")]
    SignatureMismatch { method: String, detail: String },

    #[error("Return type mismatch for {method}: expected {expected}, got {actual}")]
    ReturnTypeMismatch {
        method: String,
        expected: String,
        actual: String,
    },

    #[error("Argument error: {0}")]
    Argument(#[from] ArgumentError),
}

impl DecoyErrorCode for SpecificationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SignatureMismatch { .. } => error_code::SIGNATURE_MISMATCH,
            Self::ReturnTypeMismatch { .. } => error_code::RETURN_TYPE_MISMATCH,
            Self::Argument(e) => e.error_code(),
        }
    }
}
