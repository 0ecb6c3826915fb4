//! Argument binding and lookup errors.

use super::error_code::{self, DecoyErrorCode};

/// Errors raised while binding or reading the arguments of one invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("Signature mismatch for {method}: {detail}")]
    SignatureMismatch { method: String, detail: String },

    #[error("Argument index {index} out of range for {method} ({arity} parameters)")]
    IndexOutOfRange {
        method: String,
        index: usize,
        arity: usize,
    },

    #[error("Unknown parameter name '{name}' for {method}")]
    UnknownParameterName { method: String, name: String },

    #[error("Duplicate parameter name '{name}' in {method}")]
    DuplicateParameterName { method: String, name: String },
}

impl DecoyErrorCode for ArgumentError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SignatureMismatch { .. } | Self::DuplicateParameterName { .. } => {
                error_code::SIGNATURE_MISMATCH
            }
            Self::IndexOutOfRange { .. } => error_code::INDEX_OUT_OF_RANGE,
            Self::UnknownParameterName { .. } => error_code::UNKNOWN_PARAMETER_NAME,
        }
    }
}
