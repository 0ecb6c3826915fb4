//! Call assertion failures.

use super::error_code::{self, DecoyErrorCode};

/// Raised when the recorded calls of a fake do not satisfy an assertion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpectationError {
    #[error(
        "Assertion failed for {specification}: expected {expected}, but found {actual}. Recorded calls on {fake}: [{}]",
        .calls.join(", ")
    )]
    CallCountMismatch {
        fake: String,
        specification: String,
        expected: String,
        actual: usize,
        calls: Vec<String>,
    },
}

impl DecoyErrorCode for ExpectationError {
    fn error_code(&self) -> &'static str {
        error_code::EXPECTATION_FAILED
    }
}
