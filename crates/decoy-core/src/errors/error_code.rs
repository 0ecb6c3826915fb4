//! DecoyErrorCode trait for stable, machine-readable error codes.

/// Trait for mapping decoy errors to stable error code strings.
/// Every error enum implements this so test harnesses and diagnostics
/// can match on a code instead of a rendered message.
pub trait DecoyErrorCode {
    /// Returns the error code string (e.g., "SIGNATURE_MISMATCH").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SIGNATURE_MISMATCH: &str = "SIGNATURE_MISMATCH";
pub const INDEX_OUT_OF_RANGE: &str = "INDEX_OUT_OF_RANGE";
pub const UNKNOWN_PARAMETER_NAME: &str = "UNKNOWN_PARAMETER_NAME";
pub const RETURN_TYPE_MISMATCH: &str = "RETURN_TYPE_MISMATCH";
pub const NO_FAKE_ASSOCIATED: &str = "NO_FAKE_ASSOCIATED";
pub const ALREADY_REGISTERED: &str = "ALREADY_REGISTERED";
pub const CREATION_FAILED: &str = "CREATION_FAILED";
pub const EXPECTATION_FAILED: &str = "EXPECTATION_FAILED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
