//! Diagnostics configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOG_CALLS, DEFAULT_MAX_VALUE_DISPLAY_LEN};

/// Configuration for call logging and rendered diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Log every dispatched call with its rendered arguments. Default: false.
    pub log_calls: Option<bool>,
    /// Maximum rendered length of one argument value. Default: 64.
    pub max_value_display_len: Option<usize>,
}

impl DiagnosticsConfig {
    /// Returns whether per-call argument logging is on, defaulting to false.
    pub fn effective_log_calls(&self) -> bool {
        self.log_calls.unwrap_or(DEFAULT_LOG_CALLS)
    }

    /// Returns the display truncation limit, defaulting to 64.
    pub fn effective_max_value_display_len(&self) -> usize {
        self.max_value_display_len
            .unwrap_or(DEFAULT_MAX_VALUE_DISPLAY_LEN)
    }
}
