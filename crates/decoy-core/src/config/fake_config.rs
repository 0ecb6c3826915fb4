//! Fake creation and dispatch configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FAKE_NAME_PREFIX, DEFAULT_RECORD_PANICS};

/// Configuration for fake creation and call dispatch.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FakeConfig {
    /// Prefix of generated display names. Default: "Faked".
    pub name_prefix: Option<String>,
    /// Record panicking behaviors as faulted calls before re-raising. Default: true.
    ///
    /// Setting this to `false` gives up the guarantee that every call is
    /// recorded: a behavior that panics then unwinds straight through
    /// dispatch and leaves no `CompletedCall`. Faults returned as `Err`
    /// are recorded either way.
    pub record_panics: Option<bool>,
}

impl FakeConfig {
    /// Returns the effective name prefix, defaulting to "Faked".
    pub fn effective_name_prefix(&self) -> &str {
        self.name_prefix.as_deref().unwrap_or(DEFAULT_FAKE_NAME_PREFIX)
    }

    /// Returns whether panics are recorded, defaulting to true.
    pub fn effective_record_panics(&self) -> bool {
        self.record_panics.unwrap_or(DEFAULT_RECORD_PANICS)
    }

    /// Display name for a fake of `type_name`: "Faked Foo".
    pub fn default_name_for(&self, type_name: &str) -> String {
        let short = type_name.rsplit("::").next().unwrap_or(type_name);
        let prefix = self.effective_name_prefix();
        if prefix.is_empty() {
            short.to_string()
        } else {
            format!("{prefix} {short}")
        }
    }
}
