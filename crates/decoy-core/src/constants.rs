//! Shared constants for the decoy framework.

/// decoy version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable read by `init_tracing` for the log filter.
pub const LOG_ENV_VAR: &str = "DECOY_LOG";

/// Log filter used when `DECOY_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "decoy=info";

/// Default prefix for fake display names ("Faked Foo").
pub const DEFAULT_FAKE_NAME_PREFIX: &str = "Faked";

/// Whether panics raised by behaviors are recorded as faulted calls by default.
pub const DEFAULT_RECORD_PANICS: bool = true;

/// Whether every dispatched call is logged with its rendered arguments by default.
pub const DEFAULT_LOG_CALLS: bool = false;

/// Default maximum rendered length of a single argument value.
pub const DEFAULT_MAX_VALUE_DISPLAY_LEN: usize = 64;

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "decoy.toml";

/// User-level config directory name (under `$HOME`).
pub const USER_CONFIG_DIR: &str = ".decoy";

// ---- Constraint descriptions ----

/// Description of the null constraint.
pub const NULL_DESCRIPTION: &str = "NULL";

/// Description of the negated null constraint.
pub const NOT_NULL_DESCRIPTION: &str = "NOT NULL";

/// Description of the wildcard constraint.
pub const IGNORED_DESCRIPTION: &str = "<Ignored>";

/// Description of the negated wildcard constraint.
pub const NEVER_DESCRIPTION: &str = "<Never>";

/// Declared name of the universal object type.
pub const ANY_OBJECT_TYPE: &str = "object";
