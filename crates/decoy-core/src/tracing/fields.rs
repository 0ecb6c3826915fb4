//! Span and field names shared by every decoy subsystem.
//!
//! Keeping them in one place lets log queries filter on stable keys.

/// Span wrapping one intercepted call, from resolve to record.
pub const DISPATCH_SPAN: &str = "decoy.dispatch";

/// Display name of the fake.
pub const FAKE: &str = "fake";

/// Numeric fake identity.
pub const FAKE_ID: &str = "fake_id";

/// Qualified method name.
pub const METHOD: &str = "method";

/// Rule applied to a call, if any.
pub const RULE_ID: &str = "rule_id";

/// Completion sequence number of a recorded call.
pub const SEQUENCE: &str = "sequence";

/// Whether the recorded call faulted.
pub const FAULTED: &str = "faulted";

/// Number of records or rules removed by a clear.
pub const CLEARED: &str = "cleared";
