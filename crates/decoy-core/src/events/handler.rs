//! FakeEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Listener for fake lifecycle and interception events.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about. Handlers run synchronously on
/// the calling thread and must be `Send + Sync`.
pub trait FakeEventHandler: Send + Sync {
    // ---- Lifecycle ----
    fn on_fake_created(&self, _event: &FakeCreatedEvent) {}
    fn on_fake_disposed(&self, _event: &FakeDisposedEvent) {}

    // ---- Interception ----
    fn on_call_intercepted(&self, _event: &CallInterceptedEvent) {}
    fn on_call_completed(&self, _event: &CallCompletedEvent) {}

    // ---- Configuration ----
    fn on_rule_registered(&self, _event: &RuleRegisteredEvent) {}
    fn on_configuration_cleared(&self, _event: &ConfigurationClearedEvent) {}
    fn on_recorded_calls_cleared(&self, _event: &RecordedCallsClearedEvent) {}
}
