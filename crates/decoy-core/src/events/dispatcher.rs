//! EventDispatcher: synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::FakeEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn FakeEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn FakeEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no handler is registered; emitters skip building events then.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler is logged and does not stop later handlers.
    fn emit<F: Fn(&dyn FakeEventHandler)>(&self, name: &'static str, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                ::tracing::warn!(event = name, "event handler panicked");
            }
        }
    }

    // ---- Fake Lifecycle ----
    pub fn emit_fake_created(&self, event: &FakeCreatedEvent) {
        self.emit("fake_created", |h| h.on_fake_created(event));
    }

    pub fn emit_fake_disposed(&self, event: &FakeDisposedEvent) {
        self.emit("fake_disposed", |h| h.on_fake_disposed(event));
    }

    // ---- Calls ----
    pub fn emit_call_intercepted(&self, event: &CallInterceptedEvent) {
        self.emit("call_intercepted", |h| h.on_call_intercepted(event));
    }

    pub fn emit_call_completed(&self, event: &CallCompletedEvent) {
        self.emit("call_completed", |h| h.on_call_completed(event));
    }

    // ---- Configuration ----
    pub fn emit_rule_registered(&self, event: &RuleRegisteredEvent) {
        self.emit("rule_registered", |h| h.on_rule_registered(event));
    }

    pub fn emit_configuration_cleared(&self, event: &ConfigurationClearedEvent) {
        self.emit("configuration_cleared", |h| h.on_configuration_cleared(event));
    }

    pub fn emit_recorded_calls_cleared(&self, event: &RecordedCallsClearedEvent) {
        self.emit("recorded_calls_cleared", |h| h.on_recorded_calls_cleared(event));
    }
}
