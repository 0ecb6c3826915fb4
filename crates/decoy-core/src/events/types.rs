//! Event payloads emitted over a fake's lifetime.

use serde::Serialize;

use crate::types::{FakeId, RuleId};

/// A fake was created and registered.
#[derive(Debug, Clone, Serialize)]
pub struct FakeCreatedEvent {
    pub fake_id: FakeId,
    pub fake_name: String,
    pub type_name: String,
}

/// A call reached the controller, before any behavior ran.
#[derive(Debug, Clone, Serialize)]
pub struct CallInterceptedEvent {
    pub fake_id: FakeId,
    pub method: String,
    pub arguments: Vec<serde_json::Value>,
}

/// A call finished and was appended to the record store.
#[derive(Debug, Clone, Serialize)]
pub struct CallCompletedEvent {
    pub fake_id: FakeId,
    pub method: String,
    pub sequence: u64,
    pub rule_id: Option<RuleId>,
    pub faulted: bool,
}

/// A behavior rule was registered.
#[derive(Debug, Clone, Serialize)]
pub struct RuleRegisteredEvent {
    pub fake_id: FakeId,
    pub rule_id: RuleId,
    pub specification: String,
}

/// Recorded calls of a fake were cleared.
#[derive(Debug, Clone, Serialize)]
pub struct RecordedCallsClearedEvent {
    pub fake_id: FakeId,
    pub cleared: usize,
}

/// Configured rules of a fake were cleared.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigurationClearedEvent {
    pub fake_id: FakeId,
    pub cleared: usize,
}

/// A fake was removed from its registry.
#[derive(Debug, Clone, Serialize)]
pub struct FakeDisposedEvent {
    pub fake_id: FakeId,
    pub fake_name: String,
    pub recorded_calls: usize,
}
