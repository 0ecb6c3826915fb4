//! Behaviors and the rules that attach them to call specifications.

use std::sync::Arc;

use serde::Serialize;

use decoy_core::types::{RuleId, Value};

use super::outcome::Fault;
use crate::arguments::ArgumentValueSet;
use crate::specification::CallSpecification;

/// Side effect run before the result is produced.
pub type Action = Arc<dyn Fn(&ArgumentValueSet) + Send + Sync>;

/// Produces a return value from the call's arguments.
pub type ValueProducer = Arc<dyn Fn(&ArgumentValueSet) -> Value + Send + Sync>;

/// Produces a fault from the call's arguments.
pub type FaultProducer = Arc<dyn Fn(&ArgumentValueSet) -> Fault + Send + Sync>;

/// How a rule produces the call's result once its actions have run.
#[derive(Clone, Default)]
pub enum ResultBehavior {
    /// Default value of the return type; no-op for void.
    #[default]
    DefaultValue,
    Return(Value),
    ReturnLazily(ValueProducer),
    Throw(Fault),
    ThrowLazily(FaultProducer),
    /// Delegate to the wrapped instance.
    CallWrapped,
}

impl ResultBehavior {
    /// Short label used in rule snapshots.
    pub fn describe(&self) -> &'static str {
        match self {
            ResultBehavior::DefaultValue => "default value",
            ResultBehavior::Return(_) => "returns value",
            ResultBehavior::ReturnLazily(_) => "returns lazily",
            ResultBehavior::Throw(_) => "throws",
            ResultBehavior::ThrowLazily(_) => "throws lazily",
            ResultBehavior::CallWrapped => "calls wrapped method",
        }
    }
}

/// Ordered side effects followed by one result behavior.
#[derive(Clone, Default)]
pub struct Behavior {
    actions: Vec<Action>,
    result: ResultBehavior,
}

impl Behavior {
    /// Default-value behavior with no actions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a side effect.
    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Replace the result.
    pub fn with_result(mut self, result: ResultBehavior) -> Self {
        self.result = result;
        self
    }

    pub(crate) fn push_action(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn set_result(&mut self, result: ResultBehavior) {
        self.result = result;
    }

    /// Side effects, in the order they run.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// How the call's result is produced.
    pub fn result(&self) -> &ResultBehavior {
        &self.result
    }
}

/// A call specification bound to a behavior, with an optional repeat cap.
pub struct BehaviorRule {
    id: RuleId,
    specification: CallSpecification,
    behavior: Behavior,
    remaining: Option<u64>,
    applied: u64,
}

impl BehaviorRule {
    /// An uncapped rule with a fresh id.
    pub fn new(specification: CallSpecification, behavior: Behavior) -> Self {
        Self {
            id: RuleId::next(),
            specification,
            behavior,
            remaining: None,
            applied: 0,
        }
    }

    /// Apply only to the next `times` matching calls.
    pub fn with_limit(mut self, times: u64) -> Self {
        self.remaining = Some(times);
        self
    }

    /// Rule identity, stable across updates.
    pub fn id(&self) -> RuleId {
        self.id
    }

    /// Calls this rule applies to.
    pub fn specification(&self) -> &CallSpecification {
        &self.specification
    }

    /// What the rule does for a matching call.
    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    pub(crate) fn behavior_mut(&mut self) -> &mut Behavior {
        &mut self.behavior
    }

    /// Remaining applications, `None` when unlimited.
    pub fn remaining(&self) -> Option<u64> {
        self.remaining
    }

    pub(crate) fn set_remaining(&mut self, remaining: Option<u64>) {
        self.remaining = remaining;
    }

    /// How many calls this rule has been applied to.
    pub fn applied(&self) -> u64 {
        self.applied
    }

    /// Returns true once the repetition cap is used up.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }

    /// Count one application. Callers hold the registry lock.
    pub(crate) fn consume(&mut self) {
        self.applied += 1;
        if let Some(n) = self.remaining.as_mut() {
            *n = n.saturating_sub(1);
        }
    }

    /// Serializable view for introspection.
    pub fn snapshot(&self) -> RuleSnapshot {
        RuleSnapshot {
            rule_id: self.id,
            specification: self.specification.to_string(),
            result: self.behavior.result.describe(),
            actions: self.behavior.actions.len(),
            remaining: self.remaining,
            applied: self.applied,
            exhausted: self.is_exhausted(),
        }
    }
}

/// Introspection view of a registered rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSnapshot {
    pub rule_id: RuleId,
    pub specification: String,
    pub result: &'static str,
    pub actions: usize,
    pub remaining: Option<u64>,
    pub applied: u64,
    pub exhausted: bool,
}
