//! CompletedCall: the immutable record of a finished invocation.

use std::fmt;
use std::sync::Arc;

use decoy_core::types::{FakeId, RuleId, Value};

use crate::arguments::ArgumentValueSet;
use crate::behavior::{CallOutcome, Fault, ReturnValue};
use crate::call::FakeObjectCall;

/// A call after its behavior has fully run.
///
/// Records what actually happened: the value handed back to the caller,
/// or the fault that propagated. Never mutated once stored.
#[derive(Debug, Clone)]
pub struct CompletedCall {
    sequence: u64,
    fake_id: FakeId,
    fake_name: Arc<str>,
    arguments: ArgumentValueSet,
    outcome: CallOutcome,
    applied_rule: Option<RuleId>,
}

impl CompletedCall {
    pub(crate) fn new(
        sequence: u64,
        fake_id: FakeId,
        fake_name: Arc<str>,
        arguments: ArgumentValueSet,
        outcome: CallOutcome,
        applied_rule: Option<RuleId>,
    ) -> Self {
        Self {
            sequence,
            fake_id,
            fake_name,
            arguments,
            outcome,
            applied_rule,
        }
    }

    /// Position in the owning fake's completion order (1-based, never reused).
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// The fake the call was made on.
    pub fn fake_id(&self) -> FakeId {
        self.fake_id
    }

    /// Display name of the fake at the time of the call.
    pub fn fake_name(&self) -> &str {
        &self.fake_name
    }

    /// Return value or fault handed back to the caller.
    pub fn outcome(&self) -> &CallOutcome {
        &self.outcome
    }

    /// The value returned to the caller; `None` for void methods and faults.
    pub fn return_value(&self) -> Option<&Value> {
        match &self.outcome {
            CallOutcome::Returned(ReturnValue::Value(v)) => Some(v),
            _ => None,
        }
    }

    /// Returns true if the call ended in a fault or panic.
    pub fn is_faulted(&self) -> bool {
        matches!(self.outcome, CallOutcome::Faulted(_))
    }

    /// The fault, if the call faulted.
    pub fn fault(&self) -> Option<&Fault> {
        match &self.outcome {
            CallOutcome::Faulted(f) => Some(f),
            CallOutcome::Returned(_) => None,
        }
    }

    /// The configured rule that produced the outcome, if any.
    pub fn applied_rule(&self) -> Option<RuleId> {
        self.applied_rule
    }

    /// `Foo.another_method(text: "houseboat")`, values truncated to `max_len`.
    pub fn render(&self, max_len: usize) -> String {
        format!(
            "{}({})",
            self.arguments.method().qualified_name(),
            self.arguments.render(max_len)
        )
    }
}

impl FakeObjectCall for CompletedCall {
    fn arguments(&self) -> &ArgumentValueSet {
        &self.arguments
    }
}

impl fmt::Display for CompletedCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.sequence, self.render(usize::MAX))?;
        match &self.outcome {
            CallOutcome::Returned(ReturnValue::Value(v)) => write!(f, " -> {v}"),
            CallOutcome::Returned(ReturnValue::Void) => Ok(()),
            CallOutcome::Faulted(fault) => write!(f, " !! {fault}"),
        }
    }
}
