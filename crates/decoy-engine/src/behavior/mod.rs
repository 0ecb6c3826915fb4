//! Behaviors, rules, and the per-fake behavior registry.

pub mod outcome;
pub mod registry;
pub mod rule;

pub use outcome::{CallOutcome, CallResult, Fault, ReturnValue};
pub use registry::{BehaviorRegistry, Resolution};
pub use rule::{
    Action, Behavior, BehaviorRule, FaultProducer, ResultBehavior, RuleSnapshot, ValueProducer,
};
