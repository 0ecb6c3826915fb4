//! RuleConfigurator: fluent behavior configuration for matching calls.

use std::sync::Arc;

use tracing::warn;

use decoy_core::errors::SpecificationError;
use decoy_core::types::{RuleId, Value};

use crate::arguments::ArgumentValueSet;
use crate::behavior::{Behavior, BehaviorRule, Fault, ResultBehavior};
use crate::controller::FakeController;
use crate::specification::CallSpecification;

/// Handle returned by `call_to`.
///
/// The first configuring call registers a rule for the specification;
/// later calls on the same handle amend that rule in place. Once the
/// fake's configuration is cleared the handle no longer has a rule to
/// amend, and further configuration through it is ignored with a warning.
///
/// ```ignore
/// fake.call_to(spec)
///     .invokes(|_| flag.store(true, Ordering::SeqCst))
///     .returns(42)?
///     .once();
/// ```
pub struct RuleConfigurator {
    controller: Arc<FakeController>,
    specification: CallSpecification,
    rule_id: Option<RuleId>,
}

impl RuleConfigurator {
    pub(crate) fn new(controller: Arc<FakeController>, specification: CallSpecification) -> Self {
        Self {
            controller,
            specification,
            rule_id: None,
        }
    }

    /// The registered rule, once something has been configured.
    pub fn rule_id(&self) -> Option<RuleId> {
        self.rule_id
    }

    /// Calls this configurator applies to.
    pub fn specification(&self) -> &CallSpecification {
        &self.specification
    }

    fn apply<F: FnOnce(&mut BehaviorRule)>(mut self, f: F) -> Self {
        match self.rule_id {
            Some(rule_id) => {
                if !self.controller.update_rule(rule_id, f) {
                    warn!(
                        fake = %self.controller.name(),
                        rule_id = %rule_id,
                        "rule no longer registered; configuration ignored"
                    );
                }
            }
            None => {
                let mut rule = BehaviorRule::new(self.specification.clone(), Behavior::default());
                f(&mut rule);
                self.rule_id = Some(self.controller.register_rule(rule));
            }
        }
        self
    }

    fn set_result(self, result: ResultBehavior) -> Self {
        self.apply(|rule| rule.behavior_mut().set_result(result))
    }

    /// Run `action` on every matching call, before the result is produced.
    /// Repeated calls chain actions in order.
    pub fn invokes<F>(self, action: F) -> Self
    where
        F: Fn(&ArgumentValueSet) + Send + Sync + 'static,
    {
        self.apply(|rule| rule.behavior_mut().push_action(Arc::new(action)))
    }

    /// Return `value` from matching calls.
    ///
    /// Fails with `ReturnTypeMismatch` when the method is void or its
    /// return type cannot hold `value`.
    pub fn returns(self, value: impl Into<Value>) -> Result<Self, SpecificationError> {
        let value = value.into();
        let method = self.specification.method();
        match method.return_type() {
            None => {
                return Err(SpecificationError::ReturnTypeMismatch {
                    method: method.to_string(),
                    expected: "void".to_string(),
                    actual: value.to_string(),
                })
            }
            Some(ty) if !ty.accepts(&value) => {
                return Err(SpecificationError::ReturnTypeMismatch {
                    method: method.to_string(),
                    expected: ty.to_string(),
                    actual: value.to_string(),
                })
            }
            Some(_) => {}
        }
        Ok(self.set_result(ResultBehavior::Return(value)))
    }

    /// Compute the return value from each call's arguments.
    /// The produced value is not type-checked.
    pub fn returns_lazily<F>(self, produce: F) -> Self
    where
        F: Fn(&ArgumentValueSet) -> Value + Send + Sync + 'static,
    {
        self.set_result(ResultBehavior::ReturnLazily(Arc::new(produce)))
    }

    /// Fail matching calls with `fault`. Every call hands back the same fault.
    pub fn throws(self, fault: Fault) -> Self {
        self.set_result(ResultBehavior::Throw(fault))
    }

    /// Build a fresh fault from each call's arguments.
    pub fn throws_lazily<F>(self, produce: F) -> Self
    where
        F: Fn(&ArgumentValueSet) -> Fault + Send + Sync + 'static,
    {
        self.set_result(ResultBehavior::ThrowLazily(Arc::new(produce)))
    }

    /// Return the type default (no-op for void), overriding wrapping and
    /// earlier rules.
    pub fn does_nothing(self) -> Self {
        self.set_result(ResultBehavior::DefaultValue)
    }

    /// Delegate matching calls to the wrapped instance.
    pub fn calls_wrapped_method(self) -> Self {
        self.set_result(ResultBehavior::CallWrapped)
    }

    /// Apply the rule to the next `times` matching calls only. After that
    /// the rule stays registered but is skipped.
    pub fn number_of_times(self, times: u64) -> Self {
        self.apply(|rule| rule.set_remaining(Some(times)))
    }

    /// Shorthand for `number_of_times(1)`.
    pub fn once(self) -> Self {
        self.number_of_times(1)
    }

    /// Shorthand for `number_of_times(2)`.
    pub fn twice(self) -> Self {
        self.number_of_times(2)
    }
}
