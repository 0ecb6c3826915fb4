//! FakeController: dispatch, recording, and configuration for one fake.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, Span};

use decoy_core::config::DecoyConfig;
use decoy_core::constants::{DEFAULT_LOG_CALLS, DEFAULT_MAX_VALUE_DISPLAY_LEN, DEFAULT_RECORD_PANICS};
use decoy_core::errors::SpecificationError;
use decoy_core::events::{
    CallCompletedEvent, CallInterceptedEvent, ConfigurationClearedEvent, EventDispatcher,
    RecordedCallsClearedEvent, RuleRegisteredEvent,
};
use decoy_core::tracing::fields;
use decoy_core::types::{FakeId, RuleId, Value};

use crate::arguments::ArgumentValueSet;
use crate::assertions::CallAssertion;
use crate::behavior::{
    BehaviorRegistry, BehaviorRule, CallOutcome, CallResult, Fault, Resolution, ResultBehavior,
    ReturnValue, RuleSnapshot,
};
use crate::configuration::RuleConfigurator;
use crate::interceptor::{CallInterceptor, WrappedTarget};
use crate::recording::{CallRecordStore, CompletedCall};
use crate::specification::{CallSpecification, CallTemplate};

/// Per-fake dispatch settings, resolved from `DecoyConfig` at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchSettings {
    /// Catch a panicking behavior and record it as a faulted call before
    /// resuming the panic. When off, panicking calls go unrecorded.
    pub record_panics: bool,
    /// Log rendered arguments of every intercepted call at `debug`.
    pub log_calls: bool,
    /// Truncation limit for rendered argument values.
    pub max_value_display_len: usize,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            record_panics: DEFAULT_RECORD_PANICS,
            log_calls: DEFAULT_LOG_CALLS,
            max_value_display_len: DEFAULT_MAX_VALUE_DISPLAY_LEN,
        }
    }
}

impl From<&DecoyConfig> for DispatchSettings {
    fn from(config: &DecoyConfig) -> Self {
        Self {
            record_panics: config.fakes.effective_record_panics(),
            log_calls: config.diagnostics.effective_log_calls(),
            max_value_display_len: config.diagnostics.effective_max_value_display_len(),
        }
    }
}

/// Orchestrates one fake: resolves behavior for intercepted calls, runs
/// it, records the completed call, and exposes query and clear operations.
///
/// The registry and store each guard their own state. No lock is held
/// while a behavior runs, so behaviors may call back into the same fake.
pub struct FakeController {
    id: FakeId,
    name: Arc<str>,
    type_name: Arc<str>,
    records: CallRecordStore,
    rules: BehaviorRegistry,
    dispatcher: Arc<EventDispatcher>,
    wrapped: Option<Arc<dyn WrappedTarget>>,
    settings: DispatchSettings,
}

impl FakeController {
    /// A controller with no rules and no recorded calls.
    pub fn new(
        name: &str,
        type_name: &str,
        settings: DispatchSettings,
        dispatcher: Arc<EventDispatcher>,
    ) -> Self {
        let id = FakeId::next();
        let name: Arc<str> = Arc::from(name);
        Self {
            id,
            records: CallRecordStore::new(id, Arc::clone(&name)),
            name,
            type_name: Arc::from(type_name),
            rules: BehaviorRegistry::new(),
            dispatcher,
            wrapped: None,
            settings,
        }
    }

    /// Delegate unconfigured calls, and rules that ask for it, to `target`.
    pub fn with_wrapped(mut self, target: Arc<dyn WrappedTarget>) -> Self {
        self.wrapped = Some(target);
        self
    }

    /// Numeric fake identity.
    pub fn id(&self) -> FakeId {
        self.id
    }

    /// Display name used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the faked contract.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Settings resolved at creation.
    pub fn settings(&self) -> DispatchSettings {
        self.settings
    }

    /// Whether unconfigured calls reach a wrapped target.
    pub fn is_wrapping(&self) -> bool {
        self.wrapped.is_some()
    }

    // ── Query / clear ──

    /// Snapshot of recorded calls in completion order.
    pub fn get_calls(&self) -> Vec<Arc<CompletedCall>> {
        self.records.get_all()
    }

    /// Number of calls recorded so far.
    pub fn recorded_call_count(&self) -> usize {
        self.records.len()
    }

    /// Forget every recorded call. Configured rules are untouched.
    pub fn clear_recorded_calls(&self) -> usize {
        let cleared = self.records.clear();
        debug!(fake = %self.name, cleared, "recorded calls cleared");
        if !self.dispatcher.is_empty() {
            self.dispatcher
                .emit_recorded_calls_cleared(&RecordedCallsClearedEvent {
                    fake_id: self.id,
                    cleared,
                });
        }
        cleared
    }

    /// Discard every configured rule. Recorded calls are untouched.
    pub fn clear_configuration(&self) -> usize {
        let cleared = self.rules.clear_all();
        debug!(fake = %self.name, cleared, "configuration cleared");
        if !self.dispatcher.is_empty() {
            self.dispatcher
                .emit_configuration_cleared(&ConfigurationClearedEvent {
                    fake_id: self.id,
                    cleared,
                });
        }
        cleared
    }

    /// Registered rules in search order, newest first.
    pub fn rules(&self) -> Vec<RuleSnapshot> {
        self.rules.snapshots()
    }

    // ── Configuration ──

    /// Start configuring calls matching `specification`.
    ///
    /// Nothing is registered until a behavior or repeat cap is attached.
    pub fn call_to(self: &Arc<Self>, specification: CallSpecification) -> RuleConfigurator {
        RuleConfigurator::new(Arc::clone(self), specification)
    }

    /// `call_to` for a template.
    pub fn call_to_template(
        self: &Arc<Self>,
        template: &CallTemplate,
    ) -> Result<RuleConfigurator, SpecificationError> {
        Ok(self.call_to(template.build()?))
    }

    /// Assert on recorded calls matching `specification`.
    pub fn assert_that(&self, specification: CallSpecification) -> CallAssertion<'_> {
        CallAssertion::new(self, specification)
    }

    pub(crate) fn register_rule(&self, rule: BehaviorRule) -> RuleId {
        let specification = rule.specification().to_string();
        let rule_id = self.rules.register(rule);
        debug!(fake = %self.name, rule_id = %rule_id, specification = %specification, "rule registered");
        if !self.dispatcher.is_empty() {
            self.dispatcher.emit_rule_registered(&RuleRegisteredEvent {
                fake_id: self.id,
                rule_id,
                specification,
            });
        }
        rule_id
    }

    pub(crate) fn update_rule<F: FnOnce(&mut BehaviorRule)>(&self, rule_id: RuleId, f: F) -> bool {
        self.rules.update(rule_id, f)
    }

    // ── Dispatch ──

    /// Run one intercepted call to completion.
    ///
    /// The call is recorded before its outcome reaches the caller, faults
    /// included. A panicking behavior is recorded as faulted (unless
    /// `record_panics` is off) and the panic then resumes unchanged.
    pub fn dispatch(&self, arguments: ArgumentValueSet) -> CallResult {
        let method = arguments.method().qualified_name();
        let span = decoy_core::dispatch_span!(self.name, self.id, method);
        let _entered = span.enter();

        if self.settings.log_calls {
            debug!(
                arguments = %arguments.render(self.settings.max_value_display_len),
                "call intercepted"
            );
        }
        if !self.dispatcher.is_empty() {
            self.dispatcher
                .emit_call_intercepted(&CallInterceptedEvent {
                    fake_id: self.id,
                    method: method.clone(),
                    arguments: arguments.values().iter().map(Value::to_json).collect(),
                });
        }

        let resolution = self.rules.resolve(&arguments);

        let result = if self.settings.record_panics {
            match panic::catch_unwind(AssertUnwindSafe(|| self.execute(&resolution, &arguments))) {
                Ok(result) => result,
                Err(payload) => {
                    let fault = Fault::from_panic(&*payload);
                    self.complete(
                        &span,
                        method,
                        arguments,
                        CallOutcome::Faulted(fault),
                        resolution.rule_id,
                    );
                    panic::resume_unwind(payload);
                }
            }
        } else {
            self.execute(&resolution, &arguments)
        };

        self.complete(
            &span,
            method,
            arguments,
            CallOutcome::from(&result),
            resolution.rule_id,
        );
        result
    }

    fn execute(&self, resolution: &Resolution, arguments: &ArgumentValueSet) -> CallResult {
        let Some(behavior) = &resolution.behavior else {
            return self.unconfigured(arguments);
        };
        for action in behavior.actions() {
            action(arguments);
        }
        let method = arguments.method();
        match behavior.result() {
            ResultBehavior::DefaultValue => Ok(ReturnValue::default_for(method)),
            ResultBehavior::Return(value) => Ok(ReturnValue::Value(value.clone())),
            ResultBehavior::ReturnLazily(produce) => {
                let value = produce(arguments);
                if method.is_void() {
                    Ok(ReturnValue::Void)
                } else {
                    Ok(ReturnValue::Value(value))
                }
            }
            ResultBehavior::Throw(fault) => Err(fault.clone()),
            ResultBehavior::ThrowLazily(produce) => Err(produce(arguments)),
            ResultBehavior::CallWrapped => self.call_wrapped(arguments),
        }
    }

    fn unconfigured(&self, arguments: &ArgumentValueSet) -> CallResult {
        match &self.wrapped {
            Some(target) => target.invoke(arguments),
            None => Ok(ReturnValue::default_for(arguments.method())),
        }
    }

    fn call_wrapped(&self, arguments: &ArgumentValueSet) -> CallResult {
        match &self.wrapped {
            Some(target) => target.invoke(arguments),
            None => {
                tracing::warn!(
                    fake = %self.name,
                    "calls_wrapped_method configured on a fake that wraps nothing; using default value"
                );
                Ok(ReturnValue::default_for(arguments.method()))
            }
        }
    }

    fn complete(
        &self,
        span: &Span,
        method: String,
        arguments: ArgumentValueSet,
        outcome: CallOutcome,
        rule_id: Option<RuleId>,
    ) {
        let faulted = matches!(outcome, CallOutcome::Faulted(_));
        let call = self.records.append(arguments, outcome, rule_id);
        span.record(fields::SEQUENCE, call.sequence());
        span.record(fields::FAULTED, faulted);
        if let Some(rule_id) = rule_id {
            span.record(fields::RULE_ID, rule_id.inner());
        }
        if !self.dispatcher.is_empty() {
            self.dispatcher.emit_call_completed(&CallCompletedEvent {
                fake_id: self.id,
                method,
                sequence: call.sequence(),
                rule_id,
                faulted,
            });
        }
    }
}

impl CallInterceptor for FakeController {
    fn intercept(&self, arguments: ArgumentValueSet) -> CallResult {
        self.dispatch(arguments)
    }
}

impl std::fmt::Debug for FakeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeController")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .field("recorded_calls", &self.records.len())
            .field("rules", &self.rules.len())
            .field("wrapping", &self.wrapped.is_some())
            .finish()
    }
}
