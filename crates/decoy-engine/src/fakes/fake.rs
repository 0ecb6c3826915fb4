//! Fake<T>: the handle returned at creation.

use std::ops::Deref;
use std::sync::Arc;

use decoy_core::errors::SpecificationError;
use decoy_core::types::{FakeId, ObjectId};

use crate::assertions::CallAssertion;
use crate::behavior::RuleSnapshot;
use crate::configuration::RuleConfigurator;
use crate::controller::FakeController;
use crate::recording::CompletedCall;
use crate::specification::{CallSpecification, CallTemplate};

/// A fake instance of `T` together with its controller.
///
/// Derefs to the proxy, so `fake.a_method()` calls through it. The
/// registry holds only a weak link to the proxy: once every handle and
/// every clone of the instance is dropped, lookups stop resolving to
/// this fake even without `FakeRegistry::dispose`.
pub struct Fake<T: ?Sized> {
    instance: Arc<T>,
    controller: Arc<FakeController>,
    additional_interfaces: Arc<[String]>,
}

impl<T: ?Sized> Fake<T> {
    pub(crate) fn new(
        instance: Arc<T>,
        controller: Arc<FakeController>,
        additional_interfaces: Vec<String>,
    ) -> Self {
        Self {
            instance,
            controller,
            additional_interfaces: additional_interfaces.into(),
        }
    }

    /// The proxy instance.
    pub fn instance(&self) -> &Arc<T> {
        &self.instance
    }

    /// The controller recording this fake's calls.
    pub fn controller(&self) -> &Arc<FakeController> {
        &self.controller
    }

    /// Numeric identity of the controller.
    pub fn id(&self) -> FakeId {
        self.controller.id()
    }

    /// Registry key: the proxy's address.
    pub fn object_id(&self) -> ObjectId {
        ObjectId::of(&*self.instance)
    }

    /// Display name used in diagnostics.
    pub fn name(&self) -> &str {
        self.controller.name()
    }

    /// Snapshot of recorded calls in completion order.
    pub fn get_calls(&self) -> Vec<Arc<CompletedCall>> {
        self.controller.get_calls()
    }

    /// Forget every recorded call; returns how many were removed.
    pub fn clear_recorded_calls(&self) -> usize {
        self.controller.clear_recorded_calls()
    }

    /// Discard every configured rule; returns how many were removed.
    pub fn clear_configuration(&self) -> usize {
        self.controller.clear_configuration()
    }

    /// Registered rules in search order, newest first.
    pub fn rules(&self) -> Vec<RuleSnapshot> {
        self.controller.rules()
    }

    /// Start configuring calls matching `specification`.
    pub fn call_to(&self, specification: CallSpecification) -> RuleConfigurator {
        self.controller.call_to(specification)
    }

    /// `call_to` for a template.
    pub fn call_to_template(
        &self,
        template: &CallTemplate,
    ) -> Result<RuleConfigurator, SpecificationError> {
        self.controller.call_to_template(template)
    }

    /// Assert on recorded calls matching `specification`.
    pub fn assert_that(&self, specification: CallSpecification) -> CallAssertion<'_> {
        self.controller.assert_that(specification)
    }

    /// Interfaces requested through `FakeOptions::implements`.
    pub fn additional_interfaces(&self) -> &[String] {
        &self.additional_interfaces
    }

    /// Whether `interface` was requested at creation.
    pub fn implements(&self, interface: &str) -> bool {
        self.additional_interfaces.iter().any(|i| i == interface)
    }
}

impl<T: ?Sized> Clone for Fake<T> {
    fn clone(&self) -> Self {
        Self {
            instance: Arc::clone(&self.instance),
            controller: Arc::clone(&self.controller),
            additional_interfaces: Arc::clone(&self.additional_interfaces),
        }
    }
}

impl<T: ?Sized> Deref for Fake<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.instance
    }
}

impl<T: ?Sized> std::fmt::Debug for Fake<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fake")
            .field("controller", &self.controller)
            .field("additional_interfaces", &self.additional_interfaces)
            .finish()
    }
}
