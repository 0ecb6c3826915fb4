//! FakeOptions and the proxy collaborator contract.

use std::sync::Arc;

use decoy_core::errors::CreationError;
use decoy_core::types::Value;

use super::fake::Fake;
use crate::interceptor::{CallInterceptor, WrappedTarget};

/// Action run against a freshly built fake before it is handed out.
pub type ConfigureAction<T> = Arc<dyn Fn(&Fake<T>) + Send + Sync>;

/// Options for creating one fake.
///
/// Configuration actions must be idempotent; callers may not rely on
/// them running exactly once.
pub struct FakeOptions<T: ?Sized> {
    name: Option<String>,
    constructor_arguments: Vec<Value>,
    additional_interfaces: Vec<String>,
    wrapped: Option<Arc<dyn WrappedTarget>>,
    configure_actions: Vec<ConfigureAction<T>>,
}

impl<T: ?Sized> Default for FakeOptions<T> {
    fn default() -> Self {
        Self {
            name: None,
            constructor_arguments: Vec::new(),
            additional_interfaces: Vec::new(),
            wrapped: None,
            configure_actions: Vec::new(),
        }
    }
}

impl<T: ?Sized> FakeOptions<T> {
    /// Options with no name, arguments, interfaces, wrapping or actions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Display name used in diagnostics instead of `"{prefix} {type}"`.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Arguments handed to the proxy factory for constructing the instance.
    pub fn with_arguments_for_constructor<I>(mut self, arguments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.constructor_arguments = arguments.into_iter().map(Into::into).collect();
        self
    }

    /// Ask the proxy to also implement `I`.
    pub fn implements<I: ?Sized>(self) -> Self {
        self.implements_named(std::any::type_name::<I>())
    }

    /// Record an additional interface by name.
    pub fn implements_named(mut self, interface: impl Into<String>) -> Self {
        self.additional_interfaces.push(interface.into());
        self
    }

    /// Delegate unconfigured calls to `target`.
    pub fn wrapping<W: WrappedTarget + 'static>(self, target: W) -> Self {
        self.wrapping_arc(Arc::new(target))
    }

    /// `wrapping` for a target that is already shared.
    pub fn wrapping_arc(mut self, target: Arc<dyn WrappedTarget>) -> Self {
        self.wrapped = Some(target);
        self
    }

    /// Run `action` against the built fake. Actions run in the order added.
    pub fn configure_fake<F>(mut self, action: F) -> Self
    where
        F: Fn(&Fake<T>) + Send + Sync + 'static,
    {
        self.configure_actions.push(Arc::new(action));
        self
    }

    /// Display name override, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Arguments handed to the proxy factory.
    pub fn constructor_arguments(&self) -> &[Value] {
        &self.constructor_arguments
    }

    /// Interfaces recorded through `implements`.
    pub fn additional_interfaces(&self) -> &[String] {
        &self.additional_interfaces
    }

    pub(crate) fn wrapped(&self) -> Option<&Arc<dyn WrappedTarget>> {
        self.wrapped.as_ref()
    }

    pub(crate) fn configure_actions(&self) -> &[ConfigureAction<T>] {
        &self.configure_actions
    }

    /// Reject blank names and interfaces listed twice.
    pub fn validate(&self, type_name: &str) -> Result<(), CreationError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(CreationError::InvalidOptions {
                    type_name: type_name.to_string(),
                    message: "fake name must not be blank".to_string(),
                });
            }
        }
        for (i, interface) in self.additional_interfaces.iter().enumerate() {
            if self.additional_interfaces[..i].contains(interface) {
                return Err(CreationError::InvalidOptions {
                    type_name: type_name.to_string(),
                    message: format!("interface {interface} listed more than once"),
                });
            }
        }
        Ok(())
    }
}

/// What the core asks of a proxy factory.
#[derive(Debug, Clone)]
pub struct ProxyRequest {
    pub type_name: String,
    pub fake_name: String,
    pub constructor_arguments: Vec<Value>,
    pub additional_interfaces: Vec<String>,
}

/// The external collaborator that produces interceptable instances.
///
/// A factory returns an instance of `T` whose every method funnels its
/// bound arguments through `interceptor` and returns what it returns.
pub trait ProxyFactory<T: ?Sized>: Send + Sync {
    fn create(
        &self,
        interceptor: Arc<dyn CallInterceptor>,
        request: &ProxyRequest,
    ) -> Result<Arc<T>, CreationError>;

    /// Type name used for diagnostics and default fake names.
    fn type_name(&self) -> &str {
        std::any::type_name::<T>()
    }
}
