//! FakeRegistry: instance-to-controller lookup via DashMap.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, OnceLock, Weak};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::{debug, warn};

use decoy_core::config::DecoyConfig;
use decoy_core::errors::{CreationError, RegistryError};
use decoy_core::events::{EventDispatcher, FakeCreatedEvent, FakeDisposedEvent};
use decoy_core::types::ObjectId;

use super::fake::Fake;
use super::options::{FakeOptions, ProxyFactory, ProxyRequest};
use crate::configuration::RuleConfigurator;
use crate::controller::{DispatchSettings, FakeController};
use crate::interceptor::CallInterceptor;
use crate::recording::CompletedCall;
use crate::specification::CallSpecification;

static GLOBAL: OnceLock<FakeRegistry> = OnceLock::new();

/// Whether a registered proxy still has strong owners.
trait InstanceLiveness: Send + Sync {
    fn is_alive(&self) -> bool;
}

impl<T: ?Sized + Send + Sync> InstanceLiveness for Weak<T> {
    fn is_alive(&self) -> bool {
        self.strong_count() > 0
    }
}

/// A registered controller plus a weak link to the proxy it serves.
///
/// The weak link pins the proxy's allocation, so its address cannot be
/// handed to another object while the entry exists.
struct RegisteredFake {
    controller: Arc<FakeController>,
    instance: Box<dyn InstanceLiveness>,
}

impl RegisteredFake {
    fn is_alive(&self) -> bool {
        self.instance.is_alive()
    }
}

/// Creates fakes and maps each proxy instance back to its controller.
///
/// An entry is live while any strong reference to its proxy exists and
/// until `dispose` is called. Entries whose proxy has been released never
/// resolve; they are pruned on lookup misses and on every `create`.
pub struct FakeRegistry {
    fakes: DashMap<ObjectId, RegisteredFake>,
    dispatcher: Arc<EventDispatcher>,
    config: DecoyConfig,
}

impl FakeRegistry {
    /// An empty registry whose fakes use `config`.
    pub fn new(config: DecoyConfig) -> Self {
        Self::with_dispatcher(config, EventDispatcher::new())
    }

    /// A registry whose fakes report lifecycle events to `dispatcher`.
    pub fn with_dispatcher(config: DecoyConfig, dispatcher: EventDispatcher) -> Self {
        Self {
            fakes: DashMap::new(),
            dispatcher: Arc::new(dispatcher),
            config,
        }
    }

    /// Process-wide registry, configured from the working directory on
    /// first use. Falls back to defaults if the config cannot be loaded.
    pub fn global() -> &'static FakeRegistry {
        GLOBAL.get_or_init(|| {
            let config = std::env::current_dir()
                .map_err(|e| e.to_string())
                .and_then(|root| DecoyConfig::load(&root, None).map_err(|e| e.to_string()))
                .unwrap_or_else(|e| {
                    warn!(error = %e, "failed to load decoy config; using defaults");
                    DecoyConfig::default()
                });
            FakeRegistry::new(config)
        })
    }

    /// Configuration applied to fakes created here.
    pub fn config(&self) -> &DecoyConfig {
        &self.config
    }

    /// Dispatcher shared by every fake created here.
    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    // ── Creation ──

    /// Create a fake with default options.
    pub fn create_default<T, F>(&self, factory: &F) -> Result<Fake<T>, CreationError>
    where
        T: ?Sized + Send + Sync + 'static,
        F: ProxyFactory<T> + ?Sized,
    {
        self.create(factory, FakeOptions::default())
    }

    /// Build a controller, have `factory` wrap it in a proxy, register the
    /// proxy, then run the configuration actions against the new fake.
    ///
    /// If a configuration action panics the fake is unregistered before
    /// the panic resumes.
    pub fn create<T, F>(
        &self,
        factory: &F,
        options: FakeOptions<T>,
    ) -> Result<Fake<T>, CreationError>
    where
        T: ?Sized + Send + Sync + 'static,
        F: ProxyFactory<T> + ?Sized,
    {
        let type_name = factory.type_name().to_string();
        options.validate(&type_name)?;

        let fake_name = match options.name() {
            Some(name) => name.to_string(),
            None => self.config.fakes.default_name_for(&type_name),
        };
        let mut controller = FakeController::new(
            &fake_name,
            &type_name,
            DispatchSettings::from(&self.config),
            Arc::clone(&self.dispatcher),
        );
        if let Some(target) = options.wrapped() {
            controller = controller.with_wrapped(Arc::clone(target));
        }
        let controller = Arc::new(controller);

        let request = ProxyRequest {
            type_name: type_name.clone(),
            fake_name: fake_name.clone(),
            constructor_arguments: options.constructor_arguments().to_vec(),
            additional_interfaces: options.additional_interfaces().to_vec(),
        };
        let interceptor: Arc<dyn CallInterceptor> = controller.clone();
        let instance = factory.create(interceptor, &request)?;

        let fake = Fake::new(
            instance,
            Arc::clone(&controller),
            options.additional_interfaces().to_vec(),
        );
        let object_id = fake.object_id();
        let entry = RegisteredFake {
            controller: Arc::clone(&controller),
            instance: Box::new(Arc::downgrade(fake.instance())),
        };
        self.prune();
        match self.fakes.entry(object_id) {
            Entry::Occupied(mut existing) => {
                if existing.get().is_alive() {
                    return Err(RegistryError::AlreadyRegistered {
                        object: object_id.to_string(),
                        fake: existing.get().controller.name().to_string(),
                    }
                    .into());
                }
                existing.insert(entry);
            }
            Entry::Vacant(slot) => {
                slot.insert(entry);
            }
        }

        let configured = panic::catch_unwind(AssertUnwindSafe(|| {
            for action in options.configure_actions() {
                action(&fake);
            }
        }));
        if let Err(payload) = configured {
            self.fakes
                .remove_if(&object_id, |_, e| Arc::ptr_eq(&e.controller, &controller));
            warn!(fake = %fake_name, object = %object_id, "configuration action panicked; fake unregistered");
            panic::resume_unwind(payload);
        }

        debug!(fake = %fake_name, fake_id = %controller.id(), object = %object_id, "fake created");
        if !self.dispatcher.is_empty() {
            self.dispatcher.emit_fake_created(&FakeCreatedEvent {
                fake_id: controller.id(),
                fake_name,
                type_name,
            });
        }
        Ok(fake)
    }

    // ── Lookup ──

    /// The controller behind `instance`.
    ///
    /// Fails with `NoFakeAssociated` when `instance` was never registered,
    /// was disposed, or belongs to a fake whose proxy has been released.
    pub fn controller_for<T: ?Sized>(
        &self,
        instance: &T,
    ) -> Result<Arc<FakeController>, RegistryError> {
        let object_id = ObjectId::of(instance);
        let live = self
            .fakes
            .get(&object_id)
            .and_then(|entry| entry.is_alive().then(|| Arc::clone(&entry.controller)));
        match live {
            Some(controller) => Ok(controller),
            None => {
                self.fakes.remove_if(&object_id, |_, e| !e.is_alive());
                Err(RegistryError::NoFakeAssociated {
                    object: object_id.to_string(),
                })
            }
        }
    }

    /// Whether `instance` is a live fake registered here.
    pub fn is_fake<T: ?Sized>(&self, instance: &T) -> bool {
        self.fakes
            .get(&ObjectId::of(instance))
            .is_some_and(|entry| entry.is_alive())
    }

    /// Recorded calls of the fake behind `instance`.
    pub fn get_calls<T: ?Sized>(
        &self,
        instance: &T,
    ) -> Result<Vec<Arc<CompletedCall>>, RegistryError> {
        Ok(self.controller_for(instance)?.get_calls())
    }

    /// Clear the recorded calls of the fake behind `instance`.
    pub fn clear_recorded_calls<T: ?Sized>(&self, instance: &T) -> Result<usize, RegistryError> {
        Ok(self.controller_for(instance)?.clear_recorded_calls())
    }

    /// Clear the configured rules of the fake behind `instance`.
    pub fn clear_configuration<T: ?Sized>(&self, instance: &T) -> Result<usize, RegistryError> {
        Ok(self.controller_for(instance)?.clear_configuration())
    }

    /// Start configuring calls on the fake behind `instance`.
    pub fn call_to<T: ?Sized>(
        &self,
        instance: &T,
        specification: CallSpecification,
    ) -> Result<RuleConfigurator, RegistryError> {
        Ok(self.controller_for(instance)?.call_to(specification))
    }

    // ── Teardown ──

    /// Remove `fake` from the registry. Returns false if it was not
    /// registered here. The handle keeps working; only lookups stop.
    pub fn dispose<T: ?Sized>(&self, fake: &Fake<T>) -> bool {
        let removed = self.fakes.remove_if(&fake.object_id(), |_, e| {
            Arc::ptr_eq(&e.controller, fake.controller())
        });
        let Some((object_id, RegisteredFake { controller, .. })) = removed else {
            return false;
        };
        let recorded_calls = controller.recorded_call_count();
        debug!(fake = %controller.name(), object = %object_id, recorded_calls, "fake disposed");
        if !self.dispatcher.is_empty() {
            self.dispatcher.emit_fake_disposed(&FakeDisposedEvent {
                fake_id: controller.id(),
                fake_name: controller.name().to_string(),
                recorded_calls,
            });
        }
        true
    }

    /// Drop entries whose proxy has been released without `dispose`.
    /// Returns how many were removed.
    pub fn prune(&self) -> usize {
        let before = self.fakes.len();
        self.fakes.retain(|_, e| e.is_alive());
        let pruned = before.saturating_sub(self.fakes.len());
        if pruned > 0 {
            debug!(pruned, "released fakes pruned");
        }
        pruned
    }

    /// Number of live registered fakes.
    pub fn len(&self) -> usize {
        self.fakes.iter().filter(|entry| entry.is_alive()).count()
    }

    /// Whether no live fake is registered.
    pub fn is_empty(&self) -> bool {
        !self.fakes.iter().any(|entry| entry.is_alive())
    }
}
