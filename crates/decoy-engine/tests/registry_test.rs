//! Tests for FakeRegistry creation, lookup, disposal and concurrency.

mod common;

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use rayon::prelude::*;

use decoy_core::config::DecoyConfig;
use decoy_core::errors::{CreationError, DecoyErrorCode, RegistryError};
use decoy_core::events::*;
use decoy_core::types::{MethodId, Value};
use decoy_engine::{
    ArgumentValueSet, CallInterceptor, CallSpecification, CallTemplate, Fake, Fault, FakeOptions,
    FakeRegistry, ProxyFactory, ProxyRequest, ReturnValue,
};

use common::*;

// A hand-written contract standing in for a generated proxy.
trait Shop: Send + Sync {
    fn price(&self, item: &str, quantity: i64) -> Result<i64, Fault>;
    fn restock(&self, item: &str) -> Result<(), Fault>;
}

struct ShopProxy {
    interceptor: Arc<dyn CallInterceptor>,
    price: MethodId,
    restock: MethodId,
}

impl Shop for ShopProxy {
    fn price(&self, item: &str, quantity: i64) -> Result<i64, Fault> {
        let args = ArgumentValueSet::new(self.price.clone(), [item.into(), quantity.into()])
            .map_err(Fault::new)?;
        let value = self.interceptor.intercept(args)?.into_value();
        Ok(value.and_then(|v| v.as_i64()).unwrap_or_default())
    }

    fn restock(&self, item: &str) -> Result<(), Fault> {
        let args =
            ArgumentValueSet::new(self.restock.clone(), [item.into()]).map_err(Fault::new)?;
        self.interceptor.intercept(args).map(drop)
    }
}

struct ShopFactory;

impl ProxyFactory<dyn Shop> for ShopFactory {
    fn create(
        &self,
        interceptor: Arc<dyn CallInterceptor>,
        _request: &ProxyRequest,
    ) -> Result<Arc<dyn Shop>, CreationError> {
        Ok(Arc::new(ShopProxy {
            interceptor,
            price: price(),
            restock: restock(),
        }))
    }

    fn type_name(&self) -> &str {
        "shops::Shop"
    }
}

struct FailingFactory;

impl ProxyFactory<dyn Shop> for FailingFactory {
    fn create(
        &self,
        _interceptor: Arc<dyn CallInterceptor>,
        request: &ProxyRequest,
    ) -> Result<Arc<dyn Shop>, CreationError> {
        Err(CreationError::ProxyFailed {
            type_name: request.type_name.clone(),
            message: "no proxy available".to_string(),
        })
    }
}

fn registry() -> FakeRegistry {
    FakeRegistry::new(DecoyConfig::default())
}

// ── Creation ──

#[test]
fn default_name_comes_from_config() {
    let registry = registry();
    let shop = registry.create_default(&ShopFactory).unwrap();
    assert_eq!(shop.name(), "Faked Shop");
    assert_eq!(shop.controller().type_name(), "shops::Shop");
}

#[test]
fn named_option_wins() {
    let registry = registry();
    let shop = registry
        .create(&ShopFactory, FakeOptions::new().named("corner shop"))
        .unwrap();
    assert_eq!(shop.name(), "corner shop");
}

#[test]
fn invalid_options_rejected() {
    let registry = registry();
    let err = registry
        .create(&ShopFactory, FakeOptions::new().named("  "))
        .unwrap_err();
    assert!(matches!(err, CreationError::InvalidOptions { .. }));

    let err = registry
        .create(
            &ShopFactory,
            FakeOptions::new()
                .implements_named("Audit")
                .implements_named("Audit"),
        )
        .unwrap_err();
    assert!(matches!(err, CreationError::InvalidOptions { .. }));
    assert!(registry.is_empty());
}

#[test]
fn factory_failure_propagates() {
    let registry = registry();
    let err = registry.create_default(&FailingFactory).unwrap_err();
    assert_eq!(err.error_code(), "CREATION_FAILED");
    assert!(registry.is_empty());
}

#[test]
fn configure_actions_run_in_order_before_return() {
    let registry = registry();
    let runs = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&runs);
    let options = FakeOptions::<dyn Shop>::new()
        .configure_fake(|fake| {
            let spec = CallTemplate::new(price()).literal("apple").ignored().build().unwrap();
            fake.call_to(spec).returns(5).unwrap();
        })
        .configure_fake(move |fake| {
            counted.fetch_add(1, Ordering::SeqCst);
            let spec = CallSpecification::any_arguments(price());
            fake.call_to(spec).returns(1).unwrap();
        });

    let shop = registry.create(&ShopFactory, options).unwrap();
    assert_eq!(runs.load(Ordering::SeqCst), 1);
    // The second action registered last, so it is searched first.
    assert_eq!(shop.price("apple", 1).unwrap(), 1);
    assert_eq!(shop.rules().len(), 2);
}

#[test]
fn implements_and_constructor_arguments_reach_the_factory() {
    struct Inspecting(Arc<std::sync::Mutex<Option<ProxyRequest>>>);
    impl ProxyFactory<dyn Shop> for Inspecting {
        fn create(
            &self,
            interceptor: Arc<dyn CallInterceptor>,
            request: &ProxyRequest,
        ) -> Result<Arc<dyn Shop>, CreationError> {
            *self.0.lock().unwrap() = Some(request.clone());
            ShopFactory.create(interceptor, request)
        }
    }

    let seen = Arc::new(std::sync::Mutex::new(None));
    let registry = registry();
    let shop = registry
        .create(
            &Inspecting(Arc::clone(&seen)),
            FakeOptions::new()
                .with_arguments_for_constructor([1, 2])
                .implements_named("Audit"),
        )
        .unwrap();

    let request = seen.lock().unwrap().clone().unwrap();
    assert_eq!(request.constructor_arguments, [Value::Int(1), Value::Int(2)]);
    assert_eq!(request.additional_interfaces, ["Audit"]);
    assert_eq!(request.fake_name, "Faked Shop");
    assert!(shop.implements("Audit"));
    assert!(!shop.implements("Ledger"));
}

#[test]
fn wrapping_option_delegates_unconfigured_calls() {
    let registry = registry();
    let target = |args: &ArgumentValueSet| -> decoy_engine::CallResult {
        if args.method().name() == "price" {
            Ok(ReturnValue::Value(Value::Int(99)))
        } else {
            Ok(ReturnValue::Void)
        }
    };
    let shop = registry
        .create(&ShopFactory, FakeOptions::new().wrapping(target))
        .unwrap();
    assert_eq!(shop.price("apple", 1).unwrap(), 99);
}

// ── Lookup ──

#[test]
fn lookup_by_instance() {
    let registry = registry();
    let shop = registry.create_default(&ShopFactory).unwrap();
    shop.restock("apple").unwrap();

    let instance: &dyn Shop = &**shop.instance();
    assert!(registry.is_fake(instance));
    assert_eq!(registry.get_calls(instance).unwrap().len(), 1);
    assert_eq!(registry.clear_recorded_calls(instance).unwrap(), 1);

    registry
        .call_to(instance, CallSpecification::any_arguments(price()))
        .unwrap()
        .returns(3)
        .unwrap();
    assert_eq!(shop.price("pear", 1).unwrap(), 3);
    assert_eq!(registry.clear_configuration(instance).unwrap(), 1);
    assert_eq!(shop.price("pear", 1).unwrap(), 0);
}

#[test]
fn unknown_object_is_no_fake_associated() {
    let registry = registry();
    let not_a_fake = 5u32;
    let err = registry.get_calls(&not_a_fake).unwrap_err();
    assert!(matches!(err, RegistryError::NoFakeAssociated { .. }));
    assert!(registry.clear_configuration(&not_a_fake).is_err());
}

// ── Disposal ──

#[test]
fn dispose_removes_lookup_but_keeps_handle() {
    let registry = registry();
    let shop = registry.create_default(&ShopFactory).unwrap();
    assert_eq!(registry.len(), 1);

    assert!(registry.dispose(&shop));
    assert!(!registry.dispose(&shop));
    assert!(registry.is_empty());
    assert!(registry.get_calls(&**shop.instance()).is_err());

    shop.restock("apple").unwrap();
    assert_eq!(shop.get_calls().len(), 1);
}

#[test]
fn dropped_fake_does_not_resolve_other_objects() {
    let registry = registry();
    for _ in 0..20 {
        let shop = registry.create_default(&ShopFactory).unwrap();
        shop.restock("apple").unwrap();
        drop(shop);

        let other: Arc<[usize; 2]> = Arc::new([7, 7]);
        let err = registry.get_calls(&*other).unwrap_err();
        assert!(matches!(err, RegistryError::NoFakeAssociated { .. }));
        assert!(!registry.is_fake(&*other));
    }
    assert_eq!(registry.len(), 0);
    assert!(registry.is_empty());
    registry.prune();
    assert_eq!(registry.len(), 0);
}

#[test]
fn create_prunes_released_fakes() {
    let registry = registry();
    for _ in 0..10 {
        registry.create_default(&ShopFactory).unwrap();
    }
    let kept = registry.create_default(&ShopFactory).unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.prune(), 0);
    assert!(registry.is_fake(&**kept.instance()));
}

#[test]
fn outstanding_instance_keeps_fake_registered() {
    let registry = registry();
    let shop = registry.create_default(&ShopFactory).unwrap();
    let instance: Arc<dyn Shop> = Arc::clone(shop.instance());
    drop(shop);

    assert!(registry.is_fake(&*instance));
    instance.restock("apple").unwrap();
    assert_eq!(registry.get_calls(&*instance).unwrap().len(), 1);

    drop(instance);
    assert!(registry.is_empty());
}

#[test]
fn panicking_configure_action_unregisters_the_fake() {
    let registry = registry();
    let kept: Arc<Mutex<Option<Arc<dyn Shop>>>> = Arc::default();
    let slot = Arc::clone(&kept);
    let options = FakeOptions::new().configure_fake(move |fake: &Fake<dyn Shop>| {
        *slot.lock().unwrap() = Some(Arc::clone(fake.instance()));
        panic!("setup failed");
    });

    let result = panic::catch_unwind(AssertUnwindSafe(|| registry.create(&ShopFactory, options)));
    assert!(result.is_err());

    let instance = kept.lock().unwrap().take().unwrap();
    assert!(!registry.is_fake(&*instance));
    assert!(registry.get_calls(&*instance).is_err());
    assert!(registry.is_empty());
}

#[test]
fn registry_events() {
    #[derive(Default)]
    struct Lifecycle {
        created: AtomicUsize,
        disposed: AtomicUsize,
    }
    impl FakeEventHandler for Lifecycle {
        fn on_fake_created(&self, event: &FakeCreatedEvent) {
            assert_eq!(event.fake_name, "Faked Shop");
            self.created.fetch_add(1, Ordering::SeqCst);
        }
        fn on_fake_disposed(&self, event: &FakeDisposedEvent) {
            assert_eq!(event.recorded_calls, 1);
            self.disposed.fetch_add(1, Ordering::SeqCst);
        }
    }

    let lifecycle = Arc::new(Lifecycle::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(lifecycle.clone());
    let registry = FakeRegistry::with_dispatcher(DecoyConfig::default(), dispatcher);

    let shop = registry.create_default(&ShopFactory).unwrap();
    shop.restock("apple").unwrap();
    registry.dispose(&shop);

    assert_eq!(lifecycle.created.load(Ordering::SeqCst), 1);
    assert_eq!(lifecycle.disposed.load(Ordering::SeqCst), 1);
}

#[test]
fn global_registry_is_a_singleton() {
    let a = FakeRegistry::global() as *const FakeRegistry;
    let b = FakeRegistry::global() as *const FakeRegistry;
    assert_eq!(a, b);
}

// ── Concurrency ──

#[test]
fn concurrent_calls_on_one_fake_are_all_recorded() {
    let registry = registry();
    let shop = registry.create_default(&ShopFactory).unwrap();
    shop.call_to(CallSpecification::any_arguments(price()))
        .returns_lazily(|args| args.get(1).cloned().unwrap_or(Value::Int(0)));

    (0..1_000i64).into_par_iter().for_each(|i| {
        assert_eq!(shop.price("apple", i).unwrap(), i);
    });

    let calls = shop.get_calls();
    assert_eq!(calls.len(), 1_000);
    let sequences: Vec<u64> = calls.iter().map(|c| c.sequence()).collect();
    assert_eq!(sequences, (1..=1_000).collect::<Vec<u64>>());
    let mut quantities: Vec<i64> = calls
        .iter()
        .map(|c| c.return_value().unwrap().as_i64().unwrap())
        .collect();
    quantities.sort_unstable();
    assert_eq!(quantities, (0..1_000).collect::<Vec<i64>>());
}

#[test]
fn concurrent_capped_rule_applies_exactly_n_times() {
    let registry = registry();
    let shop = registry.create_default(&ShopFactory).unwrap();
    shop.call_to(CallSpecification::any_arguments(price()))
        .returns(7)
        .unwrap()
        .number_of_times(100);

    let hits: usize = (0..1_000)
        .into_par_iter()
        .map(|_| usize::from(shop.price("apple", 1).unwrap() == 7))
        .sum();
    assert_eq!(hits, 100);
    assert!(shop.rules()[0].exhausted);
}

#[test]
fn distinct_fakes_do_not_share_state() {
    let registry = registry();
    let shops: Vec<_> = (0..16)
        .map(|_| registry.create_default(&ShopFactory).unwrap())
        .collect();

    shops.par_iter().enumerate().for_each(|(i, shop)| {
        for _ in 0..=i {
            shop.restock("apple").unwrap();
        }
        shop.call_to(CallSpecification::any_arguments(price()))
            .returns(i as i64)
            .unwrap();
    });

    for (i, shop) in shops.iter().enumerate() {
        assert_eq!(shop.get_calls().len(), i + 1);
        assert_eq!(shop.price("x", 0).unwrap(), i as i64);
    }
    assert_eq!(registry.len(), 16);
}
