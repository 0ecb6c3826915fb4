//! Tests for faults, return values, the behavior registry and the record store.

mod common;

use std::sync::Arc;

use decoy_core::types::{FakeId, Value};
use decoy_engine::behavior::{
    Behavior, BehaviorRegistry, BehaviorRule, CallOutcome, Fault, ResultBehavior, ReturnValue,
};
use decoy_engine::{ArgumentValueSet, CallRecordStore, CallSpecification, CallTemplate};

use common::*;

#[derive(Debug, thiserror::Error)]
#[error("inventory error: {0}")]
struct InventoryError(&'static str);

// ── Fault ──

#[test]
fn fault_wraps_typed_errors() {
    let fault = Fault::new(InventoryError("empty"));
    assert_eq!(fault.to_string(), "inventory error: empty");
    assert_eq!(fault.downcast_ref::<InventoryError>().unwrap().0, "empty");
    assert!(!fault.is_panic());
}

#[test]
fn fault_identity_survives_clone() {
    let fault = Fault::msg("boom");
    let copy = fault.clone();
    assert!(fault.ptr_eq(&copy));
    assert!(!fault.ptr_eq(&Fault::msg("boom")));
}

#[test]
fn fault_from_panic_payloads() {
    let payload: Box<dyn std::any::Any + Send> = Box::new("static str");
    assert!(Fault::from_panic(&*payload).to_string().contains("static str"));
    let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("owned"));
    let fault = Fault::from_panic(&*payload);
    assert!(fault.is_panic());
    assert!(fault.to_string().contains("owned"));
}

// ── ReturnValue ──

#[test]
fn default_return_values() {
    assert_eq!(ReturnValue::default_for(&restock()), ReturnValue::Void);
    assert_eq!(
        ReturnValue::default_for(&price()),
        ReturnValue::Value(Value::Int(0))
    );
    assert!(ReturnValue::Void.is_void());
    assert_eq!(ReturnValue::Value(Value::Int(2)).into_value(), Some(Value::Int(2)));
}

// ── BehaviorRegistry ──

fn rule(item: &str, value: i64) -> BehaviorRule {
    let spec = CallTemplate::new(price()).literal(item).ignored().build().unwrap();
    BehaviorRule::new(
        spec,
        Behavior::new().with_result(ResultBehavior::Return(Value::Int(value))),
    )
}

#[test]
fn resolve_prefers_newest_rule() {
    let registry = BehaviorRegistry::new();
    let old = registry.register(rule("apple", 1));
    let new = registry.register(rule("apple", 2));

    let resolution = registry.resolve(&price_args("apple", 1));
    assert_eq!(resolution.rule_id, Some(new));
    assert_ne!(resolution.rule_id, Some(old));
    assert!(registry.resolve(&price_args("pear", 1)).is_default());
}

#[test]
fn exhausted_rules_stay_registered() {
    let registry = BehaviorRegistry::new();
    let id = registry.register(rule("apple", 1).with_limit(1));

    assert_eq!(registry.resolve(&price_args("apple", 1)).rule_id, Some(id));
    assert!(registry.resolve(&price_args("apple", 1)).is_default());
    assert_eq!(registry.len(), 1);

    let snapshot = &registry.snapshots()[0];
    assert!(snapshot.exhausted);
    assert_eq!(snapshot.applied, 1);
    assert_eq!(snapshot.result, "returns value");
}

#[test]
fn update_and_clear() {
    let registry = BehaviorRegistry::new();
    let id = registry.register(rule("apple", 1));
    assert!(registry.update(id, |r| assert_eq!(r.id(), id)));
    assert_eq!(registry.clear_all(), 1);
    assert!(!registry.update(id, |_| {}));
    assert!(registry.is_empty());
}

#[test]
fn snapshots_serialize() {
    let registry = BehaviorRegistry::new();
    registry.register(BehaviorRule::new(
        CallSpecification::any_arguments(restock()),
        Behavior::new().with_action(Arc::new(|_: &ArgumentValueSet| {})),
    ));
    let json = serde_json::to_value(registry.snapshots()).unwrap();
    assert_eq!(json[0]["specification"], "Shop.restock(item: <Ignored>)");
    assert_eq!(json[0]["actions"], 1);
    assert_eq!(json[0]["remaining"], serde_json::Value::Null);
}

// ── CallRecordStore ──

#[test]
fn store_assigns_sequences_and_clears() {
    let store = CallRecordStore::new(FakeId::next(), Arc::from("Faked Shop"));
    let first = store.append(
        price_args("apple", 1),
        CallOutcome::Returned(ReturnValue::Value(Value::Int(0))),
        None,
    );
    let second = store.append(
        args(&restock(), [Value::from("apple")]),
        CallOutcome::Faulted(Fault::msg("x")),
        None,
    );
    assert_eq!((first.sequence(), second.sequence()), (1, 2));
    assert_eq!(store.len(), 2);
    assert_eq!(second.to_string(), "2. Shop.restock(item: \"apple\") !! x");

    assert_eq!(store.clear(), 2);
    assert!(store.is_empty());
    let third = store.append(price_args("pear", 1), CallOutcome::Returned(ReturnValue::Void), None);
    assert_eq!(third.sequence(), 3);
}
