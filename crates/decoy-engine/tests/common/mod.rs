//! Shared helpers for decoy-engine integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use decoy_core::events::EventDispatcher;
use decoy_core::types::{MethodId, TypeRef, Value};
use decoy_engine::{ArgumentValueSet, DispatchSettings, FakeController};

/// `Shop.price(item: String, quantity: i64) -> i64`
pub fn price() -> MethodId {
    MethodId::builder("Shop", "price")
        .param("item", TypeRef::string())
        .param("quantity", TypeRef::int())
        .returns(TypeRef::int())
        .build()
        .unwrap()
}

/// `Shop.restock(item: String)`
pub fn restock() -> MethodId {
    MethodId::builder("Shop", "restock")
        .param("item", TypeRef::string())
        .build()
        .unwrap()
}

/// `Shop.discount(code: Option<i64>) -> Option<i64>`
pub fn discount() -> MethodId {
    MethodId::builder("Shop", "discount")
        .param("code", TypeRef::int().nullable())
        .returns(TypeRef::int().nullable())
        .build()
        .unwrap()
}

/// `Shop.receipt() -> object`
pub fn receipt() -> MethodId {
    MethodId::builder("Shop", "receipt")
        .returns(TypeRef::any_object())
        .build()
        .unwrap()
}

pub fn args<I: IntoIterator<Item = Value>>(method: &MethodId, values: I) -> ArgumentValueSet {
    ArgumentValueSet::new(method.clone(), values).unwrap()
}

pub fn price_args(item: &str, quantity: i64) -> ArgumentValueSet {
    args(&price(), [item.into(), quantity.into()])
}

pub fn controller() -> Arc<FakeController> {
    controller_with(DispatchSettings::default(), EventDispatcher::new())
}

pub fn controller_with(
    settings: DispatchSettings,
    dispatcher: EventDispatcher,
) -> Arc<FakeController> {
    Arc::new(FakeController::new(
        "Faked Shop",
        "Shop",
        settings,
        Arc::new(dispatcher),
    ))
}
