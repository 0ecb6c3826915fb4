//! Interceptable contracts and proxy factories for decoy tests.
//!
//! Each contract comes with its method identities, a proxy that funnels
//! every call through a `CallInterceptor`, and a `ProxyFactory` producing
//! that proxy. They stand in for generated proxies in integration tests.

pub mod counter;
pub mod foo;
pub mod supplier;

pub use counter::{counter_methods, Counter, CounterMethods, CounterProxyFactory};
pub use foo::{foo_methods, wrap_foo, Foo, FooMethods, FooProxyFactory};
pub use supplier::{supplier_method, ObjectSupplier, ObjectSupplierFactory};

use decoy_core::types::{MethodId, MethodIdBuilder};

/// Build a fixture method identity.
///
/// # Panics
/// Panics if the fixture declares the same parameter name twice.
fn declare(builder: MethodIdBuilder) -> MethodId {
    builder
        .build()
        .unwrap_or_else(|e| panic!("invalid fixture method: {e}"))
}
