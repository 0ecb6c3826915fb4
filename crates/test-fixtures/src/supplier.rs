//! A faked delegate: a closure that supplies an object.

use std::sync::{Arc, OnceLock};

use decoy_core::errors::CreationError;
use decoy_core::types::{MethodId, TypeRef, Value};
use decoy_engine::{ArgumentValueSet, CallInterceptor, Fault, ProxyFactory, ProxyRequest};

use crate::declare;

/// Delegate contract: no arguments, returns an object.
pub type ObjectSupplier = dyn Fn() -> Result<Value, Fault> + Send + Sync;

/// The delegate's single invokable method.
pub fn supplier_method() -> &'static MethodId {
    static METHOD: OnceLock<MethodId> = OnceLock::new();
    METHOD.get_or_init(|| {
        declare(MethodId::builder("ObjectSupplier", "invoke").returns(TypeRef::any_object()))
    })
}

pub struct ObjectSupplierFactory;

impl ProxyFactory<ObjectSupplier> for ObjectSupplierFactory {
    fn create(
        &self,
        interceptor: Arc<dyn CallInterceptor>,
        _request: &ProxyRequest,
    ) -> Result<Arc<ObjectSupplier>, CreationError> {
        let supplier: Arc<ObjectSupplier> = Arc::new(move || -> Result<Value, Fault> {
            let arguments = ArgumentValueSet::empty(supplier_method().clone()).map_err(Fault::new)?;
            interceptor
                .intercept(arguments)
                .map(|r| r.into_value().unwrap_or(Value::Null))
        });
        Ok(supplier)
    }

    fn type_name(&self) -> &str {
        "ObjectSupplier"
    }
}
