//! `Counter`: a contract over nullable integers.

use std::sync::{Arc, OnceLock};

use decoy_core::errors::CreationError;
use decoy_core::types::{MethodId, TypeRef, Value};
use decoy_engine::{
    ArgumentValueSet, CallInterceptor, CallResult, Fault, ProxyFactory, ProxyRequest,
};

use crate::declare;

pub trait Counter: Send + Sync {
    fn record(&self, amount: Option<i64>) -> Result<(), Fault>;
    fn current(&self) -> Result<Option<i64>, Fault>;
}

pub struct CounterMethods {
    pub record: MethodId,
    pub current: MethodId,
}

/// Method identities of `Counter`, built once.
pub fn counter_methods() -> &'static CounterMethods {
    static METHODS: OnceLock<CounterMethods> = OnceLock::new();
    METHODS.get_or_init(|| CounterMethods {
        record: declare(
            MethodId::builder("Counter", "record").param("amount", TypeRef::int().nullable()),
        ),
        current: declare(MethodId::builder("Counter", "current").returns(TypeRef::int().nullable())),
    })
}

struct CounterProxy {
    interceptor: Arc<dyn CallInterceptor>,
}

impl CounterProxy {
    fn call(&self, method: &MethodId, values: Vec<Value>) -> CallResult {
        let arguments = ArgumentValueSet::new(method.clone(), values).map_err(Fault::new)?;
        self.interceptor.intercept(arguments)
    }
}

impl Counter for CounterProxy {
    fn record(&self, amount: Option<i64>) -> Result<(), Fault> {
        self.call(&counter_methods().record, vec![amount.into()])
            .map(drop)
    }

    fn current(&self) -> Result<Option<i64>, Fault> {
        self.call(&counter_methods().current, Vec::new())
            .map(|r| r.into_value().and_then(|v| v.as_i64()))
    }
}

pub struct CounterProxyFactory;

impl ProxyFactory<dyn Counter> for CounterProxyFactory {
    fn create(
        &self,
        interceptor: Arc<dyn CallInterceptor>,
        _request: &ProxyRequest,
    ) -> Result<Arc<dyn Counter>, CreationError> {
        Ok(Arc::new(CounterProxy { interceptor }))
    }
}
