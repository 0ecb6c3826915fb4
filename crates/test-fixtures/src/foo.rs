//! `Foo`: a small contract with overloaded and object-returning methods.

use std::sync::{Arc, OnceLock};

use decoy_core::errors::CreationError;
use decoy_core::types::{MethodId, TypeRef, Value};
use decoy_engine::{
    ArgumentValueSet, CallInterceptor, CallResult, Fault, ProxyFactory, ProxyRequest, ReturnValue,
    WrappedTarget,
};

use crate::declare;

pub trait Foo: Send + Sync {
    fn a_method(&self) -> Result<(), Fault>;
    fn another_method(&self) -> Result<(), Fault>;
    fn another_method_with(&self, text: &str) -> Result<(), Fault>;
    fn a_method_returning_an_object(&self) -> Result<Value, Fault>;
}

/// Method identities of `Foo`. Both `another_method` overloads share a
/// name and differ by parameter list.
pub struct FooMethods {
    pub a_method: MethodId,
    pub another_method: MethodId,
    pub another_method_with_text: MethodId,
    pub a_method_returning_an_object: MethodId,
}

/// Method identities of `Foo`, built once.
pub fn foo_methods() -> &'static FooMethods {
    static METHODS: OnceLock<FooMethods> = OnceLock::new();
    METHODS.get_or_init(|| FooMethods {
        a_method: declare(MethodId::builder("Foo", "a_method")),
        another_method: declare(MethodId::builder("Foo", "another_method")),
        another_method_with_text: declare(
            MethodId::builder("Foo", "another_method").param("text", TypeRef::string()),
        ),
        a_method_returning_an_object: declare(
            MethodId::builder("Foo", "a_method_returning_an_object")
                .returns(TypeRef::any_object()),
        ),
    })
}

struct FooProxy {
    interceptor: Arc<dyn CallInterceptor>,
}

impl FooProxy {
    fn call(&self, method: &MethodId, values: Vec<Value>) -> CallResult {
        let arguments = ArgumentValueSet::new(method.clone(), values).map_err(Fault::new)?;
        self.interceptor.intercept(arguments)
    }
}

impl Foo for FooProxy {
    fn a_method(&self) -> Result<(), Fault> {
        self.call(&foo_methods().a_method, Vec::new()).map(drop)
    }

    fn another_method(&self) -> Result<(), Fault> {
        self.call(&foo_methods().another_method, Vec::new()).map(drop)
    }

    fn another_method_with(&self, text: &str) -> Result<(), Fault> {
        self.call(&foo_methods().another_method_with_text, vec![text.into()])
            .map(drop)
    }

    fn a_method_returning_an_object(&self) -> Result<Value, Fault> {
        self.call(&foo_methods().a_method_returning_an_object, Vec::new())
            .map(|r| r.into_value().unwrap_or(Value::Null))
    }
}

/// Produces intercepting `Foo` proxies.
pub struct FooProxyFactory;

impl ProxyFactory<dyn Foo> for FooProxyFactory {
    fn create(
        &self,
        interceptor: Arc<dyn CallInterceptor>,
        request: &ProxyRequest,
    ) -> Result<Arc<dyn Foo>, CreationError> {
        if !request.constructor_arguments.is_empty() {
            return Err(CreationError::ProxyFailed {
                type_name: request.type_name.clone(),
                message: format!(
                    "Foo takes no constructor arguments, got {}",
                    request.constructor_arguments.len()
                ),
            });
        }
        Ok(Arc::new(FooProxy { interceptor }))
    }
}

struct FooTarget {
    real: Arc<dyn Foo>,
}

impl WrappedTarget for FooTarget {
    fn invoke(&self, arguments: &ArgumentValueSet) -> CallResult {
        let methods = foo_methods();
        let method = arguments.method();
        if *method == methods.a_method {
            self.real.a_method().map(|()| ReturnValue::Void)
        } else if *method == methods.another_method {
            self.real.another_method().map(|()| ReturnValue::Void)
        } else if *method == methods.another_method_with_text {
            let text = arguments
                .get_by_name("text")
                .map_err(Fault::new)?
                .as_str()
                .unwrap_or_default()
                .to_string();
            self.real.another_method_with(&text).map(|()| ReturnValue::Void)
        } else if *method == methods.a_method_returning_an_object {
            self.real
                .a_method_returning_an_object()
                .map(ReturnValue::Value)
        } else {
            Err(Fault::msg(format!("Foo has no method {method}")))
        }
    }
}

/// Route wrapped calls to a real `Foo`.
pub fn wrap_foo(real: Arc<dyn Foo>) -> Arc<dyn WrappedTarget> {
    Arc::new(FooTarget { real })
}
