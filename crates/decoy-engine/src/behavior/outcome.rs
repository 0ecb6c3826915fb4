//! Call outcomes: return values and faults.

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use decoy_core::types::{MethodId, Value};

/// What a successful call hands back.
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnValue {
    Void,
    Value(Value),
}

impl ReturnValue {
    /// The type-appropriate default for `method`: void, or the default
    /// value of its declared return type.
    pub fn default_for(method: &MethodId) -> Self {
        match method.return_type() {
            Some(ty) => ReturnValue::Value(ty.default_value()),
            None => ReturnValue::Void,
        }
    }

    /// The returned value, or `None` for void.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            ReturnValue::Value(v) => Some(v),
            ReturnValue::Void => None,
        }
    }

    /// Consume into the returned value, or `None` for void.
    pub fn into_value(self) -> Option<Value> {
        match self {
            ReturnValue::Value(v) => Some(v),
            ReturnValue::Void => None,
        }
    }

    /// Returns true for a void return.
    pub fn is_void(&self) -> bool {
        matches!(self, ReturnValue::Void)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct FaultMessage(String);

#[derive(Debug, thiserror::Error)]
#[error("behavior panicked: {0}")]
struct PanicMessage(String);

/// An error raised by a configured behavior.
///
/// Faults are the observable outcome of a faked call, not framework
/// errors: the controller records them and hands the same `Fault` (same
/// allocation) back to the caller.
#[derive(Clone)]
pub struct Fault {
    error: Arc<dyn Error + Send + Sync + 'static>,
    panicked: bool,
}

impl Fault {
    /// Wrap any error type.
    pub fn new<E: Error + Send + Sync + 'static>(error: E) -> Self {
        Self {
            error: Arc::new(error),
            panicked: false,
        }
    }

    /// A fault carrying only a message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(FaultMessage(message.into()))
    }

    /// A fault describing a panic payload caught during dispatch.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self {
            error: Arc::new(PanicMessage(message)),
            panicked: true,
        }
    }

    /// True if this fault stands for a panic that was re-raised.
    pub fn is_panic(&self) -> bool {
        self.panicked
    }

    /// The underlying error.
    pub fn error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.error.as_ref()
    }

    /// Borrow the wrapped error as `E`.
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.error.downcast_ref::<E>()
    }

    /// Identity comparison: both wrap the same error allocation.
    pub fn ptr_eq(&self, other: &Fault) -> bool {
        Arc::ptr_eq(&self.error, &other.error)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("error", &self.error.to_string())
            .field("panicked", &self.panicked)
            .finish()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.error.as_ref())
    }
}

/// The result a faked method hands back to its caller.
pub type CallResult = Result<ReturnValue, Fault>;

/// What a completed call records.
#[derive(Debug, Clone)]
pub enum CallOutcome {
    Returned(ReturnValue),
    Faulted(Fault),
}

impl From<&CallResult> for CallOutcome {
    fn from(result: &CallResult) -> Self {
        match result {
            Ok(v) => CallOutcome::Returned(v.clone()),
            Err(f) => CallOutcome::Faulted(f.clone()),
        }
    }
}
