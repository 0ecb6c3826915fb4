//! Dynamic argument and return values.
//!
//! A faked call carries its arguments as `Value`s so that a single
//! recording and matching engine can serve every contract. Scalars compare
//! structurally; objects compare by identity (`Arc::ptr_eq`), which is what
//! "the recorded return value is the value the caller received" means.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::type_ref::ValueKind;

/// A reference-counted, type-erased object passed through a fake.
#[derive(Clone)]
pub struct ObjectRef {
    type_name: Arc<str>,
    inner: Arc<dyn Any + Send + Sync>,
}

impl ObjectRef {
    /// Wrap a value, recording `std::any::type_name::<T>()` as its type.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wrap an existing `Arc` without reallocating. Identity is preserved.
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            type_name: Arc::from(std::any::type_name::<T>()),
            inner: value,
        }
    }

    /// A fresh placeholder object standing in for `type_name`.
    pub fn dummy(type_name: &str) -> Self {
        Self {
            type_name: Arc::from(type_name),
            inner: Arc::new(Dummy {
                type_name: Arc::from(type_name),
            }),
        }
    }

    /// Type name recorded when the object was wrapped.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Borrow the wrapped value as `T`, if that is its concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Returns true if this is a `Dummy` placeholder.
    pub fn is_dummy(&self) -> bool {
        self.inner.is::<Dummy>()
    }

    /// Identity comparison: both refer to the same allocation.
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Address of the wrapped allocation, stable while any clone is alive.
    pub fn address(&self) -> usize {
        Arc::as_ptr(&self.inner) as *const () as usize
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectRef({} @ {:#x})", self.type_name, self.address())
    }
}

/// Placeholder object produced as the default return value of object-typed methods.
#[derive(Debug)]
pub struct Dummy {
    type_name: Arc<str>,
}

impl Dummy {
    /// Type this placeholder stands in for.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// A single argument or return value.
#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(Arc<str>),
    Object(ObjectRef),
}

impl Value {
    /// Convenience constructor for object values.
    pub fn object<T: std::any::Any + Send + Sync>(value: T) -> Self {
        Value::Object(ObjectRef::new(value))
    }

    /// Returns true for `Value::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The runtime kind, or `None` for `Null`.
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Value::Null => None,
            Value::Bool(_) => Some(ValueKind::Bool),
            Value::Int(_) => Some(ValueKind::Int),
            Value::UInt(_) => Some(ValueKind::UInt),
            Value::Float(_) => Some(ValueKind::Float),
            Value::Str(_) => Some(ValueKind::Str),
            Value::Object(_) => Some(ValueKind::Object),
        }
    }

    /// The boolean payload, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer payload, if this is an `Int`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The unsigned payload, if this is a `UInt`.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::UInt(u) => Some(*u),
            _ => None,
        }
    }

    /// The float payload, if this is a `Float`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The string payload, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The object reference, if this is an `Object`.
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Numeric view used by ordering constraints. Strings and objects have none.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::UInt(u) => Some(*u as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Render for diagnostics, truncating long renderings to `max_len` chars.
    pub fn render(&self, max_len: usize) -> String {
        let full = self.to_string();
        if full.chars().count() <= max_len {
            return full;
        }
        let mut truncated: String = full.chars().take(max_len.saturating_sub(3)).collect();
        truncated.push_str("...");
        truncated
    }

    /// JSON view for event payloads. Objects render as their type name.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::UInt(u) => serde_json::Value::from(*u),
            Value::Float(f) => serde_json::Value::from(*f),
            Value::Str(s) => serde_json::Value::String(s.to_string()),
            Value::Object(o) => serde_json::json!({ "object": o.type_name() }),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::UInt(a), Value::UInt(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::UInt(u) => write!(f, "{u}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::Object(o) => write!(f, "<{}>", o.type_name()),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::UInt(v as u64)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::UInt(v)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::UInt(v as u64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(Arc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(Arc::from(v))
    }
}

impl From<ObjectRef> for Value {
    fn from(v: ObjectRef) -> Self {
        Value::Object(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
