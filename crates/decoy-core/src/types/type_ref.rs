//! Declared parameter and return types.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::value::{ObjectRef, Value};
use crate::constants::ANY_OBJECT_TYPE;

/// Runtime category of a non-null `Value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Bool,
    Int,
    UInt,
    Float,
    Str,
    Object,
}

/// A declared type in a method signature.
///
/// Two `TypeRef`s are equal when name, kind and nullability agree, so
/// `Option<i64>` and `i64` are distinct parameter types.
#[derive(Clone)]
pub struct TypeRef {
    name: Arc<str>,
    kind: ValueKind,
    nullable: bool,
}

impl TypeRef {
    fn scalar(name: &str, kind: ValueKind) -> Self {
        Self {
            name: Arc::from(name),
            kind,
            nullable: false,
        }
    }

    /// Non-nullable `bool`.
    pub fn bool() -> Self {
        Self::scalar("bool", ValueKind::Bool)
    }

    /// Non-nullable signed integer.
    pub fn int() -> Self {
        Self::scalar("i64", ValueKind::Int)
    }

    /// Non-nullable unsigned integer.
    pub fn uint() -> Self {
        Self::scalar("u64", ValueKind::UInt)
    }

    /// Non-nullable float.
    pub fn float() -> Self {
        Self::scalar("f64", ValueKind::Float)
    }

    /// Non-nullable string.
    pub fn string() -> Self {
        Self::scalar("String", ValueKind::Str)
    }

    /// The universal object type: accepts any object.
    pub fn any_object() -> Self {
        Self::scalar(ANY_OBJECT_TYPE, ValueKind::Object)
    }

    /// A concrete object type, named after `std::any::type_name::<T>()`.
    pub fn object_of<T: ?Sized>() -> Self {
        Self::scalar(std::any::type_name::<T>(), ValueKind::Object)
    }

    /// A named object type for contracts that are not Rust types.
    pub fn named_object(name: &str) -> Self {
        Self::scalar(name, ValueKind::Object)
    }

    /// The nullable form of this type (`Option<T>`).
    pub fn nullable(mut self) -> Self {
        if !self.nullable {
            self.name = Arc::from(format!("Option<{}>", self.name));
            self.nullable = true;
        }
        self
    }

    /// Declared type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value kind this type holds.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Whether `Value::Null` is accepted.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    fn base_name(&self) -> &str {
        if self.nullable {
            self.name
                .strip_prefix("Option<")
                .and_then(|s| s.strip_suffix('>'))
                .unwrap_or(&self.name)
        } else {
            &self.name
        }
    }

    /// Returns true if `value` may be bound to a parameter of this type.
    pub fn accepts(&self, value: &Value) -> bool {
        match value {
            Value::Null => self.nullable,
            Value::Object(o) => {
                self.kind == ValueKind::Object
                    && (self.base_name() == ANY_OBJECT_TYPE || self.base_name() == o.type_name())
            }
            other => other.kind() == Some(self.kind),
        }
    }

    /// The type-appropriate default: `Null` for nullable types, zero/empty
    /// for scalars, and a fresh `Dummy` for object types.
    pub fn default_value(&self) -> Value {
        if self.nullable {
            return Value::Null;
        }
        match self.kind {
            ValueKind::Bool => Value::Bool(false),
            ValueKind::Int => Value::Int(0),
            ValueKind::UInt => Value::UInt(0),
            ValueKind::Float => Value::Float(0.0),
            ValueKind::Str => Value::Str(Arc::from("")),
            ValueKind::Object => Value::Object(ObjectRef::dummy(self.base_name())),
        }
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.nullable == other.nullable && self.name == other.name
    }
}

impl Eq for TypeRef {}

impl Hash for TypeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.kind.hash(state);
        self.nullable.hash(state);
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeRef({})", self.name)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
