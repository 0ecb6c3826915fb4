//! Method identities.
//!
//! A `MethodId` is a value type: it names a method by its declaring
//! contract, name, generic arguments, parameter types and return type, never
//! by a live handle. Cloning is a reference-count bump; equality and hashing
//! cover the full formal signature, so overloads that share a name are
//! distinct identities.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use smallvec::SmallVec;

use super::type_ref::TypeRef;
use crate::errors::ArgumentError;

/// A named, typed formal parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: Arc<str>,
    ty: TypeRef,
}

impl Parameter {
    /// Parameter name, unique within its method.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameter type.
    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }
}

#[derive(Debug)]
struct MethodInner {
    declaring_type: Arc<str>,
    name: Arc<str>,
    generic_args: SmallVec<[Arc<str>; 2]>,
    parameters: SmallVec<[Parameter; 4]>,
    return_type: Option<TypeRef>,
}

/// Identity of one method of a faked contract.
#[derive(Clone)]
pub struct MethodId {
    inner: Arc<MethodInner>,
}

impl MethodId {
    /// Start building the identity of `declaring_type::name`.
    pub fn builder(declaring_type: &str, name: &str) -> MethodIdBuilder {
        MethodIdBuilder {
            declaring_type: Arc::from(declaring_type),
            name: Arc::from(name),
            generic_args: SmallVec::new(),
            parameters: SmallVec::new(),
            return_type: None,
        }
    }

    /// Type that declares the method.
    pub fn declaring_type(&self) -> &str {
        &self.inner.declaring_type
    }

    /// Method name without the declaring type.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Generic arguments in declaration order.
    pub fn generic_args(&self) -> impl Iterator<Item = &str> {
        self.inner.generic_args.iter().map(|a| a.as_ref())
    }

    /// Parameters in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.inner.parameters
    }

    /// Number of formal parameters.
    pub fn arity(&self) -> usize {
        self.inner.parameters.len()
    }

    /// Declared return type, or `None` for a void method.
    pub fn return_type(&self) -> Option<&TypeRef> {
        self.inner.return_type.as_ref()
    }

    /// Returns true if the method has no return type.
    pub fn is_void(&self) -> bool {
        self.inner.return_type.is_none()
    }

    /// Case-sensitive positional lookup of a parameter name.
    pub fn parameter_index(&self, name: &str) -> Option<usize> {
        self.inner.parameters.iter().position(|p| p.name() == name)
    }

    /// `Foo.another_method`, the short form used in logs.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.inner.declaring_type, self.inner.name)
    }
}

impl PartialEq for MethodId {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.inner, &other.inner) {
            return true;
        }
        let (a, b) = (&self.inner, &other.inner);
        a.name == b.name
            && a.declaring_type == b.declaring_type
            && a.generic_args == b.generic_args
            && a.return_type == b.return_type
            && a.parameters.len() == b.parameters.len()
            && a
                .parameters
                .iter()
                .zip(b.parameters.iter())
                .all(|(x, y)| x.ty == y.ty)
    }
}

impl Eq for MethodId {}

impl Hash for MethodId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.declaring_type.hash(state);
        self.inner.name.hash(state);
        self.inner.generic_args.hash(state);
        for p in &self.inner.parameters {
            p.ty.hash(state);
        }
        self.inner.return_type.hash(state);
    }
}

impl fmt::Debug for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MethodId({self})")
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.inner.declaring_type, self.inner.name)?;
        if !self.inner.generic_args.is_empty() {
            let args: Vec<&str> = self.generic_args().collect();
            write!(f, "<{}>", args.join(", "))?;
        }
        f.write_str("(")?;
        for (i, p) in self.inner.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", p.name, p.ty)?;
        }
        f.write_str(")")?;
        if let Some(ret) = &self.inner.return_type {
            write!(f, " -> {ret}")?;
        }
        Ok(())
    }
}

/// Builder for `MethodId`.
pub struct MethodIdBuilder {
    declaring_type: Arc<str>,
    name: Arc<str>,
    generic_args: SmallVec<[Arc<str>; 2]>,
    parameters: SmallVec<[Parameter; 4]>,
    return_type: Option<TypeRef>,
}

impl MethodIdBuilder {
    /// Append a formal parameter.
    pub fn param(mut self, name: &str, ty: TypeRef) -> Self {
        self.parameters.push(Parameter {
            name: Arc::from(name),
            ty,
        });
        self
    }

    /// Append a generic type argument (closed generic methods).
    pub fn generic_arg(mut self, name: &str) -> Self {
        self.generic_args.push(Arc::from(name));
        self
    }

    /// Declare the return type. Omit for void methods.
    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }

    /// Finish the identity. Parameter names must be unique.
    pub fn build(self) -> Result<MethodId, ArgumentError> {
        for (i, p) in self.parameters.iter().enumerate() {
            if self.parameters[..i].iter().any(|q| q.name == p.name) {
                return Err(ArgumentError::DuplicateParameterName {
                    method: format!("{}.{}", self.declaring_type, self.name),
                    name: p.name.to_string(),
                });
            }
        }
        Ok(MethodId {
            inner: Arc::new(MethodInner {
                declaring_type: self.declaring_type,
                name: self.name,
                generic_args: self.generic_args,
                parameters: self.parameters,
                return_type: self.return_type,
            }),
        })
    }
}
