//! ArgumentValueSet: the bound arguments of one invocation.

use smallvec::SmallVec;

use decoy_core::errors::ArgumentError;
use decoy_core::types::{MethodId, Parameter, Value};

/// Immutable, ordered, named view over the arguments of one call.
///
/// Construction checks arity and every declared type against the bound
/// method, so a set that exists always agrees with its signature.
#[derive(Debug, Clone)]
pub struct ArgumentValueSet {
    method: MethodId,
    values: SmallVec<[Value; 4]>,
}

impl ArgumentValueSet {
    /// Bind `values` to the parameters of `method`.
    pub fn new<I>(method: MethodId, values: I) -> Result<Self, ArgumentError>
    where
        I: IntoIterator<Item = Value>,
    {
        let values: SmallVec<[Value; 4]> = values.into_iter().collect();
        if values.len() != method.arity() {
            return Err(ArgumentError::SignatureMismatch {
                method: method.to_string(),
                detail: format!(
                    "expected {} argument(s), got {}",
                    method.arity(),
                    values.len()
                ),
            });
        }
        for (param, value) in method.parameters().iter().zip(values.iter()) {
            if !param.ty().accepts(value) {
                return Err(ArgumentError::SignatureMismatch {
                    method: method.to_string(),
                    detail: format!(
                        "argument '{}' expects {}, got {}",
                        param.name(),
                        param.ty(),
                        value
                    ),
                });
            }
        }
        Ok(Self { method, values })
    }

    /// An empty set for a parameterless method.
    pub fn empty(method: MethodId) -> Result<Self, ArgumentError> {
        Self::new(method, std::iter::empty())
    }

    /// The method these arguments were bound to.
    pub fn method(&self) -> &MethodId {
        &self.method
    }

    /// Number of bound arguments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true for a parameterless method.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Positional lookup (0-based).
    pub fn get(&self, index: usize) -> Result<&Value, ArgumentError> {
        self.values
            .get(index)
            .ok_or_else(|| ArgumentError::IndexOutOfRange {
                method: self.method.to_string(),
                index,
                arity: self.values.len(),
            })
    }

    /// Case-sensitive named lookup.
    pub fn get_by_name(&self, name: &str) -> Result<&Value, ArgumentError> {
        let index =
            self.method
                .parameter_index(name)
                .ok_or_else(|| ArgumentError::UnknownParameterName {
                    method: self.method.to_string(),
                    name: name.to_string(),
                })?;
        self.get(index)
    }

    /// Bound values in parameter order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Iterate `(parameter, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Parameter, &Value)> {
        self.method.parameters().iter().zip(self.values.iter())
    }

    /// `name: value` pairs, each value truncated to `max_len` characters.
    pub fn render(&self, max_len: usize) -> String {
        self.iter()
            .map(|(p, v)| format!("{}: {}", p.name(), v.render(max_len)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
