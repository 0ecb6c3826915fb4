//! CallSpecification: a predicate over a whole invocation.

use std::fmt;

use decoy_core::errors::SpecificationError;
use decoy_core::types::MethodId;

use crate::call::FakeObjectCall;
use crate::constraints::ArgumentConstraint;

/// Method identity plus one constraint per parameter position.
#[derive(Debug, Clone)]
pub struct CallSpecification {
    method: MethodId,
    constraints: Vec<ArgumentConstraint>,
}

impl CallSpecification {
    /// Build from an explicit method identity and constraint list.
    /// The list must have exactly one constraint per parameter.
    pub fn new(
        method: MethodId,
        constraints: Vec<ArgumentConstraint>,
    ) -> Result<Self, SpecificationError> {
        if constraints.len() != method.arity() {
            return Err(SpecificationError::SignatureMismatch {
                method: method.to_string(),
                detail: format!(
                    "expected {} constraint(s), got {}",
                    method.arity(),
                    constraints.len()
                ),
            });
        }
        Ok(Self {
            method,
            constraints,
        })
    }

    /// Matches every call to `method`, whatever its arguments.
    pub fn any_arguments(method: MethodId) -> Self {
        let constraints = (0..method.arity())
            .map(|_| ArgumentConstraint::any())
            .collect();
        Self {
            method,
            constraints,
        }
    }

    /// Method a call must target to match.
    pub fn method(&self) -> &MethodId {
        &self.method
    }

    /// Positional constraints, one per parameter.
    pub fn constraints(&self) -> &[ArgumentConstraint] {
        &self.constraints
    }

    /// True if `call` targets this method and every constraint holds.
    ///
    /// Method identity is compared first; constraints are never evaluated
    /// against the arguments of a different signature.
    pub fn matches<C: FakeObjectCall + ?Sized>(&self, call: &C) -> bool {
        if call.method() != &self.method {
            return false;
        }
        self.constraints
            .iter()
            .zip(call.arguments().values())
            .all(|(constraint, value)| constraint.is_satisfied_by(value))
    }
}

impl fmt::Display for CallSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.method.qualified_name())?;
        for (i, (param, constraint)) in self
            .method
            .parameters()
            .iter()
            .zip(self.constraints.iter())
            .enumerate()
        {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", param.name(), constraint)?;
        }
        f.write_str(")")
    }
}
