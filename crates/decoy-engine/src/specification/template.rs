//! CallTemplate: the structural stand-in for "write the call you mean".

use decoy_core::errors::SpecificationError;
use decoy_core::types::{MethodId, Value};

use super::call_specification::CallSpecification;
use crate::constraints::ArgumentConstraint;

/// One argument position of a template.
#[derive(Debug, Clone)]
pub enum ArgumentTemplate {
    /// Becomes an equality constraint.
    Literal(Value),
    /// Used as-is.
    Constraint(ArgumentConstraint),
    /// Matches anything.
    Ignored,
}

/// "Call this method with these arguments", built fluently.
///
/// ```ignore
/// let spec = CallTemplate::new(another_method_with_text())
///     .literal("houseboat")
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct CallTemplate {
    method: MethodId,
    arguments: Vec<ArgumentTemplate>,
}

impl CallTemplate {
    /// An empty template; add one argument per parameter before `build`.
    pub fn new(method: MethodId) -> Self {
        Self {
            method,
            arguments: Vec::new(),
        }
    }

    /// Next argument must equal `value`.
    pub fn literal(mut self, value: impl Into<Value>) -> Self {
        self.arguments.push(ArgumentTemplate::Literal(value.into()));
        self
    }

    /// Next argument must satisfy `constraint`.
    pub fn that(mut self, constraint: ArgumentConstraint) -> Self {
        self.arguments.push(ArgumentTemplate::Constraint(constraint));
        self
    }

    /// Next argument is a free placeholder.
    pub fn ignored(mut self) -> Self {
        self.arguments.push(ArgumentTemplate::Ignored);
        self
    }

    /// Append an already-built argument template.
    pub fn argument(mut self, argument: ArgumentTemplate) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Method this template targets.
    pub fn method(&self) -> &MethodId {
        &self.method
    }

    /// Resolve into a specification.
    ///
    /// Fails with `SignatureMismatch` when the template has the wrong
    /// number of arguments or a literal the parameter type cannot hold.
    pub fn build(&self) -> Result<CallSpecification, SpecificationError> {
        let params = self.method.parameters();
        if self.arguments.len() != params.len() {
            return Err(SpecificationError::SignatureMismatch {
                method: self.method.to_string(),
                detail: format!(
                    "template has {} argument(s), method takes {}",
                    self.arguments.len(),
                    params.len()
                ),
            });
        }
        let mut constraints = Vec::with_capacity(params.len());
        for (param, argument) in params.iter().zip(self.arguments.iter()) {
            let constraint = match argument {
                ArgumentTemplate::Literal(value) => {
                    if !param.ty().accepts(value) {
                        return Err(SpecificationError::SignatureMismatch {
                            method: self.method.to_string(),
                            detail: format!(
                                "literal {} is not a valid {} for '{}'",
                                value,
                                param.ty(),
                                param.name()
                            ),
                        });
                    }
                    ArgumentConstraint::equal_to(value.clone())
                }
                ArgumentTemplate::Constraint(c) => c.clone(),
                ArgumentTemplate::Ignored => ArgumentConstraint::any(),
            };
            constraints.push(constraint);
        }
        CallSpecification::new(self.method.clone(), constraints)
    }
}

impl TryFrom<CallTemplate> for CallSpecification {
    type Error = SpecificationError;

    fn try_from(template: CallTemplate) -> Result<Self, Self::Error> {
        template.build()
    }
}

impl TryFrom<&CallTemplate> for CallSpecification {
    type Error = SpecificationError;

    fn try_from(template: &CallTemplate) -> Result<Self, Self::Error> {
        template.build()
    }
}
