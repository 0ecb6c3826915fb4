//! Matching: filter a materialized call sequence by a specification.

use decoy_core::errors::SpecificationError;

use super::call_specification::CallSpecification;
use super::template::CallTemplate;
use crate::call::FakeObjectCall;

/// Lazy, order-preserving filter over a slice of calls.
///
/// The source slice is borrowed immutably; cloning the iterator (or
/// calling `matching` again) restarts it from the beginning.
pub struct Matching<'a, C> {
    calls: std::slice::Iter<'a, C>,
    specification: CallSpecification,
}

impl<'a, C: FakeObjectCall> Iterator for Matching<'a, C> {
    type Item = &'a C;

    fn next(&mut self) -> Option<Self::Item> {
        let spec = &self.specification;
        self.calls.by_ref().find(|call| spec.matches(*call))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.calls.size_hint().1)
    }
}

impl<C> Clone for Matching<'_, C> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
            specification: self.specification.clone(),
        }
    }
}

/// Filter `calls` down to the ones `specification` matches.
pub fn matching<'a, C: FakeObjectCall>(
    calls: &'a [C],
    specification: &CallSpecification,
) -> Matching<'a, C> {
    Matching {
        calls: calls.iter(),
        specification: specification.clone(),
    }
}

/// `calls.matching(&spec)` on any slice of calls.
pub trait MatchingExt<C> {
    fn matching(&self, specification: &CallSpecification) -> Matching<'_, C>;

    /// Build `template` and filter by it.
    fn matching_template(
        &self,
        template: &CallTemplate,
    ) -> Result<Matching<'_, C>, SpecificationError>;
}

impl<C: FakeObjectCall> MatchingExt<C> for [C] {
    fn matching(&self, specification: &CallSpecification) -> Matching<'_, C> {
        matching(self, specification)
    }

    fn matching_template(
        &self,
        template: &CallTemplate,
    ) -> Result<Matching<'_, C>, SpecificationError> {
        Ok(matching(self, &template.build()?))
    }
}
