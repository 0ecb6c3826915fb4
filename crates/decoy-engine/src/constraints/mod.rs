//! Argument constraints: named, negatable, side-effect-free predicates.

pub mod builtin;
pub mod constraint;

pub use constraint::ArgumentConstraint;
