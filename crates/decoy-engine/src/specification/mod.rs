//! Call specifications and the matching engine.

pub mod call_specification;
pub mod matching;
pub mod template;

pub use call_specification::CallSpecification;
pub use matching::{matching, Matching, MatchingExt};
pub use template::{ArgumentTemplate, CallTemplate};
