//! # decoy-engine
//!
//! Call recording, argument matching, and behavior configuration for
//! decoy fakes. A proxy hands every intercepted call to a
//! [`FakeController`], which resolves the newest matching rule, runs its
//! behavior, and records the completed call before returning.

pub mod arguments;
pub mod assertions;
pub mod behavior;
pub mod call;
pub mod configuration;
pub mod constraints;
pub mod controller;
pub mod fakes;
pub mod interceptor;
pub mod recording;
pub mod specification;

pub use arguments::ArgumentValueSet;
pub use assertions::{CallAssertion, Repeated};
pub use behavior::{CallOutcome, CallResult, Fault, ReturnValue, RuleSnapshot};
pub use call::FakeObjectCall;
pub use configuration::RuleConfigurator;
pub use constraints::ArgumentConstraint;
pub use controller::{DispatchSettings, FakeController};
pub use fakes::{Fake, FakeOptions, FakeRegistry, ProxyFactory, ProxyRequest};
pub use interceptor::{CallInterceptor, WrappedTarget};
pub use recording::{CallRecordStore, CompletedCall};
pub use specification::{
    matching, ArgumentTemplate, CallSpecification, CallTemplate, Matching, MatchingExt,
};
