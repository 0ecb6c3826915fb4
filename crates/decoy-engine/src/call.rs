//! The view shared by every kind of faked call.

use decoy_core::types::MethodId;

use crate::arguments::ArgumentValueSet;

/// Anything that names a method and carries bound arguments.
/// Implemented by completed calls and by in-flight arguments alike, so one
/// call specification can match both.
pub trait FakeObjectCall {
    fn arguments(&self) -> &ArgumentValueSet;

    fn method(&self) -> &MethodId {
        self.arguments().method()
    }
}

impl FakeObjectCall for ArgumentValueSet {
    fn arguments(&self) -> &ArgumentValueSet {
        self
    }
}

impl<T: FakeObjectCall + ?Sized> FakeObjectCall for &T {
    fn arguments(&self) -> &ArgumentValueSet {
        (**self).arguments()
    }
}

impl<T: FakeObjectCall + ?Sized> FakeObjectCall for std::sync::Arc<T> {
    fn arguments(&self) -> &ArgumentValueSet {
        (**self).arguments()
    }
}
