//! The seams between the core and the proxy collaborator.

use crate::arguments::ArgumentValueSet;
use crate::behavior::CallResult;

/// Receives every call made on a fake's proxy.
///
/// Proxies bind their arguments and hand them over; whatever comes back
/// is what the proxy returns to its caller.
pub trait CallInterceptor: Send + Sync {
    fn intercept(&self, arguments: ArgumentValueSet) -> CallResult;
}

/// A real implementation a fake delegates to when wrapping it.
pub trait WrappedTarget: Send + Sync {
    fn invoke(&self, arguments: &ArgumentValueSet) -> CallResult;
}

impl<F> WrappedTarget for F
where
    F: Fn(&ArgumentValueSet) -> CallResult + Send + Sync,
{
    fn invoke(&self, arguments: &ArgumentValueSet) -> CallResult {
        self(arguments)
    }
}
