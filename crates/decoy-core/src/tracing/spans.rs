//! Span constructors for decoy operations.

/// Create the span wrapping one intercepted call.
///
/// `rule_id`, `sequence` and `faulted` start empty and are recorded once
/// the call has been resolved and stored.
#[macro_export]
macro_rules! dispatch_span {
    ($fake:expr, $fake_id:expr, $method:expr) => {
        ::tracing::debug_span!(
            $crate::tracing::fields::DISPATCH_SPAN,
            fake = %$fake,
            fake_id = %$fake_id,
            method = %$method,
            rule_id = ::tracing::field::Empty,
            sequence = ::tracing::field::Empty,
            faulted = ::tracing::field::Empty,
        )
    };
}
