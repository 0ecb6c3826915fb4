//! Subscriber setup for `DECOY_LOG`.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Install the decoy subscriber for the current process.
///
/// `DECOY_LOG` takes an `EnvFilter` directive list such as
/// `decoy_engine=debug,decoy_core=warn`; an unset or unparsable value means
/// `decoy=info`. Output goes through the test writer so it is captured
/// per test. Only the first call does anything, and a subscriber the host
/// already installed is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_test_writer(),
            )
            .with(filter)
            .try_init();
    });
}
