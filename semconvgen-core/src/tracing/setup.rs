//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "SEMCONVGEN_LOG";

/// Initialize the semconvgen logging system.
///
/// Reads `SEMCONVGEN_LOG` for per-crate log levels, e.g.
/// `SEMCONVGEN_LOG=semconvgen_registry=debug,semconvgen_render=info`.
/// `default_directive` is used when the variable is unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(default_directive: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .try_init();
    });
}
