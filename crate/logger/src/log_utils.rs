use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOG_INIT: Once = Once::new();

/// Initialize the global tracing subscriber, once per process.
///
/// `RUST_LOG` takes precedence over `default_directives` when set.
///
/// # Panics
///
/// Will panic if the global subscriber cannot be set.
pub fn log_init(default_directives: &str) {
    LOG_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directives));

        let format = tracing_subscriber::fmt::layer()
            .with_level(true)
            .with_target(true)
            .with_writer(std::io::stderr)
            .compact();

        tracing_subscriber::registry()
            .with(filter)
            .with(format)
            .init();
    });
}
