/// Configure structured logging with JSON output.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Calling this more
/// than once is harmless: later calls keep the first subscriber.
///
/// # Example
///
/// ```
/// summary_core::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
