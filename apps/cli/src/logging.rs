//! Logging initialization for the CLI
//!
//! Logs go to stderr so command output on stdout stays pipeable. `RUST_LOG`
//! overrides the level chosen on the command line.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_logging(verbose: bool, json: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "halcyon={level},halcyon_cli={level},halcyon_builder={level},halcyon_format={level},halcyon_openapi={level},halcyon_uri_template={level}"
        ))
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if json {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
