//! Tracing subscriber setup for the `parcel-sort` binary.
//!
//! Events go to stderr so that stdout carries only classification output.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Pick the filter directive.
///
/// Precedence: verbosity flags, then `--quiet`, then the configured level.
/// `RUST_LOG`, when set, overrides all of these in [`init`].
pub fn resolve_filter(verbose: u8, quiet: bool, configured: &str) -> String {
    match verbose {
        0 if quiet => "error".to_string(),
        0 => configured.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global stderr subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter);

    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}
