//! Tracing subscriber setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `filter` uses `RUST_LOG` syntax; an unparsable filter falls back to
/// `info`. `format` is `json` for one JSON object per line, anything else
/// gives human-readable text.
pub fn init_tracing(filter: &str, format: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    if format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}
