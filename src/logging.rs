//! Process-wide logging setup for the binary
//!
//! Library code never installs a subscriber; it reports through an
//! [`EventSink`](crate::sink::EventSink). The default sink emits `tracing`
//! events, which this subscriber prints.

use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;

/// Initialize tracing output. Filter comes from `RUST_LOG` (default `info`).
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = match format {
        LogFormat::Plain => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
