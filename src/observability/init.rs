//! Subscriber setup: `tracing` macros → OpenTelemetry → trace file.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the trace log inside the data directory.
pub const TRACE_FILE_NAME: &str = "stok-otlp.json";

/// Filter used when the configuration names none.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber for this thread's process.
///
/// Spans are filtered by `config.trace_level` (an `EnvFilter` directive,
/// `"info"` when unset) and exported to
/// `~/.local/share/zellij/stok/stok-otlp.json`.
///
/// Observability is optional: if the data directory cannot be created this
/// does nothing. Only the first call in a process installs a subscriber.
///
/// ```no_run
/// use stok::observability::init_tracing;
/// use stok::Config;
///
/// init_tracing(&Config {
///     trace_level: Some("stok=debug".to_string()),
///     ..Config::default()
/// });
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let directive = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", "Stok"),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = exporter::tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let layer = OpenTelemetryLayer::new(provider.tracer("stok"));

    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL));

    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}
