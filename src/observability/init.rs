//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber with OpenTelemetry integration: span
//! filtering from the configured trace level, export through the file-based
//! exporter, output into the plugin data directory.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::exporter;
use crate::Config;

/// Name of the trace output file inside the data directory.
const TRACE_FILE: &str = "zshelf-otlp.json";

/// Initializes the tracing subscriber with file-based span export.
///
/// The filter level comes from `config.trace_level`, defaulting to `"info"`.
/// Observability is optional: if the data directory cannot be created the
/// function returns without installing a subscriber, and repeated calls are
/// harmless (only the first installation takes effect).
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", "zshelf")]);

    let provider = exporter::create_tracer_provider(data_dir.join(TRACE_FILE), resource);

    let tracer = provider.tracer("zshelf");
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    let _ = subscriber.try_init();
}
