//! Tracing with file-based OpenTelemetry export.
//!
//! Provides the observability pipeline for the plugin: `tracing` macros feed
//! through `tracing-opentelemetry` into a custom file-based span exporter,
//! since no network collector is reachable from the Zellij WASM sandbox.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON file
//! ```
//!
//! Traces land in `zshelf-otlp.json` inside the plugin data directory, rotated
//! at 10MB with a bounded number of backups.
//!
//! # Configuration
//!
//! The span filter level comes from the `trace_level` plugin configuration
//! option (default `"info"`).
//!
//! # Modules
//!
//! - [`init`]: Subscriber initialization
//! - `exporter`: Tracer provider and OTLP JSON span formatting
//! - `file_writer`: Rotating file writer

mod exporter;
mod file_writer;
mod init;

pub use init::init_tracing;
