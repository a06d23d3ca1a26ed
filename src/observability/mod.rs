//! Tracing for the plugin and its worker, exported as OTLP JSON to a file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → JsonLinesExporter → stok-otlp.json
//! ```
//!
//! The trace file lives in the plugin data directory
//! (`~/.local/share/zellij/stok/`) and rotates at 10 MB, keeping three
//! backups. Every line is a complete `resourceSpans` document.
//!
//! The filter comes from the `trace_level` plugin option and defaults to
//! `"info"`. Spans opened on the plugin thread continue on the worker thread
//! through [`crate::worker::TraceContext`].

mod exporter;
mod init;
mod otlp;
mod rotating;

pub use init::{init_tracing, DEFAULT_TRACE_LEVEL, TRACE_FILE_NAME};
