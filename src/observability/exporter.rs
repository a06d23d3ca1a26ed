//! Span exporter that appends OTLP/JSON batches to a local file.
//!
//! The plugin sandbox has no network, so spans go to disk and are read
//! offline.

use super::otlp;
use super::rotating::RotatingFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Writes every exported batch as one JSON line.
#[derive(Debug)]
struct JsonLinesExporter {
    file: RotatingFile,
    resource: Resource,
    stopped: bool,
}

impl JsonLinesExporter {
    const fn new(path: PathBuf, resource: Resource) -> Self {
        Self {
            file: RotatingFile::new(path),
            resource,
            stopped: false,
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.stopped {
            return Err(TraceError::from("trace exporter already shut down"));
        }
        let line = otlp::encode_batch(&self.resource, batch).to_string();
        self.file
            .append_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Builds a tracer provider that exports synchronously to `path`.
///
/// Uses the simple (unbatched) processor: wasm plugins have no background
/// runtime to drive a batch exporter.
pub fn tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = JsonLinesExporter::new(path, resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::KeyValue;

    #[test]
    fn test_empty_batch_is_written_as_one_line() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("stok-otlp.json");
        let exporter = JsonLinesExporter::new(path.clone(), Resource::new(vec![KeyValue::new("service.name", "Stok")]));

        exporter.write_batch(&[]).unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert_eq!(written.lines().count(), 1);
        let doc: serde_json::Value = serde_json::from_str(written.trim_end()).unwrap();
        assert_eq!(doc["resourceSpans"][0]["scopeSpans"][0]["scope"]["name"], "stok");
    }

    #[test]
    fn test_export_after_shutdown_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("stok-otlp.json");
        let mut exporter = JsonLinesExporter::new(path.clone(), Resource::new(vec![]));

        exporter.shutdown();

        assert!(exporter.write_batch(&[]).is_err());
        assert!(!path.exists());
    }
}
