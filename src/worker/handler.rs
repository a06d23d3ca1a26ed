//! Worker thread implementation for export writes.
//!
//! Runs on the thread Zellij spawns for `register_worker!` and owns the export
//! sink. The plugin thread never waits on it: a write is fire-and-forget and
//! the response only raises a notice.

use crate::export::{ExportSink, FileSink};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Once;
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state.
///
/// The sink is created lazily on the first message; Zellij constructs workers
/// through `Default`.
#[derive(Serialize, Deserialize, Default)]
pub struct StokWorker {
    #[serde(skip)]
    sink: Option<Box<dyn ExportSink>>,
}

impl StokWorker {
    /// Creates a worker writing through `sink`.
    #[must_use]
    pub fn with_sink(sink: Box<dyn ExportSink>) -> Self {
        Self { sink: Some(sink) }
    }

    fn sink(&mut self) -> &mut Box<dyn ExportSink> {
        self.sink.get_or_insert_with(|| Box::new(FileSink::new()))
    }

    fn handle_export(&mut self, directory: &Path, file_name: &str, payload: &str) -> WorkerResponse {
        match self.sink().write(directory, file_name, payload) {
            Ok(path) => {
                tracing::debug!(path = ?path, "export operation successful");
                WorkerResponse::ExportWritten { path }
            }
            Err(e) => {
                tracing::warn!(directory = ?directory, file_name, error = %e, "export operation failed");
                WorkerResponse::Error { message: e.to_string() }
            }
        }
    }

    /// Makes the sender's span the parent of everything logged while the
    /// returned guard lives. Malformed ids are treated as absent.
    fn enter_sender_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let sender = message.trace_context()?;
        let remote = SpanContext::new(
            TraceId::from_hex(&sender.trace_id).ok()?,
            SpanId::from_hex(&sender.parent_span_id).ok()?,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );
        Some(opentelemetry::Context::current().with_remote_span_context(remote).attach())
    }

    /// Processes a worker message and returns the response for the plugin.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _sender = Self::enter_sender_context(&message);
        let _span = tracing::info_span!("worker_message").entered();

        match message {
            WorkerMessage::ExportCsv { directory, file_name, payload, .. } => {
                tracing::debug!(%file_name, bytes = payload.len(), "handling export");
                self.handle_export(&directory, &file_name, &payload)
            }
        }
    }

    /// Decodes a JSON request and encodes the JSON response.
    ///
    /// Returns `None` when the request cannot be decoded or the response
    /// cannot be encoded; both are logged.
    pub fn handle_payload(&mut self, payload: &str) -> Option<String> {
        let message = serde_json::from_str::<WorkerMessage>(payload)
            .map_err(|e| tracing::warn!(error = %e, "undecodable worker request"))
            .ok()?;

        let response = self.handle_message(message);
        serde_json::to_string(&response)
            .map_err(|e| tracing::error!(error = %e, "worker response not serializable"))
            .ok()
    }
}

/// Tracing is process-global, but the worker may run before the plugin's
/// `load` has installed it.
static WORKER_TRACING: Once = Once::new();

impl ZellijWorker<'_> for StokWorker {
    /// Handles a request from the plugin thread and posts the response back
    /// under the same message name.
    fn on_message(&mut self, message: String, payload: String) {
        WORKER_TRACING.call_once(|| crate::observability::init_tracing(&crate::Config::default()));

        if let Some(payload) = self.handle_payload(&payload) {
            post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{Result, StokError};
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    #[derive(Default, Clone)]
    struct RecordingSink {
        writes: Arc<Mutex<Vec<(PathBuf, String, String)>>>,
    }

    impl ExportSink for RecordingSink {
        fn write(&mut self, directory: &Path, file_name: &str, payload: &str) -> Result<PathBuf> {
            self.writes
                .lock()
                .unwrap()
                .push((directory.to_path_buf(), file_name.to_string(), payload.to_string()));
            Ok(directory.join(file_name))
        }
    }

    struct FailingSink;

    impl ExportSink for FailingSink {
        fn write(&mut self, _: &Path, _: &str, _: &str) -> Result<PathBuf> {
            Err(StokError::Export("read-only file system".into()))
        }
    }

    fn export_message() -> WorkerMessage {
        WorkerMessage::ExportCsv {
            directory: PathBuf::from("/host/exports"),
            file_name: "riwayat-stok-2026-10-19.csv".into(),
            payload: "Tanggal,Nama Barang,Jumlah,Aksi\n".into(),
            trace_context: None,
        }
    }

    #[test]
    fn test_export_is_written_through_sink() {
        let sink = RecordingSink::default();
        let mut worker = StokWorker::with_sink(Box::new(sink.clone()));

        let response = worker.handle_message(export_message());

        assert_eq!(
            response,
            WorkerResponse::ExportWritten {
                path: PathBuf::from("/host/exports/riwayat-stok-2026-10-19.csv")
            }
        );
        assert_eq!(sink.writes.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_sink_failure_becomes_error_response() {
        let mut worker = StokWorker::with_sink(Box::new(FailingSink));
        let response = worker.handle_message(export_message());
        assert_eq!(
            response,
            WorkerResponse::Error {
                message: "Export error: read-only file system".into()
            }
        );
    }

    #[test]
    fn test_handle_payload_round_trips_json() {
        let mut worker = StokWorker::with_sink(Box::new(RecordingSink::default()));
        let request = serde_json::to_string(&export_message()).unwrap();

        let reply = worker.handle_payload(&request).unwrap();
        let response: WorkerResponse = serde_json::from_str(&reply).unwrap();
        assert!(matches!(response, WorkerResponse::ExportWritten { .. }));

        assert!(worker.handle_payload("not json").is_none());
    }

    #[test]
    fn test_default_worker_writes_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut worker = StokWorker::default();
        let response = worker.handle_message(WorkerMessage::ExportCsv {
            directory: dir.path().to_path_buf(),
            file_name: "a.csv".into(),
            payload: "x\n".into(),
            trace_context: None,
        });
        assert_eq!(response, WorkerResponse::ExportWritten { path: dir.path().join("a.csv") });
        assert_eq!(std::fs::read_to_string(dir.path().join("a.csv")).unwrap(), "x\n");
    }
}
