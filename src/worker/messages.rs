//! Messages exchanged with the export worker.
//!
//! Requests and responses between the plugin thread and the export worker,
//! serialized as JSON. Requests carry the caller's trace context so worker
//! spans join the plugin's trace.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Trace and parent span ids of the plugin-side span that sent a request.
///
/// Ids are lowercase hex, 32 and 16 digits wide, the way OTLP prints them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    pub trace_id: String,
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the OpenTelemetry ids of the current `tracing` span.
    ///
    /// `None` when no OpenTelemetry layer is installed or the span is not
    /// being recorded, which is the case in unit tests.
    ///
    /// ```no_run
    /// use stok::worker::TraceContext;
    ///
    /// if let Some(ctx) = TraceContext::from_current() {
    ///     println!("exporting under trace {}", ctx.trace_id);
    /// }
    /// ```
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let context = tracing::Span::current().context();
        let span = context.span();
        let ids = span.span_context();
        if !ids.is_valid() {
            tracing::trace!("no recorded span, sending without trace context");
            return None;
        }

        let captured = Self {
            trace_id: format!("{:032x}", ids.trace_id()),
            parent_span_id: format!("{:016x}", ids.span_id()),
        };
        tracing::debug!(trace_id = %captured.trace_id, "trace context captured for worker");
        Some(captured)
    }
}

/// Requests from the plugin to the export worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Write a rendered CSV export to disk.
    ExportCsv {
        /// Directory the file is written into; created when missing.
        directory: PathBuf,

        /// Bare file name, e.g. `riwayat-stok-2026-10-19.csv`.
        file_name: String,

        /// Complete CSV document.
        payload: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Builds an export request stamped with the current trace context.
    #[must_use]
    pub fn export_csv(directory: PathBuf, file_name: String, payload: String) -> Self {
        Self::ExportCsv {
            directory,
            file_name,
            payload,
            trace_context: TraceContext::from_current(),
        }
    }

    /// Trace context attached to the message, if any.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::ExportCsv { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Worker replies, delivered to the plugin as a custom message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The export file was written.
    ExportWritten {
        /// Final path of the written file.
        path: PathBuf,
    },

    /// The export failed; `message` is shown to the user as is.
    Error {
        message: String,
    },
}
