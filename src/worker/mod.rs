//! Background worker thread for export writes.
//!
//! Zellij plugins must not block their render loop on I/O, so the CSV write
//! happens on a worker thread. The worker includes distributed tracing support
//! for observability.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::StokWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
