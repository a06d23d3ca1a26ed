//! Transaction history export.
//!
//! The plugin thread renders the CSV payload with [`csv::render`] and ships it
//! to the worker, which hands it to an [`ExportSink`] for writing.

pub mod csv;
pub mod file;
pub mod sink;

pub use file::FileSink;
pub use sink::ExportSink;
