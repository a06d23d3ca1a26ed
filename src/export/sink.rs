//! Export destination abstraction.

use crate::domain::error::Result;
use std::path::{Path, PathBuf};

/// Somewhere a rendered export can be written.
///
/// The worker owns one sink for its lifetime. Implementations must leave no
/// partially written file behind on failure.
///
/// # Implementations
///
/// - [`FileSink`](super::FileSink): writes into a directory on the host
///   filesystem (default)
pub trait ExportSink: Send {
    /// Writes `payload` as `file_name` inside `directory` and returns the final
    /// path. An existing file with the same name is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file cannot
    /// be written.
    fn write(&mut self, directory: &Path, file_name: &str, payload: &str) -> Result<PathBuf>;
}
