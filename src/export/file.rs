//! Filesystem export sink.
//!
//! Writes go to a temporary sibling first and are renamed into place, so a
//! reader never sees a half-written CSV.

use crate::domain::error::{Result, StokError};
use crate::export::sink::ExportSink;
use std::path::{Path, PathBuf};

/// Writes exports into a directory on disk, creating it when missing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSink;

impl FileSink {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ExportSink for FileSink {
    fn write(&mut self, directory: &Path, file_name: &str, payload: &str) -> Result<PathBuf> {
        if file_name.is_empty() || file_name.contains(['/', '\\']) {
            return Err(StokError::Export(format!("invalid export file name: {file_name:?}")));
        }

        tracing::debug!(directory = ?directory, file_name, "writing export");
        std::fs::create_dir_all(directory)?;

        let path = directory.join(file_name);
        let tmp_path = path.with_extension("csv.tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        if let Err(e) = std::fs::write(&tmp_path, payload) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &path)?;

        tracing::debug!(path = ?path, bytes = payload.len(), "export written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_directory_and_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("exports");

        let path = FileSink::new()
            .write(&target, "riwayat-stok-2026-10-19.csv", "Tanggal,Nama Barang,Jumlah,Aksi\n")
            .unwrap();

        assert_eq!(path, target.join("riwayat-stok-2026-10-19.csv"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Tanggal,Nama Barang,Jumlah,Aksi\n"
        );
        assert!(!target.join("riwayat-stok-2026-10-19.csv.tmp").exists());
    }

    #[test]
    fn test_write_replaces_existing_export() {
        let dir = TempDir::new().unwrap();
        let mut sink = FileSink::new();
        sink.write(dir.path(), "a.csv", "old").unwrap();
        let path = sink.write(dir.path(), "a.csv", "new").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "new");
    }

    #[test]
    fn test_write_rejects_path_in_file_name() {
        let dir = TempDir::new().unwrap();
        let err = FileSink::new().write(dir.path(), "../evil.csv", "x").unwrap_err();
        assert!(matches!(err, StokError::Export(_)));
    }
}
