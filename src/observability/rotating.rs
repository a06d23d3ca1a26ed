//! Append-only line file with size-based rotation.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size at which the trace file is rotated (10 MB).
pub const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated files kept next to the live one.
pub const KEEP_BACKUPS: usize = 3;

/// Line-oriented file that rolls over once it grows past a size limit.
///
/// The live file is renamed to `<name>.<unix-seconds>` when it passes the
/// limit, and only the newest backups are kept. The handle is opened lazily on
/// the first write, so constructing one never touches the filesystem.
pub struct RotatingFile {
    path: PathBuf,
    rotate_at: u64,
    keep: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    /// Rotating file with the default limits.
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, ROTATE_AT_BYTES, KEEP_BACKUPS)
    }

    pub const fn with_limits(path: PathBuf, rotate_at: u64, keep: usize) -> Self {
        Self {
            path,
            rotate_at,
            keep,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be rotated, opened or written, or when the
    /// handle lock is poisoned.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::other(format!("trace file lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *handle = None;
            self.rotate()?;
        }

        let file = match handle.as_mut() {
            Some(file) => file,
            None => handle.insert(OpenOptions::new().create(true).append(true).open(&self.path)?),
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.rotate_at)
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = chrono::Utc::now().timestamp_micros();
        let mut backup = self.path.clone().into_os_string();
        backup.push(format!(".{stamp}"));

        if self.path.exists() {
            fs::rename(&self.path, PathBuf::from(backup))?;
        }
        self.prune_backups()
    }

    /// Deletes all but the newest `keep` backups. Removal failures are ignored.
    fn prune_backups(&self) -> io::Result<()> {
        let Some(dir) = self.path.parent() else {
            return Ok(());
        };
        let Some(live_name) = self.path.file_name().and_then(|n| n.to_str()) else {
            return Ok(());
        };
        let backup_prefix = format!("{live_name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| is_backup_of(path, &backup_prefix))
            .collect();

        // Suffixes are timestamps of equal width, so name order is age order.
        backups.sort_unstable_by(|a, b| b.cmp(a));
        for stale in backups.iter().skip(self.keep) {
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }
}

fn is_backup_of(path: &Path, backup_prefix: &str) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_prefix(backup_prefix))
        .is_some_and(|suffix| !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()))
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("rotate_at", &self.rotate_at)
            .field("keep", &self.keep)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn backups(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| n != "trace.json")
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_appends_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::new(path.clone());

        file.append_line("{\"a\":1}").unwrap();
        file.append_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn test_rotates_and_prunes_backups() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::with_limits(path.clone(), 4, 2);

        for i in 0..6 {
            file.append_line(&format!("line-{i}")).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(2));
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "line-5\n");
        let kept = backups(dir.path());
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|n| n.starts_with("trace.json.")));
    }

    #[test]
    fn test_backup_name_matching() {
        assert!(is_backup_of(Path::new("/d/trace.json.1712"), "trace.json."));
        assert!(!is_backup_of(Path::new("/d/trace.json."), "trace.json."));
        assert!(!is_backup_of(Path::new("/d/trace.json.tmp"), "trace.json."));
        assert!(!is_backup_of(Path::new("/d/other.json.1712"), "trace.json."));
    }
}
