//! Path handling for the Zellij sandbox, where the host filesystem is mounted
//! under `/host`.

use std::path::PathBuf;

/// Mount point of the host filesystem inside the plugin sandbox.
pub const HOST_ROOT: &str = "/host";

/// Directory for the plugin's own files (the trace log).
///
/// Resolves to `/host/.local/share/zellij/stok`. `/host` is the cwd of the
/// last focused terminal, usually the home directory, which makes this
/// `~/.local/share/zellij/stok` on the host.
///
/// ```
/// use stok::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/stok"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij").join("stok")
}

/// Maps `~` to `/host`.
///
/// ```
/// use stok::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/Dokumen"), "/host/Dokumen");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/tmp/out"), "/tmp/out");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}

/// Resolves the configured export directory to a sandbox path.
///
/// Blank means the host root. `~` is expanded and relative paths are taken
/// relative to `/host`. Absolute paths are used as given.
#[must_use]
pub fn resolve_export_dir(configured: &str) -> PathBuf {
    let trimmed = configured.trim();
    if trimmed.is_empty() {
        return PathBuf::from(HOST_ROOT);
    }

    let expanded = PathBuf::from(expand_tilde(trimmed));
    if expanded.is_absolute() {
        expanded
    } else {
        PathBuf::from(HOST_ROOT).join(expanded)
    }
}

/// Removes the `/host` prefix so a sandbox path reads like a host path.
///
/// ```
/// use stok::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/riwayat-stok-2026-10-19.csv"), "~/riwayat-stok-2026-10-19.csv");
/// assert_eq!(strip_host_prefix("/host"), "~");
/// assert_eq!(strip_host_prefix("/tmp/a.csv"), "/tmp/a.csv");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix(HOST_ROOT) {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}
