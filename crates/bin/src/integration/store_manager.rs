//! Record store location.
//!
//! The database lives in the platform cache directory unless `--db` or
//! `REDLINE_DB` names another file.

use redline::data::{DataError, SqliteStore};
use std::path::{Path, PathBuf};

/// Get the default store directory path.
///
/// Uses platform-specific cache directories:
/// - Linux: `~/.cache/redline/`
/// - macOS: `~/Library/Caches/redline/`
/// - Windows: `%LOCALAPPDATA%\redline\`
pub(crate) fn default_store_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("redline")
}

/// Get the default store database path.
pub(crate) fn default_store_path() -> PathBuf {
    default_store_dir().join("redline.db")
}

/// Resolve the configured store path.
pub(crate) fn store_path(configured: Option<&Path>) -> PathBuf {
    configured.map_or_else(default_store_path, Path::to_path_buf)
}

/// Open the store, creating the parent directory if needed.
pub(crate) fn open_store(configured: Option<&Path>) -> Result<SqliteStore, DataError> {
    let path = store_path(configured);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    tracing::debug!("opening store at {}", path.display());
    SqliteStore::new(&path)
}
