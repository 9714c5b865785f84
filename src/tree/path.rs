//! Traversal root resolution and report-friendly paths

use crate::error::StampError;
use std::path::{Path, PathBuf};

/// Check that `root` exists and is a directory, then canonicalize it
///
/// Uses dunce so Windows roots come back without the `\\?\` prefix.
pub fn resolve_root(root: &Path) -> Result<PathBuf, StampError> {
    if !root.exists() {
        return Err(StampError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(StampError::RootNotDirectory(root.to_path_buf()));
    }
    dunce::canonicalize(root).map_err(|e| StampError::Walk {
        path: root.to_path_buf(),
        message: format!("Failed to canonicalize path: {}", e),
    })
}

/// `path` relative to `root`, or `path` unchanged when it lies outside `root`
pub fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
