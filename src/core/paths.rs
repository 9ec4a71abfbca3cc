//! Scan root validation and relative path keys

use std::path::{Component, Path, PathBuf};

use super::error::ToolError;

/// Check that a user-supplied root exists and is a directory.
///
/// The path is returned as given (not canonicalized) so that reports show the
/// same root the user typed.
pub fn resolve_root(root: &Path) -> Result<PathBuf, ToolError> {
    if root.is_dir() {
        Ok(root.to_path_buf())
    } else {
        Err(ToolError::InvalidRoot(root.to_path_buf()))
    }
}

/// Path of `path` relative to `root`, joined with `/` on every platform.
///
/// Falls back to the full path when `path` is not under `root`.
pub fn relative_key(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
