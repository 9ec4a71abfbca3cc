//! Top-level folder selection and recursive file enumeration

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::core::error::ToolError;
use crate::core::rules::FolderRules;

/// List the in-scope top-level folders of a scan root
///
/// # Arguments
/// * `root` - Scan root (already resolved)
/// * `rules` - Folder classification rules
///
/// # Returns
/// Folder names sorted by name. Plain files and names that are not valid
/// UTF-8 are ignored. A listing failure is fatal for the caller.
pub fn list_target_folders(root: &Path, rules: &FolderRules) -> Result<Vec<String>, ToolError> {
    let list_err = |source| ToolError::ListDir {
        path: root.to_path_buf(),
        source,
    };

    let mut folders = Vec::new();
    for entry in fs::read_dir(root).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        if !entry.path().is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            debug!(path = %entry.path().display(), "skipping non UTF-8 folder name");
            continue;
        };
        if rules.is_target_folder(&name) {
            folders.push(name);
        } else {
            debug!(folder = %name, "folder out of scope");
        }
    }

    folders.sort();
    Ok(folders)
}

/// Whether a walk entry counts as a file.
///
/// Regular files, symlinks to files, and dangling symlinks (which then fail
/// to open) count. Symlinks to directories do not.
pub fn is_file_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && !entry.path().is_dir())
}

/// Walk every file beneath `dir`, depth first, sorted by file name.
///
/// Directory symlinks are not descended into. Entries the walker cannot read
/// are yielded as errors so the caller can decide to skip them.
pub fn walk_files(dir: &Path) -> impl Iterator<Item = Result<PathBuf, walkdir::Error>> {
    WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) if is_file_entry(&entry) => Some(Ok(entry.into_path())),
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        })
}
