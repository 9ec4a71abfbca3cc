//! Copy a language's string packages into a per-language destination tree

use filetime::FileTime;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::core::error::ToolError;
use crate::core::rules::StringRules;
use crate::core::sink::EventSink;
use crate::scanner::file_scanner::is_file_entry;

/// Find every `Strings_<code>.package` under the search folders of `root`.
///
/// Search folders that do not exist are skipped. Matches are returned per
/// search folder in the configured order, sorted by path within each folder.
pub fn find_packages(root: &Path, rules: &StringRules, code: &str) -> Vec<PathBuf> {
    let wanted = rules.package_name(code);
    let mut found = Vec::new();

    for folder in &rules.search_dirs {
        let search_dir = root.join(folder);
        if !search_dir.is_dir() {
            debug!(dir = %search_dir.display(), "search folder absent");
            continue;
        }

        for entry in WalkDir::new(&search_dir).follow_links(false).sort_by_file_name() {
            match entry {
                Ok(entry) if is_file_entry(&entry) && entry.file_name() == wanted.as_str() => {
                    found.push(entry.into_path());
                }
                Ok(_) => {}
                Err(e) => debug!(error = %e, "skipping unreadable entry"),
            }
        }
    }

    found
}

/// Copy `from` to `to`, overwriting, and carry over access and modification times.
pub fn copy_preserving_times(from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to)?;
    let meta = fs::metadata(from)?;
    filetime::set_file_times(
        to,
        FileTime::from_last_access_time(&meta),
        FileTime::from_last_modification_time(&meta),
    )
}

/// Relocate one language
///
/// # Arguments
/// * `root` - Scan root (already resolved)
/// * `destination` - Destination root; files land in `<destination>/<code>/<relative path>`
/// * `code` - Language code
/// * `rules` - Where to search and how packages are named
/// * `sink` - Receives one line per copied file
///
/// # Returns
/// Relative paths (from `root`) of the copied files. The first copy failure
/// is returned immediately; files copied before it stay on disk.
pub fn relocate_language(
    root: &Path,
    destination: &Path,
    code: &str,
    rules: &StringRules,
    sink: &dyn EventSink,
) -> Result<Vec<PathBuf>, ToolError> {
    let mut copied = Vec::new();

    for package in find_packages(root, rules, code) {
        let rel = package.strip_prefix(root).unwrap_or(&package).to_path_buf();
        let target = destination.join(code).join(&rel);
        let copy_err = |source| ToolError::Copy {
            from: package.clone(),
            to: target.clone(),
            source,
        };

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(copy_err)?;
        }
        copy_preserving_times(&package, &target).map_err(copy_err)?;

        sink.log(format!("  ✓ Copied: {}", rel.display()));
        copied.push(rel);
    }

    Ok(copied)
}
