//! Hasher pipeline: classify, walk, digest, report

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::core::digest::compute_file_hash;
use crate::core::error::ToolError;
use crate::core::paths::{relative_key, resolve_root};
use crate::core::rules::FolderRules;
use crate::reporting::manifest::{Manifest, MANIFEST_FILE_NAME};
use crate::reporting::report_writer::{create_output_dir, FolderReport};
use crate::scanner::file_scanner::{list_target_folders, walk_files};

use super::events::EventSink;

/// Local time formatted as `YYYYMMDD_HHMMSS`.
pub fn run_stamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Inputs of one hashing run.
#[derive(Debug, Clone)]
pub struct HashJob {
    pub root: PathBuf,
    /// Directory in which `Sims4_Integrity_<stamp>` is created.
    pub output_parent: PathBuf,
    pub rules: FolderRules,
    pub stamp: String,
}

impl HashJob {
    pub fn new(root: impl Into<PathBuf>, output_parent: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output_parent: output_parent.into(),
            rules: FolderRules::sims4(),
            stamp: run_stamp(),
        }
    }

    pub fn with_rules(mut self, rules: FolderRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_stamp(mut self, stamp: impl Into<String>) -> Self {
        self.stamp = stamp.into();
        self
    }
}

/// Outcome of a completed hashing run.
#[derive(Debug, Clone)]
pub struct HashSummary {
    pub output_dir: PathBuf,
    pub manifest_path: PathBuf,
    pub reports: Vec<PathBuf>,
    pub folders: Vec<String>,
    pub hashed: usize,
    pub skipped: usize,
}

/// Run the hasher end to end.
///
/// Unreadable files are logged and skipped. An invalid root, an unreadable
/// top-level listing, or any report/manifest write failure ends the run; the
/// error is also pushed to the log stream.
pub fn run_hashing(job: &HashJob, sink: &dyn EventSink) -> Result<HashSummary, ToolError> {
    hash_tree(job, sink).inspect_err(|e| {
        warn!(error = %e, "hashing run failed");
        sink.log(format!("Error: {e}"));
    })
}

fn hash_tree(job: &HashJob, sink: &dyn EventSink) -> Result<HashSummary, ToolError> {
    let root = resolve_root(&job.root)?;
    let output_dir = create_output_dir(&job.output_parent, &job.stamp)?;
    info!(root = %root.display(), output = %output_dir.display(), "hashing started");

    let mut manifest = Manifest::new(job.stamp.clone(), &root);
    let folders = list_target_folders(&root, &job.rules)?;

    let mut summary = HashSummary {
        manifest_path: output_dir.join(MANIFEST_FILE_NAME),
        output_dir,
        reports: Vec::with_capacity(folders.len()),
        folders: Vec::with_capacity(folders.len()),
        hashed: 0,
        skipped: 0,
    };

    for folder in folders {
        sink.log(format!("[>] Scanning: {folder}..."));
        let mut report = FolderReport::create(&summary.output_dir, &folder)?;
        summary.skipped += hash_folder(&root, &root.join(&folder), &mut report, &mut manifest, sink)?;
        summary.hashed += report.len();
        summary.reports.push(report.finish()?);
        sink.log(format!("[OK] {folder} done."));
        summary.folders.push(folder);
    }

    manifest.write_to(&summary.manifest_path)?;
    sink.log(format!("[SUCCESS] JSON written: {}", summary.manifest_path.display()));
    info!(hashed = summary.hashed, skipped = summary.skipped, "hashing finished");

    Ok(summary)
}

/// Hash every file under `folder`, returning how many were skipped.
fn hash_folder(
    root: &Path,
    folder: &Path,
    report: &mut FolderReport,
    manifest: &mut Manifest,
    sink: &dyn EventSink,
) -> Result<usize, ToolError> {
    let mut skipped = 0;

    for entry in walk_files(folder) {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                let at = e.path().map(|p| relative_key(root, p)).unwrap_or_default();
                sink.log(format!("[SKIP] {at}: {e}"));
                skipped += 1;
                continue;
            }
        };

        let rel = relative_key(root, &path);
        match compute_file_hash(&path) {
            Ok(digest) => {
                debug!(file = %rel, %digest, "hashed");
                report.append(&rel, &digest)?;
                manifest.insert(rel, digest);
            }
            Err(e) => {
                warn!(file = %rel, error = %e, "skipping unreadable file");
                sink.log(format!("[SKIP] {rel}: {e}"));
                skipped += 1;
            }
        }
    }

    Ok(skipped)
}
