//! Per-folder text reports and the timestamped output directory

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::error::ToolError;

pub const OUTPUT_DIR_PREFIX: &str = "Sims4_Integrity_";

/// File name of the text report for a top-level folder.
pub fn report_file_name(folder: &str) -> String {
    format!("Hashes_{folder}.txt")
}

/// Create `<parent>/Sims4_Integrity_<stamp>` and return its path.
pub fn create_output_dir(parent: &Path, stamp: &str) -> Result<PathBuf, ToolError> {
    let dir = parent.join(format!("{OUTPUT_DIR_PREFIX}{stamp}"));
    fs::create_dir_all(&dir).map_err(|e| ToolError::output(&dir, e))?;
    Ok(dir)
}

/// Text report for one scanned folder
///
/// Layout:
/// ```text
/// TS4 FOLDER: <folder>
///
/// <relative-path> | <sha256-hex>
/// ```
#[derive(Debug)]
pub struct FolderReport {
    path: PathBuf,
    writer: BufWriter<File>,
    lines: usize,
}

impl FolderReport {
    /// Create (or truncate) the report for `folder` and write its header.
    pub fn create(output_dir: &Path, folder: &str) -> Result<Self, ToolError> {
        let path = output_dir.join(report_file_name(folder));
        let file = File::create(&path).map_err(|e| ToolError::output(&path, e))?;
        let mut writer = BufWriter::new(file);
        write!(writer, "TS4 FOLDER: {folder}\n\n").map_err(|e| ToolError::output(&path, e))?;
        Ok(Self {
            path,
            writer,
            lines: 0,
        })
    }

    pub fn append(&mut self, rel_path: &str, digest: &str) -> Result<(), ToolError> {
        writeln!(self.writer, "{rel_path} | {digest}").map_err(|e| ToolError::output(&self.path, e))?;
        self.lines += 1;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries written so far.
    pub fn len(&self) -> usize {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines == 0
    }

    /// Flush to disk and return the report path.
    pub fn finish(mut self) -> Result<PathBuf, ToolError> {
        self.writer
            .flush()
            .map_err(|e| ToolError::output(&self.path, e))?;
        Ok(self.path)
    }
}

/// Parse the entries of a text report back into `(relative path, digest)` pairs.
pub fn read_report_entries(path: &Path) -> std::io::Result<Vec<(String, String)>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .skip(2)
        .filter_map(|line| line.rsplit_once(" | "))
        .map(|(rel, digest)| (rel.to_string(), digest.to_string()))
        .collect())
}
