//! Error taxonomy shared by both tools

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the hasher and the string relocator.
///
/// `UnreadableFile` never aborts a hashing run; the pipeline logs it and moves
/// on. Every other variant ends the run it occurs in.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("root path does not exist or is not a directory: {}", .0.display())]
    InvalidRoot(PathBuf),

    #[error("cannot read {}: {source}", path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot list {}: {source}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("a run is already in progress")]
    RunInProgress,

    #[error("cannot start background run: {0}")]
    Spawn(#[source] io::Error),

    #[error("background run panicked: {0}")]
    Panicked(String),
}

impl ToolError {
    pub(crate) fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ToolError::OutputWrite {
            path: path.into(),
            source,
        }
    }

    /// Whether this failure only skips one file instead of ending the run.
    pub fn is_skippable(&self) -> bool {
        matches!(self, ToolError::UnreadableFile { .. })
    }
}
