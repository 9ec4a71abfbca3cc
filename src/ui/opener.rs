//! Best-effort "open in file browser" capability

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Shows a directory to the user.
pub trait FolderOpener: Send + Sync {
    fn open(&self, path: &Path) -> io::Result<()>;
}

/// Launches the platform file browser without waiting for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl FolderOpener for SystemOpener {
    fn open(&self, path: &Path) -> io::Result<()> {
        let program = if cfg!(target_os = "windows") {
            "explorer"
        } else if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        };

        Command::new(program)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
    }
}

/// Does nothing; used when opening is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOpener;

impl FolderOpener for NoopOpener {
    fn open(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}
