//! Streaming SHA-256 digests of game files

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use super::error::ToolError;

/// Read size used while streaming a file through the hasher.
pub const CHUNK_SIZE: usize = 8 * 1024;

/// Compute the SHA-256 hash of a file
///
/// # Arguments
/// * `path` - Path to the file
///
/// # Returns
/// Lowercase hex-encoded digest (64 characters), or `UnreadableFile` when the
/// file cannot be opened or read to the end
pub fn compute_file_hash(path: &Path) -> Result<String, ToolError> {
    let unreadable = |source| ToolError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(unreadable)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; CHUNK_SIZE];

    loop {
        let bytes_read = file.read(&mut buffer).map_err(unreadable)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Like [`compute_file_hash`] but maps any failure to `None`.
pub fn try_file_hash(path: &Path) -> Option<String> {
    match compute_file_hash(path) {
        Ok(hash) => Some(hash),
        Err(e) => {
            debug!(error = %e, "no digest available");
            None
        }
    }
}
