//! Aggregate JSON manifest of every hashed file

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::error::ToolError;

pub const GAME_NAME: &str = "The Sims 4";
pub const MANIFEST_FILE_NAME: &str = "master_hashes.json";

/// Run metadata. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub game: String,
    pub date: String,
    pub base_path: String,
}

/// Relative path to digest for every successfully hashed file of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub info: ManifestInfo,
    pub files: BTreeMap<String, String>,
}

impl Manifest {
    pub fn new(date: impl Into<String>, base_path: &Path) -> Self {
        Self {
            info: ManifestInfo {
                game: GAME_NAME.to_string(),
                date: date.into(),
                base_path: base_path.display().to_string(),
            },
            files: BTreeMap::new(),
        }
    }

    /// Record a digest. A repeated relative path silently replaces the earlier entry.
    pub fn insert(&mut self, rel_path: impl Into<String>, digest: impl Into<String>) {
        self.files.insert(rel_path.into(), digest.into());
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Serialize as UTF-8 JSON indented with 4 spaces.
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut ser)?;
        Ok(out)
    }

    pub fn write_to(&self, path: &Path) -> Result<(), ToolError> {
        let bytes = self
            .to_json()
            .map_err(|e| ToolError::output(path, e.into()))?;
        let file = File::create(path).map_err(|e| ToolError::output(path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(&bytes)
            .and_then(|_| writer.flush())
            .map_err(|e| ToolError::output(path, e))
    }
}
