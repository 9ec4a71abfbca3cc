//! Hash report output: per-folder text files and the JSON manifest

pub mod manifest;
pub mod report_writer;

pub use manifest::{Manifest, ManifestInfo, MANIFEST_FILE_NAME};
pub use report_writer::{create_output_dir, read_report_entries, report_file_name, FolderReport};
