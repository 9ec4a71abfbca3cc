//! File system traversal: target folders, language packages, relocation

pub mod file_scanner;
pub mod language;
pub mod relocator;

pub use file_scanner::{list_target_folders, walk_files};
pub use language::discover_languages;
pub use relocator::{copy_preserving_times, find_packages, relocate_language};
