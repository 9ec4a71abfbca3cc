//! Sims 4 Toolkit Library
//!
//! Integrity hashing of a Sims 4 install (per-folder text reports plus a JSON
//! manifest) and relocation of per-language string packages.

pub mod core;
pub mod reporting;
pub mod run;
pub mod scanner;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::digest::{compute_file_hash, try_file_hash};
    pub use crate::core::error::ToolError;
    pub use crate::core::paths::{relative_key, resolve_root};
    pub use crate::core::rules::{FolderRules, StringRules};
    pub use crate::reporting::manifest::{Manifest, MANIFEST_FILE_NAME};
    pub use crate::reporting::report_writer::{read_report_entries, report_file_name};
    pub use crate::run::events::{EventSink, MemorySink, RunEvent};
    pub use crate::run::hasher::{run_hashing, HashJob, HashSummary};
    pub use crate::run::strings::{run_relocation, RelocationJob, RelocationSummary};
    pub use crate::run::worker::{RunHandle, Worker};
    pub use crate::scanner::language::discover_languages;
    pub use crate::scanner::relocator::relocate_language;
    pub use crate::ui::opener::{FolderOpener, NoopOpener, SystemOpener};
}
