//! Rules, digests, root resolution and the shared error type

pub mod digest;
pub mod error;
pub mod paths;
pub mod rules;
pub mod sink;

pub use digest::{compute_file_hash, try_file_hash};
pub use error::ToolError;
pub use paths::{relative_key, resolve_root};
pub use rules::{FolderRules, StringRules};
pub use sink::EventSink;
