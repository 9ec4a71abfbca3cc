//! Background runs of the two tools

pub mod events;
pub mod hasher;
pub mod strings;
pub mod worker;

pub use events::{EventSink, MemorySink, RunEvent};
pub use hasher::{run_hashing, run_stamp, HashJob, HashSummary};
pub use strings::{run_relocation, RelocationJob, RelocationSummary};
pub use worker::{RunHandle, Worker};
