//! Destination of a run's user-facing log lines

/// Receives the user-facing log lines of a run.
pub trait EventSink: Send + Sync {
    fn log(&self, line: String);
}
