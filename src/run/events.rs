//! Log stream and completion events of a background run

use std::sync::Mutex;
use tokio::sync::mpsc::UnboundedSender;

use crate::core::error::ToolError;

pub use crate::core::sink::EventSink;

/// What a background run reports to whoever drives the UI.
#[derive(Debug)]
pub enum RunEvent<T> {
    Log(String),
    Finished(Result<T, ToolError>),
}

/// Forwards log lines over the run's event channel.
#[derive(Debug)]
pub struct ChannelSink<T> {
    tx: UnboundedSender<RunEvent<T>>,
}

impl<T> ChannelSink<T> {
    pub fn new(tx: UnboundedSender<RunEvent<T>>) -> Self {
        Self { tx }
    }
}

impl<T: Send> EventSink for ChannelSink<T> {
    fn log(&self, line: String) {
        // The receiver may already be gone if the UI quit; the run still completes.
        let _ = self.tx.send(RunEvent::Log(line));
    }
}

/// Collects lines in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

impl EventSink for MemorySink {
    fn log(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    #[test]
    fn test_memory_sink_keeps_order() {
        let sink = MemorySink::new();
        sink.log("first".into());
        sink.log("second".into());
        assert_eq!(sink.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_channel_sink_forwards_lines() {
        let (tx, mut rx) = unbounded_channel::<RunEvent<()>>();
        let sink = ChannelSink::new(tx);
        sink.log("[>] Scanning: Game...".into());

        match rx.try_recv().unwrap() {
            RunEvent::Log(line) => assert_eq!(line, "[>] Scanning: Game..."),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_channel_sink_ignores_closed_receiver() {
        let (tx, rx) = unbounded_channel::<RunEvent<()>>();
        drop(rx);
        ChannelSink::new(tx).log("nobody listening".into());
    }
}
