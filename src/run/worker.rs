//! Single background run per tool, reported over an event channel

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tracing::debug;

use crate::core::error::ToolError;

use super::events::{ChannelSink, EventSink, RunEvent};

/// Runs at most one job at a time off the calling thread.
///
/// `start` refuses while a run is active, which is how the UI keeps its start
/// action disabled. The busy flag is cleared before the final event is sent,
/// on success, error and panic alike.
#[derive(Debug, Clone, Default)]
pub struct Worker {
    busy: Arc<AtomicBool>,
}

struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Receiving end of a started run.
#[derive(Debug)]
pub struct RunHandle<T> {
    events: UnboundedReceiver<RunEvent<T>>,
    thread: JoinHandle<()>,
}

impl Worker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn start<T, F>(&self, job: F) -> Result<RunHandle<T>, ToolError>
    where
        T: Send + 'static,
        F: FnOnce(&dyn EventSink) -> Result<T, ToolError> + Send + 'static,
    {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ToolError::RunInProgress);
        }
        let guard = BusyGuard(self.busy.clone());
        let (tx, events) = unbounded_channel();

        let thread = thread::Builder::new()
            .name("ts4-run".into())
            .spawn(move || {
                let sink = ChannelSink::new(tx.clone());
                let result = panic::catch_unwind(AssertUnwindSafe(|| job(&sink)))
                    .unwrap_or_else(|payload| Err(ToolError::Panicked(panic_message(&*payload))));
                drop(guard);
                if tx.send(RunEvent::Finished(result)).is_err() {
                    debug!("run finished with nobody listening");
                }
            })
            .map_err(ToolError::Spawn)?;

        Ok(RunHandle { events, thread })
    }
}

impl<T> RunHandle<T> {
    /// Next event, blocking. `None` once the run has finished and drained.
    pub fn next_event(&mut self) -> Option<RunEvent<T>> {
        self.events.blocking_recv()
    }

    /// Feed every log line to `on_log` and return the run's result.
    pub fn wait(mut self, mut on_log: impl FnMut(&str)) -> Result<T, ToolError> {
        while let Some(event) = self.next_event() {
            match event {
                RunEvent::Log(line) => on_log(&line),
                RunEvent::Finished(result) => {
                    let _ = self.thread.join();
                    return result;
                }
            }
        }
        Err(ToolError::Panicked("run ended without a result".into()))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
