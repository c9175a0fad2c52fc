use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use crossbeam_channel::{bounded, Sender};
use dashboard_core::{run_selection_worker, DashboardController, WorkerStats};
use shared::{domain::Selection, protocol::DashboardEvent};
use tokio::sync::broadcast::{self, error::RecvError};

use crate::controller::events::UiEvent;

pub struct WorkerHandle {
    pub selections: Sender<Selection>,
    pub join: JoinHandle<WorkerStats>,
}

/// Moves the controller onto a worker thread fed by a bounded selection
/// queue. The worker stops once every sender is dropped; the controller, and
/// with it the event channel, is dropped right after.
pub fn launch(mut controller: DashboardController, capacity: usize) -> Result<WorkerHandle> {
    let (selections, selection_rx) = bounded(capacity.max(1));
    let join = thread::Builder::new()
        .name("selection-worker".into())
        .spawn(move || run_selection_worker(&mut controller, &selection_rx))
        .context("failed to spawn selection worker thread")?;

    Ok(WorkerHandle { selections, join })
}

/// Forwards controller events to `sink` until the event channel closes.
pub fn pump_events(
    mut events: broadcast::Receiver<DashboardEvent>,
    mut sink: impl FnMut(UiEvent),
) -> u64 {
    let mut delivered = 0;
    loop {
        match events.blocking_recv() {
            Ok(event) => {
                delivered += 1;
                sink(UiEvent::from(event));
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "presenter fell behind dashboard events");
                sink(UiEvent::Info(format!(
                    "skipped {skipped} stale dashboard updates"
                )));
            }
            Err(RecvError::Closed) => break,
        }
    }
    delivered
}

pub fn spawn_presenter(
    events: broadcast::Receiver<DashboardEvent>,
    sink: impl FnMut(UiEvent) + Send + 'static,
) -> Result<JoinHandle<u64>> {
    thread::Builder::new()
        .name("presenter".into())
        .spawn(move || pump_events(events, sink))
        .context("failed to spawn presenter thread")
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
