//! Hands selection changes from the input loop to the selection worker.

use crossbeam_channel::{Sender, TrySendError};
use shared::domain::Selection;

use crate::controller::events::{UiError, UiErrorCategory, UiErrorContext};

/// Queues a selection for the worker. When the queue is full the call waits
/// for room instead of dropping, so the newest selection always reaches the
/// worker.
pub fn dispatch_selection_change(
    cmd_tx: &Sender<Selection>,
    selection: Selection,
) -> Result<(), UiError> {
    let site = selection.site_filter.to_string();
    match cmd_tx.try_send(selection) {
        Ok(()) => {
            tracing::debug!(site = %site, "queued selection change");
            Ok(())
        }
        Err(TrySendError::Full(selection)) => {
            tracing::warn!(site = %site, "selection queue is full; waiting for worker");
            cmd_tx.send(selection).map_err(|_| worker_gone())
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(site = %site, "selection queue disconnected");
            Err(worker_gone())
        }
    }
}

fn worker_gone() -> UiError {
    UiError::new(
        UiErrorCategory::Transport,
        UiErrorContext::Selection,
        "selection worker disconnected (possible startup/runtime failure); restart the dashboard",
    )
}

#[cfg(test)]
#[path = "tests/orchestration_tests.rs"]
mod tests;
