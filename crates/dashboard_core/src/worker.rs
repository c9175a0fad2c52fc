//! Serializes selection triggers into the controller, coalescing bursts so
//! only the newest pending selection is recomputed.

use crossbeam_channel::Receiver;
use shared::domain::Selection;

use crate::controller::DashboardController;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkerStats {
    pub received: u64,
    pub applied: u64,
    pub discarded: u64,
    pub rejected: u64,
}

/// Returns the last selection of a burst plus how many earlier ones it
/// superseded.
pub fn coalesce_latest(
    first: Selection,
    pending: impl IntoIterator<Item = Selection>,
) -> (Selection, u64) {
    pending
        .into_iter()
        .fold((first, 0), |(_, superseded), next| (next, superseded + 1))
}

/// Drives the controller until every sender of `selections` is dropped.
pub fn run_selection_worker(
    controller: &mut DashboardController,
    selections: &Receiver<Selection>,
) -> WorkerStats {
    let mut stats = WorkerStats::default();

    while let Ok(first) = selections.recv() {
        let (latest, superseded) = coalesce_latest(first, selections.try_iter());
        stats.received += 1 + superseded;
        stats.discarded += superseded;
        if superseded > 0 {
            tracing::debug!(superseded, "coalesced stale selection changes");
        }

        match controller.on_selection_change(latest) {
            Ok(publication) => {
                stats.applied += 1;
                tracing::debug!(revision = publication.revision, "applied selection change");
            }
            Err(_) => stats.rejected += 1,
        }
    }

    tracing::debug!(
        received = stats.received,
        applied = stats.applied,
        discarded = stats.discarded,
        rejected = stats.rejected,
        "selection worker stopped"
    );
    stats
}

#[cfg(test)]
#[path = "tests/worker_tests.rs"]
mod tests;
