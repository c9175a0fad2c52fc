//! Reactive controller: selection changes in, paired derived views out.

use std::sync::Arc;

use shared::{
    domain::{LaunchRecord, Selection},
    error::ApiError,
    protocol::{ChartTitles, DashboardEvent, Publication},
};
use tokio::sync::broadcast;

use crate::{
    aggregate::{aggregate_correlation, aggregate_ratio},
    dataset::Dataset,
    error::{DatasetError, SelectionError},
    filter::filter_launches,
};

const EVENT_CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerPhase {
    Idle,
    Computing,
    Published,
}

impl ControllerPhase {
    pub fn can_transition_to(self, next: ControllerPhase) -> bool {
        matches!(
            (self, next),
            (ControllerPhase::Idle, ControllerPhase::Computing)
                | (ControllerPhase::Computing, ControllerPhase::Published)
                | (ControllerPhase::Published, ControllerPhase::Idle)
        )
    }
}

/// Runs the filter once for a selection and derives both views from that
/// single subset.
pub fn derive_publication(dataset: &Dataset, selection: &Selection, revision: u64) -> Publication {
    let subset = filter_launches(dataset, selection);
    let ratio = aggregate_ratio(&subset, selection);
    let correlation = aggregate_correlation(&subset);

    tracing::debug!(
        site = %selection.site_filter,
        lo = selection.payload_range.lo,
        hi = selection.payload_range.hi,
        rows = subset.len(),
        revision,
        "derived dashboard views"
    );

    Publication {
        revision,
        selection: selection.clone(),
        titles: ChartTitles::for_filter(&selection.site_filter),
        ratio,
        correlation,
    }
}

pub struct DashboardController {
    dataset: Arc<Dataset>,
    selection: Selection,
    latest: Option<Publication>,
    revision: u64,
    phase: ControllerPhase,
    events: broadcast::Sender<DashboardEvent>,
}

impl DashboardController {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            selection: dataset.initial_selection(),
            dataset,
            latest: None,
            revision: 0,
            phase: ControllerPhase::Idle,
            events,
        }
    }

    /// Loads the dataset and wires a controller over it. This is the only
    /// place a dataset error can surface.
    pub fn initialize(rows: impl IntoIterator<Item = LaunchRecord>) -> Result<Self, DatasetError> {
        let dataset = Dataset::load(rows)?;
        Ok(Self::new(Arc::new(dataset)))
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn latest_publication(&self) -> Option<&Publication> {
        self.latest.as_ref()
    }

    pub fn phase(&self) -> ControllerPhase {
        self.phase
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<DashboardEvent> {
        self.events.subscribe()
    }

    /// Publishes views for the current selection, e.g. the initial state
    /// right after startup.
    pub fn refresh(&mut self) -> &Publication {
        let selection = self.selection.clone();
        self.recompute(selection)
    }

    /// Applies a combined site/range change. An invalid selection is
    /// reported to the caller and to subscribers; the previous publication
    /// stays current.
    pub fn on_selection_change(
        &mut self,
        selection: Selection,
    ) -> Result<&Publication, SelectionError> {
        if let Err(err) = self.dataset.validate(&selection) {
            tracing::warn!(
                site = %selection.site_filter,
                range = %selection.payload_range,
                error = %err,
                "rejected selection change"
            );
            let _ = self.events.send(DashboardEvent::SelectionRejected {
                selection,
                error: ApiError::from(&err),
            });
            return Err(err);
        }

        Ok(self.recompute(selection))
    }

    fn recompute(&mut self, selection: Selection) -> &Publication {
        self.transition(ControllerPhase::Computing);
        let revision = self.revision + 1;
        let publication = derive_publication(&self.dataset, &selection, revision);

        self.revision = revision;
        self.selection = selection;
        self.transition(ControllerPhase::Published);

        if self
            .events
            .send(DashboardEvent::Published(publication.clone()))
            .is_err()
        {
            tracing::debug!(revision, "no dashboard subscribers for publication");
        }
        self.transition(ControllerPhase::Idle);

        self.latest.insert(publication)
    }

    fn transition(&mut self, next: ControllerPhase) {
        debug_assert!(
            self.phase.can_transition_to(next),
            "invalid controller transition {:?} -> {:?}",
            self.phase,
            next
        );
        tracing::trace!(from = ?self.phase, to = ?next, "controller phase");
        self.phase = next;
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
