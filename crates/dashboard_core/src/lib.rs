pub mod aggregate;
pub mod controller;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod worker;

pub use aggregate::{aggregate_correlation, aggregate_ratio};
pub use controller::{derive_publication, ControllerPhase, DashboardController};
pub use dataset::Dataset;
pub use error::{DatasetError, SelectionError};
pub use filter::{filter_launches, FilteredSubset};
pub use worker::{coalesce_latest, run_selection_worker, WorkerStats};
