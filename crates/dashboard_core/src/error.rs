use shared::{
    domain::{PayloadRange, SiteName},
    error::{ApiError, ErrorCode},
};
use thiserror::Error;

/// Raised only while building the dataset; the dashboard cannot start
/// without at least one valid launch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    #[error("launch dataset is empty; at least one record is required")]
    Empty,
    #[error("launch record {index} has invalid payload mass {payload_mass_kg} kg")]
    InvalidRecord { index: usize, payload_mass_kg: f64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    #[error("unknown launch site '{0}'")]
    UnknownSite(SiteName),
    #[error("payload range {0} is invalid: bounds must be finite with lo <= hi")]
    InvalidRange(PayloadRange),
}

impl From<&DatasetError> for ApiError {
    fn from(value: &DatasetError) -> Self {
        let code = match value {
            DatasetError::Empty => ErrorCode::EmptyDataset,
            DatasetError::InvalidRecord { .. } => ErrorCode::InvalidRecord,
        };
        ApiError::new(code, value.to_string())
    }
}

impl From<&SelectionError> for ApiError {
    fn from(value: &SelectionError) -> Self {
        ApiError::new(ErrorCode::InvalidSelection, value.to_string())
    }
}
