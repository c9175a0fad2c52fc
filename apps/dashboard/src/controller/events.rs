//! Presentation-side events and error modeling for the dashboard front-end.

use shared::{
    error::{ApiError, ErrorCode},
    protocol::{DashboardEvent, Publication},
};

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Published(Publication),
    Info(String),
    Error(UiError),
}

impl From<DashboardEvent> for UiEvent {
    fn from(value: DashboardEvent) -> Self {
        match value {
            DashboardEvent::Published(publication) => UiEvent::Published(publication),
            DashboardEvent::SelectionRejected { selection, error } => {
                UiEvent::Error(UiError::from_api(
                    UiErrorContext::Selection,
                    &ApiError::new(
                        error.code,
                        format!(
                            "{} (site {}, payload {})",
                            error.message, selection.site_filter, selection.payload_range
                        ),
                    ),
                ))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Validation,
    Transport,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    Startup,
    Selection,
    Input,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn new(
        category: UiErrorCategory,
        context: UiErrorContext,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            context,
            message: message.into(),
        }
    }

    /// A background thread died; the session cannot continue.
    pub fn thread_panicked(thread: &str) -> Self {
        Self::from_api(
            UiErrorContext::Selection,
            &ApiError::new(ErrorCode::Internal, format!("{thread} thread panicked")),
        )
    }

    pub fn from_api(context: UiErrorContext, error: &ApiError) -> Self {
        let category = match error.code {
            ErrorCode::InvalidSelection | ErrorCode::InvalidRecord | ErrorCode::EmptyDataset => {
                UiErrorCategory::Validation
            }
            ErrorCode::Internal => UiErrorCategory::Unknown,
        };
        Self::new(category, context, error.message.clone())
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
