use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which of the two multi-select filter axes an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterAxis {
    Subjects,
    Levels,
}

impl std::fmt::Display for FilterAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterAxis::Subjects => write!(f, "subjects"),
            FilterAxis::Levels => write!(f, "levels"),
        }
    }
}

/// Errors surfaced by the scoring API client and the client-side guards in
/// front of it.
///
/// Errors are `Clone + PartialEq` so they can be kept in reducer state and
/// compared in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The single-record lookup returned 404
    #[error("{0}")]
    NotFound(String),
    /// Any other non-2xx status, transport failure, undecodable body or
    /// `success: false` envelope
    #[error("{0}")]
    RequestFailed(String),
    /// Client-side guard: a selection set is empty, nothing was sent
    #[error("{}", empty_filter_message(.0))]
    EmptyFilter(FilterAxis),
}

fn empty_filter_message(axis: &FilterAxis) -> &'static str {
    match axis {
        FilterAxis::Subjects => "Select at least one subject",
        FilterAxis::Levels => "Select at least one level",
    }
}

impl ApiError {
    /// The string shown to the user for this error
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        log::warn!("HTTP transport error: {err}");
        ApiError::RequestFailed(format!("Network error: {err}"))
    }
}
