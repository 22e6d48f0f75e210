use crate::model::SearchResults;

use super::error::ErrorInfo;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Outcome of the most recent search a controller issued.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchState {
    pub status: FetchStatus,
    pub data: Option<SearchResults>,
    pub error: Option<ErrorInfo>,
    pub request_id: u64,
}

impl FetchState {
    pub fn loading(request_id: u64) -> Self {
        Self {
            status: FetchStatus::Loading,
            data: None,
            error: None,
            request_id,
        }
    }

    pub fn success(request_id: u64, data: SearchResults) -> Self {
        Self {
            status: FetchStatus::Success,
            data: Some(data),
            error: None,
            request_id,
        }
    }

    pub fn failed(request_id: u64, error: ErrorInfo) -> Self {
        Self {
            status: FetchStatus::Error,
            data: None,
            error: Some(error),
            request_id,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }
}
