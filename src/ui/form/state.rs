//! State for the seller analysis form.

use std::fmt;

use crate::analysis::AnalysisResult;
use crate::ui::mvi::UiState;

/// Identifies one submission. Allocated by the reducer on every accepted
/// submit, strictly increasing for the life of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle stage of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

/// Phase together with its payload, so a result and an error message can
/// never be held at the same time.
#[derive(Debug, Clone, PartialEq, Default)]
pub(super) enum Status {
    #[default]
    Idle,
    Loading { request_id: RequestId },
    Success(AnalysisResult),
    Error(String),
}

/// The one state object owned by a form instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub(super) link: String,
    pub(super) status: Status,
    pub(super) issued: u64,
}

impl UiState for FormState {}

impl FormState {
    /// Idle form with the input pre-filled.
    pub fn with_link(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            ..Self::default()
        }
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn phase(&self) -> Phase {
        match self.status {
            Status::Idle => Phase::Idle,
            Status::Loading { .. } => Phase::Loading,
            Status::Success(_) => Phase::Success,
            Status::Error(_) => Phase::Error,
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.status {
            Status::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            Status::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Request currently in flight, if any.
    pub fn pending_request(&self) -> Option<RequestId> {
        match self.status {
            Status::Loading { request_id } => Some(request_id),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, Status::Loading { .. })
    }

    /// Whether a submit would be accepted right now.
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.link.trim().is_empty()
    }

    pub(super) fn next_request_id(&self) -> RequestId {
        RequestId(self.issued + 1)
    }
}
