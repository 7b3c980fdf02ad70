//! Submission controller.
//!
//! The reducer decides *whether* a submission starts. This module performs
//! the side effect: one request per accepted submission, its result turned
//! into an [`AnalysisOutcome`] and handed back to the form.

use std::sync::mpsc;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::analysis::{AnalysisOutcome, AnalysisRequest};
use crate::service::{AnalysisService, ServiceError};
use crate::ui::events::AppEvent;
use crate::ui::form::{FormIntent, FormReducer, FormState, RequestId};
use crate::ui::mvi::Reducer;

/// Shown whenever the service could not be reached or answered garbage.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to connect to the analysis service.";

/// Convert a service call result into what the form displays.
///
/// Transport and decode failures are logged with their cause and replaced by
/// [`FALLBACK_ERROR_MESSAGE`].
pub fn settle(result: Result<AnalysisOutcome, ServiceError>) -> AnalysisOutcome {
    match result {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::warn!(
                target: "controller",
                kind = err.kind(),
                error = ?err,
                "analysis request failed"
            );
            AnalysisOutcome::Failure(FALLBACK_ERROR_MESSAGE.to_string())
        }
    }
}

/// Issues analysis requests on the tokio runtime and posts their outcome
/// back to the UI event loop.
#[derive(Clone)]
pub struct SubmissionController {
    service: Arc<dyn AnalysisService>,
    runtime: Handle,
    events: mpsc::Sender<AppEvent>,
}

impl SubmissionController {
    pub fn new(
        service: Arc<dyn AnalysisService>,
        runtime: Handle,
        events: mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            service,
            runtime,
            events,
        }
    }

    /// Start the request for `request_id`.
    ///
    /// The task resolves to `true` when the outcome reached the event loop
    /// and `false` when the loop was already gone and the outcome was
    /// discarded.
    pub fn dispatch(&self, request_id: RequestId, request: AnalysisRequest) -> JoinHandle<bool> {
        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        tracing::debug!(target: "controller", %request_id, "dispatching analysis request");

        self.runtime.spawn(async move {
            let outcome = settle(service.analyze(request).await);
            deliver(&events, request_id, outcome)
        })
    }
}

fn deliver(events: &mpsc::Sender<AppEvent>, request_id: RequestId, outcome: AnalysisOutcome) -> bool {
    match events.send(AppEvent::AnalysisResolved {
        request_id,
        outcome,
    }) {
        Ok(()) => true,
        Err(_) => {
            tracing::trace!(
                target: "controller",
                %request_id,
                "analysis result dropped (form closed)"
            );
            false
        }
    }
}

/// Run one submission to completion without an event loop.
///
/// Returns the state unchanged when the submit is refused (blank link or a
/// request already pending).
pub async fn submit_and_wait(service: &dyn AnalysisService, state: FormState) -> FormState {
    let before = state.pending_request();
    let state = FormReducer::reduce(state, FormIntent::Submit);
    let Some(request_id) = state.pending_request().filter(|id| Some(*id) != before) else {
        return state;
    };

    let request = AnalysisRequest::new(state.link().trim());
    let outcome = settle(service.analyze(request).await);
    FormReducer::reduce(state, FormIntent::Resolved { request_id, outcome })
}
