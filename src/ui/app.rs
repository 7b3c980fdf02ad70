use crate::analysis::{AnalysisOutcome, AnalysisRequest};
use crate::controller::SubmissionController;
use crate::ui::form::{FormIntent, FormReducer, FormState, FormView, RequestId};
use crate::ui::mvi::Reducer;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Form state (MVI pattern).
    form: FormState,
    /// Issues requests (resource, managed outside MVI).
    controller: SubmissionController,
    service_url: String,
    animation_tick: u8,
}

impl App {
    pub fn new(form: FormState, controller: SubmissionController) -> Self {
        Self {
            should_quit: false,
            form,
            controller,
            service_url: String::new(),
            animation_tick: 0,
        }
    }

    /// Label shown in the header.
    pub fn with_service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = url.into();
        self
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn view(&self) -> FormView {
        FormView::project(&self.form)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        if self.form.is_loading() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[(self.animation_tick as usize) % SPINNER_FRAMES.len()]
    }

    pub fn edit(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    pub fn on_paste(&mut self, text: &str) {
        self.edit(FormIntent::Paste(text.to_string()));
    }

    /// Submit the current link.
    ///
    /// Returns the id of the request that was issued, or `None` when the
    /// submit was refused (blank link or a request already in flight).
    pub fn submit(&mut self) -> Option<RequestId> {
        let before = self.form.pending_request();
        dispatch_mvi!(self, form, FormReducer, FormIntent::Submit);
        let request_id = self.form.pending_request().filter(|id| Some(*id) != before)?;

        self.animation_tick = 0;
        let request = AnalysisRequest::new(self.form.link().trim());
        // The task reports back through the event channel
        drop(self.controller.dispatch(request_id, request));
        Some(request_id)
    }

    pub fn on_analysis_resolved(&mut self, request_id: RequestId, outcome: AnalysisOutcome) {
        if self.form.pending_request() != Some(request_id) {
            tracing::debug!(target: "app", %request_id, "ignoring stale analysis result");
            return;
        }
        tracing::info!(
            target: "app",
            %request_id,
            success = outcome.is_success(),
            "analysis finished"
        );
        dispatch_mvi!(
            self,
            form,
            FormReducer,
            FormIntent::Resolved {
                request_id,
                outcome
            }
        );
    }
}
