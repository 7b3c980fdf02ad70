//! Reducer for the seller analysis form.

use crate::analysis::AnalysisOutcome;
use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{FormState, Status};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::InsertChar(ch) => edit(state, |current| {
                if !ch.is_control() {
                    current.push(ch);
                }
            }),
            FormIntent::Paste(text) => edit(state, |current| {
                current.extend(text.chars().filter(|ch| !ch.is_control()));
            }),
            FormIntent::Backspace => edit(state, |current| {
                current.pop();
            }),
            FormIntent::ClearLink => edit(state, String::clear),

            FormIntent::Submit => {
                if !state.can_submit() {
                    return state;
                }
                let request_id = state.next_request_id();
                FormState {
                    status: Status::Loading { request_id },
                    issued: request_id.get(),
                    ..state
                }
            }

            FormIntent::Resolved {
                request_id,
                outcome,
            } => {
                if state.pending_request() != Some(request_id) {
                    // Stale or unsolicited completion
                    return state;
                }
                let status = match outcome {
                    AnalysisOutcome::Success(result) => Status::Success(result),
                    AnalysisOutcome::Failure(message) => Status::Error(message),
                };
                FormState { status, ..state }
            }
        }
    }
}

/// Apply an edit to the link unless a request is in flight.
fn edit(mut state: FormState, apply: impl FnOnce(&mut String)) -> FormState {
    if !state.is_loading() {
        apply(&mut state.link);
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalysisResult;
    use crate::ui::form::Phase;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            total_feedback: 120,
            positive_percent: 98.5,
            breakdown: None,
            recent_feedbacks: None,
            issue_sentiment_summary: None,
        }
    }

    fn loading() -> FormState {
        FormReducer::reduce(
            FormState::with_link("https://example.com/item/1"),
            FormIntent::Submit,
        )
    }

    #[test]
    fn submit_moves_to_loading_with_fresh_id() {
        let state = loading();
        assert_eq!(state.phase(), Phase::Loading);
        assert_eq!(state.pending_request().map(|id| id.get()), Some(1));
    }

    #[test]
    fn blank_submit_is_ignored() {
        let state = FormState::with_link("   ");
        let next = FormReducer::reduce(state.clone(), FormIntent::Submit);
        assert_eq!(next, state);
    }

    #[test]
    fn submit_while_loading_is_ignored() {
        let state = loading();
        let next = FormReducer::reduce(state.clone(), FormIntent::Submit);
        assert_eq!(next, state);
    }

    #[test]
    fn success_stores_result() {
        let state = loading();
        let request_id = state.pending_request().unwrap();
        let next = FormReducer::reduce(
            state,
            FormIntent::Resolved {
                request_id,
                outcome: AnalysisOutcome::Success(sample_result()),
            },
        );
        assert_eq!(next.phase(), Phase::Success);
        assert_eq!(next.result(), Some(&sample_result()));
        assert!(next.error_message().is_none());
    }

    #[test]
    fn failure_stores_message() {
        let state = loading();
        let request_id = state.pending_request().unwrap();
        let next = FormReducer::reduce(
            state,
            FormIntent::Resolved {
                request_id,
                outcome: AnalysisOutcome::Failure("invalid link".into()),
            },
        );
        assert_eq!(next.phase(), Phase::Error);
        assert_eq!(next.error_message(), Some("invalid link"));
        assert!(next.result().is_none());
    }

    #[test]
    fn stale_completion_is_ignored() {
        let first = loading();
        let stale_id = first.pending_request().unwrap();
        let failed = FormReducer::reduce(
            first,
            FormIntent::Resolved {
                request_id: stale_id,
                outcome: AnalysisOutcome::Failure("boom".into()),
            },
        );
        let second = FormReducer::reduce(failed, FormIntent::Submit);
        let next = FormReducer::reduce(
            second.clone(),
            FormIntent::Resolved {
                request_id: stale_id,
                outcome: AnalysisOutcome::Success(sample_result()),
            },
        );
        assert_eq!(next, second);
        assert_eq!(next.pending_request().map(|id| id.get()), Some(2));
    }

    #[test]
    fn resubmit_clears_previous_result() {
        let state = loading();
        let request_id = state.pending_request().unwrap();
        let done = FormReducer::reduce(
            state,
            FormIntent::Resolved {
                request_id,
                outcome: AnalysisOutcome::Success(sample_result()),
            },
        );
        let again = FormReducer::reduce(done, FormIntent::Submit);
        assert_eq!(again.phase(), Phase::Loading);
        assert!(again.result().is_none());
        assert!(again.error_message().is_none());
    }

    #[test]
    fn editing_is_blocked_while_loading() {
        let state = loading();
        let next = FormReducer::reduce(state.clone(), FormIntent::InsertChar('x'));
        assert_eq!(next.link(), state.link());
        let next = FormReducer::reduce(next, FormIntent::ClearLink);
        assert_eq!(next.link(), state.link());
    }

    #[test]
    fn editing_keeps_previous_outcome() {
        let state = FormState::with_link("abc");
        let state = FormReducer::reduce(state, FormIntent::Backspace);
        let state = FormReducer::reduce(state, FormIntent::InsertChar('d'));
        let state = FormReducer::reduce(state, FormIntent::Paste("e\nf\t".into()));
        assert_eq!(state.link(), "abdef");
        assert_eq!(state.phase(), Phase::Idle);
    }
}
