//! Intents for the seller analysis form.

use crate::analysis::AnalysisOutcome;
use crate::ui::mvi::Intent;

use super::state::RequestId;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Typed character at the end of the link.
    InsertChar(char),

    /// Pasted text appended to the link. Control characters are dropped.
    Paste(String),

    /// Remove the last character of the link.
    Backspace,

    /// Empty the input.
    ClearLink,

    /// User asked for an analysis of the current link.
    Submit,

    /// The request issued for `request_id` finished.
    Resolved {
        request_id: RequestId,
        outcome: AnalysisOutcome,
    },
}

impl Intent for FormIntent {}
