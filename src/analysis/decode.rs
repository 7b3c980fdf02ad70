//! Decoding of `/analyze-seller` response bodies.
//!
//! This is the only place that looks at the raw response shape. Everything
//! past this point works with [`AnalysisOutcome`].

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::types::{
    optional_whole_number, AnalysisOutcome, AnalysisResult, Feedback, IssueSentiment,
    RatingBreakdown,
};

/// Errors produced when a response body cannot be turned into an outcome.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("response body is not valid JSON for an analysis: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("response field '{field}' is invalid: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    details: Option<Value>,
    #[serde(default, deserialize_with = "optional_whole_number")]
    total_feedback: Option<u64>,
    #[serde(default)]
    positive_percent: Option<f64>,
    #[serde(default, deserialize_with = "optional_whole_number")]
    positive_count: Option<u64>,
    #[serde(default, deserialize_with = "optional_whole_number")]
    neutral_count: Option<u64>,
    #[serde(default, deserialize_with = "optional_whole_number")]
    negative_count: Option<u64>,
    #[serde(default)]
    recent_feedbacks: Option<Vec<Feedback>>,
    #[serde(default)]
    issue_sentiment_summary: Option<Vec<IssueSentiment>>,
}

/// Decode a response body into a tagged outcome.
///
/// A non-empty string `error` field wins over any result fields. An empty or
/// null `error` is treated as absent. Unknown fields are ignored.
pub fn decode_response(body: &[u8]) -> Result<AnalysisOutcome, DecodeError> {
    let wire: WireResponse = serde_json::from_slice(body)?;

    match wire.error {
        Some(Value::String(message)) if !message.is_empty() => {
            if let Some(details) = &wire.details {
                tracing::debug!(target: "analysis", %details, "service reported failure details");
            }
            return Ok(AnalysisOutcome::Failure(message));
        }
        Some(Value::String(_)) | Some(Value::Null) | None => {}
        Some(other) => {
            return Err(DecodeError::InvalidField {
                field: "error",
                reason: format!("expected a string, got {}", json_kind(&other)),
            });
        }
    }

    let total_feedback = wire
        .total_feedback
        .ok_or(DecodeError::MissingField("total_feedback"))?;
    let positive_percent = wire
        .positive_percent
        .ok_or(DecodeError::MissingField("positive_percent"))?;
    if !positive_percent.is_finite() {
        return Err(DecodeError::InvalidField {
            field: "positive_percent",
            reason: "not a finite number".to_string(),
        });
    }

    let breakdown = match (wire.positive_count, wire.neutral_count, wire.negative_count) {
        (Some(positive), Some(neutral), Some(negative)) => Some(RatingBreakdown {
            positive,
            neutral,
            negative,
        }),
        _ => None,
    };

    Ok(AnalysisOutcome::Success(AnalysisResult {
        total_feedback,
        positive_percent,
        breakdown,
        recent_feedbacks: wire.recent_feedbacks,
        issue_sentiment_summary: wire.issue_sentiment_summary,
    }))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
