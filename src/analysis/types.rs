use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Request body sent to the analysis service.
///
/// Built fresh for every submission and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    #[serde(rename = "ebay_link")]
    link: String,
}

impl AnalysisRequest {
    pub fn new(link: impl Into<String>) -> Self {
        Self { link: link.into() }
    }

    pub fn link(&self) -> &str {
        &self.link
    }
}

/// A single rating/comment entry returned by the service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feedback {
    #[serde(default, deserialize_with = "cell_text")]
    pub rating_type: String,
    #[serde(default, deserialize_with = "cell_text")]
    pub comment: String,
}

/// Aggregated sentiment count for one detected issue category.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IssueSentiment {
    #[serde(rename = "issues", default, deserialize_with = "cell_text")]
    pub issue: String,
    #[serde(rename = "final_sentiment", default, deserialize_with = "cell_text")]
    pub sentiment: String,
    #[serde(deserialize_with = "whole_number")]
    pub count: u64,
}

/// Positive/neutral/negative split reported alongside the totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingBreakdown {
    pub positive: u64,
    pub neutral: u64,
    pub negative: u64,
}

/// Successful analysis of one seller.
///
/// The optional sequences stay `None` when the service omits them, which is
/// distinct from an empty list.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub total_feedback: u64,
    pub positive_percent: f64,
    pub breakdown: Option<RatingBreakdown>,
    pub recent_feedbacks: Option<Vec<Feedback>>,
    pub issue_sentiment_summary: Option<Vec<IssueSentiment>>,
}

/// What the service said about a submission, decoded at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Success(AnalysisResult),
    Failure(String),
}

impl AnalysisOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Table cells come from a CSV, so a comment may arrive as a number or a
/// boolean. Null becomes empty; other scalars keep their JSON text.
fn cell_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    })
}

/// Counts are JSON numbers; `120.0` is as valid as `120`.
fn count_from_number(number: &Number) -> Option<u64> {
    if let Some(count) = number.as_u64() {
        return Some(count);
    }
    let value = number.as_f64()?;
    let whole = value.is_finite() && value >= 0.0 && value.fract() == 0.0;
    (whole && value < u64::MAX as f64).then_some(value as u64)
}

fn invalid_count<E: serde::de::Error>(number: &Number) -> E {
    E::custom(format!("expected a whole non-negative count, got {number}"))
}

fn whole_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    count_from_number(&number).ok_or_else(|| invalid_count(&number))
}

pub(super) fn optional_whole_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Number>::deserialize(deserializer)?
        .map(|number| count_from_number(&number).ok_or_else(|| invalid_count(&number)))
        .transpose()
}
