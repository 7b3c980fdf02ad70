//! Pure projection of [`FormState`] into what the screen shows.
//!
//! The TUI turns a [`FormView`] into widgets, the one-shot mode prints
//! [`FormView::report_lines`]. Neither looks at `FormState` directly.

use crate::analysis::{AnalysisResult, Feedback, IssueSentiment};

use super::state::{FormState, Phase};

pub const TITLE: &str = "eBay Seller Analysis";
pub const PLACEHOLDER: &str = "Paste eBay product link here";
pub const SUBMIT_LABEL: &str = "Analyze Seller";
pub const LOADING_LABEL: &str = "Analyzing...";
pub const RESULT_HEADING: &str = "Seller Info";
pub const FEEDBACK_HEADING: &str = "Recent Feedbacks";
pub const ISSUE_HEADING: &str = "Issue Sentiment Summary";
pub const ISSUE_COLUMNS: [&str; 3] = ["Issue", "Sentiment", "Count"];

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub phase: Phase,
    pub title: &'static str,
    pub input: String,
    pub placeholder: &'static str,
    pub input_enabled: bool,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub error: Option<String>,
    pub result: Option<ResultView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub summary: Vec<String>,
    pub recent_feedbacks: Option<Vec<String>>,
    pub issue_rows: Option<Vec<IssueRow>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRow {
    pub issue: String,
    pub sentiment: String,
    pub count: String,
}

impl FormView {
    pub fn project(state: &FormState) -> Self {
        let loading = state.is_loading();
        Self {
            phase: state.phase(),
            title: TITLE,
            input: state.link().to_string(),
            placeholder: PLACEHOLDER,
            input_enabled: !loading,
            submit_label: if loading { LOADING_LABEL } else { SUBMIT_LABEL },
            submit_enabled: state.can_submit(),
            error: state.error_message().map(str::to_string),
            result: state.result().map(ResultView::project),
        }
    }

    /// Plain-text rendering of the outcome area: the error message alone, or
    /// the result sections, or nothing.
    pub fn report_lines(&self) -> Vec<String> {
        if let Some(error) = &self.error {
            return vec![error.clone()];
        }
        self.result
            .as_ref()
            .map(ResultView::to_lines)
            .unwrap_or_default()
    }
}

impl ResultView {
    pub fn project(result: &AnalysisResult) -> Self {
        let mut summary = vec![
            format!("Total Feedback: {}", result.total_feedback),
            format!("Positive Feedback %: {}", result.positive_percent),
        ];
        if let Some(breakdown) = result.breakdown {
            summary.push(format!(
                "Positive / Neutral / Negative: {} / {} / {}",
                breakdown.positive, breakdown.neutral, breakdown.negative
            ));
        }

        Self {
            summary,
            recent_feedbacks: result
                .recent_feedbacks
                .as_deref()
                .map(|items| items.iter().map(feedback_line).collect()),
            issue_rows: result
                .issue_sentiment_summary
                .as_deref()
                .filter(|rows| !rows.is_empty())
                .map(|rows| rows.iter().map(IssueRow::from).collect()),
        }
    }

    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = vec![RESULT_HEADING.to_string()];
        lines.extend(self.summary.iter().cloned());

        if let Some(items) = &self.recent_feedbacks {
            lines.push(String::new());
            lines.push(FEEDBACK_HEADING.to_string());
            lines.extend(items.iter().map(|item| format!("  - {item}")));
        }

        if let Some(rows) = &self.issue_rows {
            lines.push(String::new());
            lines.push(ISSUE_HEADING.to_string());
            lines.extend(issue_table_lines(rows));
        }

        lines
    }
}

impl From<&IssueSentiment> for IssueRow {
    fn from(row: &IssueSentiment) -> Self {
        Self {
            issue: row.issue.clone(),
            sentiment: row.sentiment.clone(),
            count: row.count.to_string(),
        }
    }
}

fn feedback_line(feedback: &Feedback) -> String {
    format!("{}: {}", feedback.rating_type, feedback.comment)
}

/// Column widths (in chars) fitting the header and every row.
fn issue_column_widths(rows: &[IssueRow]) -> [usize; 3] {
    let mut widths = ISSUE_COLUMNS.map(|title| title.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip([&row.issue, &row.sentiment, &row.count]) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

fn issue_table_lines(rows: &[IssueRow]) -> Vec<String> {
    let [issue_w, sentiment_w, count_w] = issue_column_widths(rows);
    let format_row = |issue: &str, sentiment: &str, count: &str| {
        format!("  {issue:<issue_w$} | {sentiment:<sentiment_w$} | {count:>count_w$}")
    };

    let mut lines = vec![format_row(ISSUE_COLUMNS[0], ISSUE_COLUMNS[1], ISSUE_COLUMNS[2])];
    lines.push(format!(
        "  {}-+-{}-+-{}",
        "-".repeat(issue_w),
        "-".repeat(sentiment_w),
        "-".repeat(count_w)
    ));
    lines.extend(
        rows.iter()
            .map(|row| format_row(&row.issue, &row.sentiment, &row.count)),
    );
    lines
}
