//! Domain types exchanged with the analysis service.

mod decode;
mod types;

pub use decode::{decode_response, DecodeError};
pub use types::{
    AnalysisOutcome, AnalysisRequest, AnalysisResult, Feedback, IssueSentiment, RatingBreakdown,
};
