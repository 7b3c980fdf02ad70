//! Client side of the remote analysis service.

mod error;
mod http;

use async_trait::async_trait;

use crate::analysis::{AnalysisOutcome, AnalysisRequest};

pub use error::ServiceError;
pub use http::{HealthStatus, HttpAnalysisService, ANALYZE_PATH, HEALTH_PATH};

/// Remote system that analyzes a seller from a listing link.
///
/// Implementations perform exactly one request per call and never retry.
/// A service-reported error is a successful call returning
/// [`AnalysisOutcome::Failure`]; `Err` is reserved for transport and decode
/// problems.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisOutcome, ServiceError>;
}
