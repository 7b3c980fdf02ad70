use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::analysis::{decode_response, AnalysisOutcome, AnalysisRequest};
use crate::config::ServiceConfig;

use super::error::ServiceError;
use super::AnalysisService;

/// Path of the analysis endpoint, relative to the service base URL.
pub const ANALYZE_PATH: &str = "/analyze-seller";
/// Path of the liveness endpoint.
pub const HEALTH_PATH: &str = "/health";

/// Body of a `/health` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Analysis service reached over HTTP.
pub struct HttpAnalysisService {
    client: Client,
    base_url: String,
}

impl HttpAnalysisService {
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(ServiceError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Probe the service liveness endpoint.
    pub async fn health(&self) -> Result<HealthStatus, ServiceError> {
        let url = self.endpoint(HEALTH_PATH);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ServiceError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::UnexpectedStatus {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ServiceError::Transport {
                url: url.clone(),
                source,
            })?;
        let health: HealthStatus = serde_json::from_slice(&body)
            .map_err(|e| ServiceError::Decode(e.into()))?;
        tracing::debug!(target: "service", status = %health.status, "health probe answered");
        Ok(health)
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisOutcome, ServiceError> {
        let url = self.endpoint(ANALYZE_PATH);
        let started = Instant::now();
        tracing::info!(target: "service", link = request.link(), "submitting analysis request");

        // The status code is not inspected: error payloads arrive with
        // non-2xx codes and are decoded like any other body.
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|source| ServiceError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| ServiceError::Transport {
                url: url.clone(),
                source,
            })?;

        tracing::debug!(
            target: "service",
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "analysis response received"
        );

        Ok(decode_response(&body)?)
    }
}
