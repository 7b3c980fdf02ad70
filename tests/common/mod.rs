//! Shared test utilities and fake services.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use sellerscope::analysis::{AnalysisOutcome, AnalysisRequest, AnalysisResult};
use sellerscope::service::{AnalysisService, ServiceError};
use std::collections::VecDeque;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Base URL nothing is listening on.
pub fn unreachable_base_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}

/// Create a temporary config file pointing at `base_url`.
///
/// Logs go to a file inside the temp dir so tests never touch the user's
/// data directory.
pub fn temp_config(base_url: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    let log_path = temp_dir.path().join("sellerscope.log");

    let content = format!(
        r#"[service]
base_url = "{}"
timeout_seconds = 5
connect_timeout_seconds = 2

[logging]
level = "debug"
file = "{}"
"#,
        base_url,
        log_path.display().to_string().replace('\\', "/")
    );

    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// A minimal successful analysis.
pub fn sample_result() -> AnalysisResult {
    AnalysisResult {
        total_feedback: 120,
        positive_percent: 98.5,
        breakdown: None,
        recent_feedbacks: None,
        issue_sentiment_summary: None,
    }
}

/// Scripted reply for [`ScriptedService`].
pub enum Reply {
    Outcome(AnalysisOutcome),
    /// Fails as if the body could not be decoded.
    Garbage,
}

/// In-process [`AnalysisService`] that answers from a queue.
///
/// Records every request it receives. With no reply queued it answers with
/// [`sample_result`].
#[derive(Clone, Default)]
pub struct ScriptedService {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    requests: Arc<Mutex<Vec<AnalysisRequest>>>,
    delay: Option<Duration>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn enqueue(&self, reply: Reply) {
        self.replies.lock().push_back(reply);
    }

    pub fn requests(&self) -> Vec<AnalysisRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl AnalysisService for ScriptedService {
    async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisOutcome, ServiceError> {
        self.requests.lock().push(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let reply = self.replies.lock().pop_front();
        match reply {
            Some(Reply::Outcome(outcome)) => Ok(outcome),
            Some(Reply::Garbage) => {
                let err = sellerscope::analysis::decode_response(b"<html>").unwrap_err();
                Err(ServiceError::Decode(err))
            }
            None => Ok(AnalysisOutcome::Success(sample_result())),
        }
    }
}
