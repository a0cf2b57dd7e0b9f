//! Execution API client

use super::errors::SubmissionFailure;
use super::types::{RunRequest, RunResult};
use async_trait::async_trait;
use std::time::Duration;

/// Remote code runner
#[async_trait]
pub trait ExecutionApi: Send + Sync {
    /// Submit one job and wait for its result
    async fn execute(&self, request: &RunRequest) -> Result<RunResult, SubmissionFailure>;
}

/// [`ExecutionApi`] over HTTP: one JSON `POST` per run
#[derive(Debug, Clone)]
pub struct JudgeClient {
    http: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl JudgeClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        JudgeClient {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            timeout,
        }
    }
}

#[async_trait]
impl ExecutionApi for JudgeClient {
    async fn execute(&self, request: &RunRequest) -> Result<RunResult, SubmissionFailure> {
        tracing::debug!(
            endpoint = %self.endpoint,
            language_id = request.language_id,
            source_len = request.source_code.len(),
            "submitting run"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionFailure::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let result: RunResult = serde_json::from_slice(&body)?;
        Ok(result)
    }
}
