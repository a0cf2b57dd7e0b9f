// Test doubles shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use runbox::runner::{ExecutionApi, RunRequest, RunResult, SubmissionFailure};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Answers every request with the same outcome and records what it was sent
pub struct StaticApi {
    outcome: Result<RunResult, SubmissionFailure>,
    calls: AtomicUsize,
    last_request: Mutex<Option<RunRequest>>,
}

impl StaticApi {
    pub fn ok(result: RunResult) -> Self {
        Self::with_outcome(Ok(result))
    }

    pub fn err(failure: SubmissionFailure) -> Self {
        Self::with_outcome(Err(failure))
    }

    pub fn json(body: serde_json::Value) -> Self {
        Self::ok(serde_json::from_value(body).expect("valid result body"))
    }

    fn with_outcome(outcome: Result<RunResult, SubmissionFailure>) -> Self {
        StaticApi {
            outcome,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<RunRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExecutionApi for StaticApi {
    async fn execute(&self, request: &RunRequest) -> Result<RunResult, SubmissionFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.outcome.clone()
    }
}

/// Never answers
#[derive(Default)]
pub struct PendingApi {
    calls: AtomicUsize,
}

impl PendingApi {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExecutionApi for PendingApi {
    async fn execute(&self, _request: &RunRequest) -> Result<RunResult, SubmissionFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::future::pending().await
    }
}
