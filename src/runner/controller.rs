//! Run controller
//!
//! A run has two halves. [`RunController::begin`] runs on the UI thread
//! before anything is sent, so "Running..." is on screen regardless of
//! network latency. [`RunController::complete`] applies whatever came back.
//! The TUI calls them around a spawned task; [`RunController::submit_run`]
//! strings them together for callers that can simply await.
//!
//! There is no single-flight guard and no sequencing token: when runs
//! overlap, the last outcome to be completed overwrites the view.

use super::client::ExecutionApi;
use super::errors::SubmissionFailure;
use super::types::{RunRequest, RunResult};
use crate::editor::EditorAdapter;

pub const RUNNING_PLACEHOLDER: &str = "Running...";
pub const NO_OUTPUT: &str = "(no output)";
pub const MISSING_VALUE: &str = "-";

/// Status indicator of the most recent run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Idle,
    Running,
    /// Completed with the server's status description, or "done"
    Finished(String),
    Failed,
}

impl RunStatus {
    pub fn label(&self) -> &str {
        match self {
            RunStatus::Idle => "idle",
            RunStatus::Running => "running...",
            RunStatus::Finished(description) => description,
            RunStatus::Failed => "error",
        }
    }
}

/// What the output and status panes display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunView {
    pub status: RunStatus,
    pub output: String,
    pub time: String,
    pub memory: String,
}

impl Default for RunView {
    fn default() -> Self {
        RunView {
            status: RunStatus::Idle,
            output: String::new(),
            time: MISSING_VALUE.to_string(),
            memory: MISSING_VALUE.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct RunController {
    view: RunView,
}

impl RunController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &RunView {
        &self.view
    }

    pub fn status_text(&self) -> &str {
        self.view.status.label()
    }

    pub fn is_running(&self) -> bool {
        self.view.status == RunStatus::Running
    }

    /// Show the running indicator. Must be called before the request is sent.
    pub fn begin(&mut self, request: &RunRequest) {
        tracing::info!(language_id = request.language_id, "run started");
        self.view.status = RunStatus::Running;
        self.view.output = RUNNING_PLACEHOLDER.to_string();
    }

    /// Render the outcome of a run and reflow the editor once
    pub fn complete(
        &mut self,
        outcome: &Result<RunResult, SubmissionFailure>,
        editor: &mut dyn EditorAdapter,
    ) {
        match outcome {
            Ok(result) => {
                self.view.output = result.display_output().unwrap_or(NO_OUTPUT).to_string();
                self.view.status =
                    RunStatus::Finished(result.status_description().unwrap_or("done").to_string());
                self.view.time = format_measure(result.time.as_deref());
                self.view.memory = format_measure(result.memory.as_deref());
                tracing::info!(status = self.view.status.label(), "run finished");
            }
            Err(failure) => {
                tracing::warn!(error = ?failure, "run failed");
                self.view.output = format!("Error: {}", failure);
                self.view.status = RunStatus::Failed;
            }
        }
        editor.layout();
    }

    /// Submit `request` through `api` and render the outcome
    pub async fn submit_run<A>(
        &mut self,
        api: &A,
        request: RunRequest,
        editor: &mut dyn EditorAdapter,
    ) -> Result<RunResult, SubmissionFailure>
    where
        A: ExecutionApi + ?Sized,
    {
        self.begin(&request);
        let outcome = api.execute(&request).await;
        self.complete(&outcome, editor);
        outcome
    }
}

fn format_measure(value: Option<&str>) -> String {
    value.unwrap_or(MISSING_VALUE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EditorMode;
    use crate::editor::{EditorConfig, TextEditor};

    fn editor() -> TextEditor {
        TextEditor::new(EditorConfig {
            initial_value: String::new(),
            mode: EditorMode::Python,
            theme: "vs-dark".to_string(),
            auto_layout: true,
        })
    }

    #[test]
    fn test_begin_sets_placeholder() {
        let mut controller = RunController::new();
        controller.begin(&RunRequest::new("", 71, ""));
        assert_eq!(controller.view().output, "Running...");
        assert_eq!(controller.status_text(), "running...");
        assert!(controller.is_running());
    }

    #[test]
    fn test_complete_empty_result() {
        let mut controller = RunController::new();
        let mut editor = editor();
        controller.complete(&Ok(RunResult::default()), &mut editor);
        assert_eq!(controller.view().output, "(no output)");
        assert_eq!(controller.status_text(), "done");
        assert_eq!(controller.view().time, "-");
        assert_eq!(controller.view().memory, "-");
        assert_eq!(editor.reflow_count(), 1);
    }

    #[test]
    fn test_complete_failure() {
        let mut controller = RunController::new();
        let mut editor = editor();
        controller.complete(
            &Err(SubmissionFailure::HttpStatus { status: 500 }),
            &mut editor,
        );
        assert_eq!(
            controller.view().output,
            "Error: server responded with status 500"
        );
        assert_eq!(controller.view().status, RunStatus::Failed);
        assert_eq!(editor.reflow_count(), 1);
    }

    #[test]
    fn test_measures_shown_as_sent() {
        let mut controller = RunController::new();
        let mut editor = editor();
        let result: RunResult = serde_json::from_value(serde_json::json!({
            "stdout": "x", "time": "0.010", "memory": "N/A"
        }))
        .unwrap();
        controller.complete(&Ok(result), &mut editor);
        assert_eq!(controller.view().time, "0.010");
        assert_eq!(controller.view().memory, "N/A");
        assert_eq!(format_measure(None), "-");
    }
}
