//! Submission failure type
//!
//! Every way a run can fail to produce a result (the request never reaching
//! the server, a non-success status, a body that is not the expected JSON)
//! ends up in [`SubmissionFailure`]. The variants exist for logging; the UI
//! only ever shows the message.
//!
//! A compile error is *not* a failure: it arrives in
//! [`RunResult::compile_output`](super::RunResult::compile_output).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionFailure {
    /// The request could not be sent or the connection dropped
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("server responded with status {status}")]
    HttpStatus { status: u16 },

    /// The body was not a valid result document
    #[error("{0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for SubmissionFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SubmissionFailure::MalformedResponse(err.to_string())
        } else if let Some(status) = err.status() {
            SubmissionFailure::HttpStatus {
                status: status.as_u16(),
            }
        } else {
            SubmissionFailure::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SubmissionFailure {
    fn from(err: serde_json::Error) -> Self {
        SubmissionFailure::MalformedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_message() {
        let err = SubmissionFailure::Transport("Network down".to_string());
        assert_eq!(err.to_string(), "Network down");
    }

    #[test]
    fn test_status_message() {
        let err = SubmissionFailure::HttpStatus { status: 502 };
        assert_eq!(err.to_string(), "server responded with status 502");
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let failure: SubmissionFailure = err.into();
        assert!(matches!(failure, SubmissionFailure::MalformedResponse(_)));
    }
}
