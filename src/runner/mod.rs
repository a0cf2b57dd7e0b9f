//! Run submission and result rendering
//!
//! - [`types`]: request/response bodies of the execution API
//! - [`errors`]: [`SubmissionFailure`], the single failure kind of a run
//! - [`client`]: the [`ExecutionApi`] seam and its HTTP implementation
//! - [`controller`]: [`RunController`], which drives one request/response
//!   cycle and owns the [`RunView`] the output and status panes bind to

pub mod client;
pub mod controller;
pub mod errors;
pub mod types;

pub use client::{ExecutionApi, JudgeClient};
pub use controller::{RunController, RunStatus, RunView};
pub use errors::SubmissionFailure;
pub use types::{RunRequest, RunResult, StatusInfo};
