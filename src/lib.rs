//! # Introduction
//!
//! runbox is a terminal front-end for a remote code runner such as Judge0.
//! Pick a language, edit the source, type stdin, submit, and read back
//! stdout/stderr/compile output together with status, time and memory.
//!
//! ## Data flow
//!
//! ```text
//! selector  → catalog lookup → editor update
//! run key   → RunController  → ExecutionApi (HTTP) → RunView → panes
//! mouse drag→ LayoutResizer  → LayoutState → editor reflow
//! ```
//!
//! 1. [`catalog`] — the static language table (id, name, sample, editor mode).
//! 2. [`editor`] — the [`editor::EditorAdapter`] seam over the text widget.
//! 3. [`runner`] — request/response types, the HTTP client and the run
//!    controller that renders results and failures.
//! 4. [`layout`] — the drag-to-resize state machine for the two split handles.
//! 5. [`config`] — command-line options, validated into a [`config::Config`].
//! 6. [`ui`] — ratatui-based TUI tying the pieces together.

pub mod catalog;
pub mod config;
pub mod editor;
pub mod layout;
pub mod logging;
pub mod runner;
pub mod ui;
