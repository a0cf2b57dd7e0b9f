//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, event loop, focus, run dispatch, mouse drags
//! - **[`layout`]** — screen areas for a frame, derived from the resizer's state
//! - **[`panes`]** — render functions for each visible pane (editor, output, stdin,
//!   header, status bar)
//! - **[`theme`]** — light and dark palettes and the theme toggle
//!
//! The entry point for consumers is [`App`]: construct it with a catalog and an
//! [`ExecutionApi`] and call [`App::run`] to start the event loop.
//!
//! [`ExecutionApi`]: crate::runner::ExecutionApi
//! [`App::run`]: app::App::run

pub mod app;
pub mod layout;
pub mod panes;
pub mod theme;

pub use app::{App, AppOptions, FocusedPane};
