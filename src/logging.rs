//! File logging
//!
//! The terminal belongs to the TUI, so logs only go to a file, and only when
//! `--log-file` is given. The level comes from `RUNBOX_LOG`, then `RUST_LOG`,
//! and defaults to `info` for this crate and `warn` for everything else.

use std::env;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

const DEFAULT_FILTER: &str = "warn,runbox=info";

/// Keeps the background writer alive; dropping it flushes the log file.
pub struct LogGuard {
    _file_guard: WorkerGuard,
}

pub fn create_filter() -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    let directives = env::var("RUNBOX_LOG")
        .or_else(|_| env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    EnvFilter::try_new(directives)
}

/// Start logging to `path`. Returns `Ok(None)` when `path` is `None`.
pub fn init(path: Option<&Path>) -> anyhow::Result<Option<LogGuard>> {
    let Some(path) = path else {
        return Ok(None);
    };

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("log file path '{}' has no file name", path.display()))?;
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, file_guard) = tracing_appender::non_blocking(appender);

    Registry::default()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(create_filter()?),
        )
        .try_init()?;

    Ok(Some(LogGuard {
        _file_guard: file_guard,
    }))
}
