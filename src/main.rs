// runbox: terminal front-end for remote code runners

use std::io;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use runbox::catalog::LanguageCatalog;
use runbox::config::Cli;
use runbox::runner::JudgeClient;
use runbox::ui::{App, AppOptions};

fn main() -> anyhow::Result<()> {
    let catalog = LanguageCatalog::builtin();
    let config = Cli::parse().into_config(&catalog)?;

    let _log_guard = runbox::logging::init(config.log_file.as_deref())?;
    tracing::info!(
        api_url = %config.api_url,
        language = config.language,
        "starting runbox"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let api = Arc::new(JudgeClient::new(config.api_url.clone(), config.timeout));
    let mut app = App::new(
        catalog,
        AppOptions {
            language: config.language,
            theme: config.theme,
            pane_bounds: config.pane_bounds,
            output_bounds: config.output_bounds,
        },
        api,
        runtime.handle().clone(),
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // In-flight runs are abandoned on quit
    runtime.shutdown_background();

    if let Err(err) = res {
        tracing::error!(error = %err, "event loop failed");
        return Err(err.into());
    }

    tracing::info!("exiting");
    Ok(())
}
