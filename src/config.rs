//! Command-line configuration

use crate::catalog::{LanguageCatalog, LanguageId, DEFAULT_LANGUAGE};
use crate::layout::SplitBounds;
use crate::ui::theme::ThemeMode;
use clap::{Parser, ValueEnum};
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API URL '{0}' is not a valid http(s) URL")]
    InvalidApiUrl(String),
    #[error("unknown language id {0}")]
    UnknownLanguage(LanguageId),
    #[error("timeout must be at least one second")]
    ZeroTimeout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => ThemeMode::Dark,
            ThemeArg::Light => ThemeMode::Light,
        }
    }
}

/// Terminal front-end for a remote code runner
#[derive(Debug, Parser)]
#[command(name = "runbox", version, about)]
pub struct Cli {
    /// Execution endpoint that accepts {source_code, language_id, stdin}
    #[arg(long, env = "RUNNER_API_URL")]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Language selected at start-up
    #[arg(long, default_value_t = DEFAULT_LANGUAGE)]
    pub language: LanguageId,

    #[arg(long, value_enum, default_value_t = ThemeArg::Dark)]
    pub theme: ThemeArg,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Minimum editor pane width, in columns
    #[arg(long, default_value_t = 22)]
    pub min_left: u16,

    /// Minimum output/stdin column width, in columns
    #[arg(long, default_value_t = 32)]
    pub min_right: u16,

    /// Minimum output section height, in rows
    #[arg(long, default_value_t = 4)]
    pub min_output: u16,

    /// Minimum stdin section height, in rows
    #[arg(long, default_value_t = 4)]
    pub min_input: u16,
}

/// Validated start-up configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub timeout: Duration,
    pub language: LanguageId,
    pub theme: ThemeMode,
    pub log_file: Option<PathBuf>,
    pub pane_bounds: SplitBounds,
    pub output_bounds: SplitBounds,
}

impl Cli {
    pub fn into_config(self, catalog: &LanguageCatalog) -> Result<Config, ConfigError> {
        let api_url = self.api_url.trim().to_string();
        match Url::parse(&api_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(ConfigError::InvalidApiUrl(api_url)),
        }
        if catalog.get(self.language).is_none() {
            return Err(ConfigError::UnknownLanguage(self.language));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Config {
            api_url,
            timeout: Duration::from_secs(self.timeout_secs),
            language: self.language,
            theme: self.theme.into(),
            log_file: self.log_file,
            pane_bounds: SplitBounds::new(self.min_left, self.min_right),
            output_bounds: SplitBounds::new(self.min_output, self.min_input),
        })
    }
}
