pub mod config;
pub mod init;
pub mod log;
pub mod reminder;
pub mod show;
pub mod watch;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::log::ActivityLog;
use crate::core::session::Features;
use crate::core::tabs::TabController;
use crate::errors::{AppError, AppResult};
use crate::models::tab::Tab;
use crate::view::terminal::TerminalOptions;
use std::path::PathBuf;

/// `--data` wins over the configured data file.
pub fn data_path(cli: &Cli, cfg: &Config) -> PathBuf {
    match &cli.data {
        Some(p) => PathBuf::from(p),
        None => cfg.data_path(),
    }
}

/// Test mode keeps the journal in memory only.
pub fn activity_log(cli: &Cli, cfg: &Config) -> ActivityLog {
    if cli.test {
        ActivityLog::in_memory()
    } else {
        ActivityLog::to_file(cfg.log_path())
    }
}

pub fn terminal_options(cli: &Cli, cfg: &Config) -> TerminalOptions {
    TerminalOptions {
        width: cfg.wrap_width,
        color: cfg.colors && !cli.no_color,
        notice_text: cfg.reminder_text.clone(),
        ..TerminalOptions::default()
    }
}

/// Tab requested on the command line, or the configured initial tab.
pub fn initial_tab(requested: &Option<String>, features: &Features, cfg: &Config) -> AppResult<Tab> {
    match requested {
        Some(sel) => TabController::new(features.tabs(), cfg.initial())
            .resolve(sel)
            .ok_or_else(|| AppError::InvalidTab(sel.clone())),
        None => Ok(cfg.initial()),
    }
}
