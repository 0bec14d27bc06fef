//! File log sink
//!
//! The terminal belongs to the UI, so log output goes to
//! `<data_local_dir>/user-form/user-form.log`. Records emitted through the
//! `log` facade (the core crate) are forwarded into the same subscriber.

use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directives, e.g. `debug` or `user_form_core=trace`
pub const LOG_FILTER_ENV: &str = "USER_FORM_LOG";

const DEFAULT_FILTER: &str = "info";

fn log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("user-form")
        .join("user-form.log")
}

fn open_log_file(path: &PathBuf) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Install the global subscriber; returns the log file path
pub fn init_logging() -> Result<PathBuf> {
    let path = log_path();
    let file = open_log_file(&path)?;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(path)
}
