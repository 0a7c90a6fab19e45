//! File-backed `tracing` subscriber.
//!
//! The terminal belongs to the UI, so log lines go to a file instead of
//! stderr.

use std::env;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;

use crate::config::{LogLevelSetting, LogSettings};

pub(super) fn level_filter(level: LogLevelSetting) -> LevelFilter {
    match level {
        LogLevelSetting::Error => LevelFilter::ERROR,
        LogLevelSetting::Warn => LevelFilter::WARN,
        LogLevelSetting::Info => LevelFilter::INFO,
        LogLevelSetting::Debug => LevelFilter::DEBUG,
        LogLevelSetting::Trace => LevelFilter::TRACE,
    }
}

/// `$XDG_STATE_HOME/abswitch/abswitch.log` or `~/.local/state/abswitch/abswitch.log`.
pub(super) fn default_log_path() -> Option<PathBuf> {
    let state_home = if let Some(xdg) = env::var_os("XDG_STATE_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("state"))
    };

    state_home.map(|d| d.join("abswitch").join("abswitch.log"))
}

/// Install the global subscriber. Returns the log path, or `None` when
/// logging stays disabled because the file could not be opened.
pub fn init(settings: &LogSettings) -> Option<PathBuf> {
    let path = settings.file.clone().or_else(default_log_path)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_max_level(level_filter(settings.level))
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(path)
}
