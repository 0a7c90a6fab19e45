//! Error types shared by the widget core and its collaborators.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for fallible abswitch operations.
pub type AbResult<T> = Result<T, AbError>;

#[derive(Debug, Error)]
pub enum AbError {
    /// A widget entry lacks one of its required options.
    #[error("widget `{widget}`: missing required option `{option}`")]
    MissingOption {
        widget: String,
        option: &'static str,
    },

    /// A UI hook (button caption) was configured but left empty.
    #[error("widget `{widget}`: `{hook}` must not be empty")]
    EmptyHook { widget: String, hook: &'static str },

    /// Only local files (bare paths or `file://` URIs) can be played.
    #[error("unsupported source locator `{locator}`")]
    UnsupportedSource { locator: String },

    #[error("audio output unavailable: {0}")]
    Output(String),

    #[error("failed to load {path}: {reason}")]
    Load { path: PathBuf, reason: String },

    #[error("settings error: {0}")]
    Settings(#[from] ::config::ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
