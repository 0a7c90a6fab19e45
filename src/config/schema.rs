use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/abswitch/config.toml` or `~/.config/abswitch/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ABSWITCH__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub controls: ControlsSettings,
    pub platform: PlatformSettings,
    pub log: LogSettings,
    /// One entry per A/B widget on the page.
    pub widgets: Vec<WidgetSettings>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// How often the progress bars refresh while playing (milliseconds).
    pub refresh_ms: u64,
    /// Whether to show `elapsed / total` under each progress bar.
    pub show_time: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ before / after ~ ".to_string(),
            refresh_ms: 33,
            show_time: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Percentage of the track to seek when pressing `h` / `l`.
    pub seek_step_percent: u8,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            seek_step_percent: 5,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlatformSettings {
    /// Force touch-primary behavior on or off. Detected when unset.
    pub touch_primary: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: LogLevelSetting,
    /// Log file; defaults to `$XDG_STATE_HOME/abswitch/abswitch.log`.
    pub file: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LogLevelSetting::Info,
            file: None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevelSetting {
    Error,
    #[serde(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

/// Raw widget entry as written in the config file. Validated into a
/// `WidgetConfig` when the page is built.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    pub name: Option<String>,
    /// Locator of the "Before" track (path or `file://` URI).
    #[serde(alias = "audio_a")]
    pub audio_source_a: Option<String>,
    /// Locator of the "After" track (path or `file://` URI).
    #[serde(alias = "audio_b")]
    pub audio_source_b: Option<String>,
    pub a_label: Option<String>,
    pub b_label: Option<String>,
    /// Whether the progress bar accepts clicks to seek.
    pub progress_track: bool,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            name: None,
            audio_source_a: None,
            audio_source_b: None,
            a_label: None,
            b_label: None,
            progress_track: true,
        }
    }
}

impl WidgetSettings {
    /// A widget entry for a pair of sources given on the command line.
    pub fn from_pair(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            audio_source_a: Some(a.into()),
            audio_source_b: Some(b.into()),
            ..Self::default()
        }
    }
}
