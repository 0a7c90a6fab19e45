use crate::error::{AbError, AbResult};

use super::schema::WidgetSettings;

pub const DEFAULT_A_LABEL: &str = "Before";
pub const DEFAULT_B_LABEL: &str = "After";

/// A validated widget entry: both sources present, every UI hook usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub name: String,
    pub source_a: String,
    pub source_b: String,
    pub a_label: String,
    pub b_label: String,
    pub progress_track: bool,
}

impl WidgetConfig {
    /// Validate the `index`-th widget entry.
    ///
    /// Errors are scoped to this one widget; callers keep building the rest
    /// of the page.
    pub fn from_settings(index: usize, settings: &WidgetSettings) -> AbResult<Self> {
        let name = settings
            .name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("widget {}", index + 1));

        let source_a = required(&name, "audio_source_a", settings.audio_source_a.as_deref())?;
        let source_b = required(&name, "audio_source_b", settings.audio_source_b.as_deref())?;
        let a_label = hook(&name, "a_label", settings.a_label.as_deref(), DEFAULT_A_LABEL)?;
        let b_label = hook(&name, "b_label", settings.b_label.as_deref(), DEFAULT_B_LABEL)?;

        Ok(Self {
            name,
            source_a,
            source_b,
            a_label,
            b_label,
            progress_track: settings.progress_track,
        })
    }
}

fn required(widget: &str, option: &'static str, value: Option<&str>) -> AbResult<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AbError::MissingOption {
            widget: widget.to_string(),
            option,
        })
}

fn hook(widget: &str, hook: &'static str, value: Option<&str>, default: &str) -> AbResult<String> {
    match value.map(str::trim) {
        None => Ok(default.to_string()),
        Some("") => Err(AbError::EmptyHook {
            widget: widget.to_string(),
            hook,
        }),
        Some(v) => Ok(v.to_string()),
    }
}
