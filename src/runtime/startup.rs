use std::env;

use tracing::warn;

use crate::config::{PlatformSettings, Settings, WidgetSettings};
use crate::widget::Platform;

/// Set by Termux, the Android terminal where taps are the primary input.
const TOUCH_ENV: &str = "TERMUX_VERSION";

/// Platform facts for the terminal the page runs in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TerminalPlatform {
    touch_primary: bool,
}

impl TerminalPlatform {
    pub fn detect(settings: &PlatformSettings) -> Self {
        Self::resolve(settings.touch_primary, env::var_os(TOUCH_ENV).is_some())
    }

    /// A configured override wins over detection.
    pub(super) fn resolve(configured: Option<bool>, detected: bool) -> Self {
        Self {
            touch_primary: configured.unwrap_or(detected),
        }
    }
}

impl Platform for TerminalPlatform {
    fn is_touch_primary(&self) -> bool {
        self.touch_primary
    }
}

/// Widget entries from the config file followed by `BEFORE AFTER` pairs
/// given on the command line.
pub fn widget_entries(settings: &Settings, args: &[String]) -> Vec<WidgetSettings> {
    let mut entries = settings.widgets.clone();

    let pairs = args.chunks_exact(2);
    if let [odd] = pairs.remainder() {
        warn!(source = %odd, "ignoring trailing source without a partner");
    }
    entries.extend(pairs.map(|pair| WidgetSettings::from_pair(pair[0].as_str(), pair[1].as_str())));
    entries
}
