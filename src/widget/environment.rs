//! What a widget controller needs from the page it lives on.

use std::fmt;

/// Identifies a widget on the page.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub usize);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Platform capability checks.
pub trait Platform {
    /// Touch-first devices get the transport button before buffering completes.
    fn is_touch_primary(&self) -> bool;
}

/// Page-wide registry enforcing "only one audible widget".
pub trait AudibleRegistry {
    /// Pause every widget except `id` and reset its transport to "play".
    fn pause_all_except(&mut self, id: WidgetId);
}
