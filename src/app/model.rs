//! Page model: every A/B widget on screen plus keyboard focus.
//!
//! The page owns the widgets, routes user events and media signals to
//! them, and implements the "only one audible widget" broadcast over a
//! widget's siblings.

use tracing::{debug, warn};

use crate::audio::{Media, MediaFactory, MediaSignal};
use crate::config::{WidgetConfig, WidgetSettings};
use crate::playback::WidgetEvent;
use crate::widget::{AudibleRegistry, Platform, Widget, WidgetId};

/// A configured widget that could not be initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedWidget {
    pub index: usize,
    pub reason: String,
}

/// The widgets around the one handling an event.
struct Siblings<'a, M> {
    before: &'a mut [Widget<M>],
    after: &'a mut [Widget<M>],
}

impl<M: Media> AudibleRegistry for Siblings<'_, M> {
    fn pause_all_except(&mut self, id: WidgetId) {
        for w in self.before.iter_mut().chain(self.after.iter_mut()) {
            if w.id() != id {
                w.yield_audio();
            }
        }
    }
}

/// The main page model.
pub struct App<M> {
    widgets: Vec<Widget<M>>,
    rejected: Vec<RejectedWidget>,
    focused: usize,
}

impl<M: Media> App<M> {
    /// Build the page from widget entries. A malformed entry is rejected on
    /// its own; every other widget still initializes.
    pub fn build<F>(entries: &[WidgetSettings], factory: &mut F, platform: &dyn Platform) -> Self
    where
        F: MediaFactory<Media = M>,
    {
        let mut widgets = Vec::new();
        let mut rejected = Vec::new();

        for (index, entry) in entries.iter().enumerate() {
            match WidgetConfig::from_settings(index, entry) {
                Ok(config) => {
                    let id = WidgetId(widgets.len());
                    widgets.push(Widget::new(id, config, factory, platform));
                }
                Err(e) => {
                    warn!(index, error = %e, "skipping malformed widget");
                    rejected.push(RejectedWidget {
                        index,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Self {
            widgets,
            rejected,
            focused: 0,
        }
    }

    pub fn widgets(&self) -> &[Widget<M>] {
        &self.widgets
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Widget<M>> {
        self.widgets.get(id.0)
    }

    #[cfg(test)]
    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut Widget<M>> {
        self.widgets.get_mut(id.0)
    }

    pub fn rejected(&self) -> &[RejectedWidget] {
        &self.rejected
    }

    pub fn has_widgets(&self) -> bool {
        !self.widgets.is_empty()
    }

    /// The widget receiving keyboard input.
    pub fn focused(&self) -> Option<WidgetId> {
        if self.widgets.is_empty() {
            None
        } else {
            Some(WidgetId(self.focused))
        }
    }

    pub fn focus(&mut self, id: WidgetId) {
        if id.0 < self.widgets.len() {
            self.focused = id.0;
        }
    }

    /// Move focus to the next widget, wrapping around.
    pub fn focus_next(&mut self) {
        if !self.widgets.is_empty() {
            self.focused = (self.focused + 1) % self.widgets.len();
        }
    }

    /// Move focus to the previous widget, wrapping around.
    pub fn focus_prev(&mut self) {
        if !self.widgets.is_empty() {
            self.focused = (self.focused + self.widgets.len() - 1) % self.widgets.len();
        }
    }

    /// Deliver a user event to one widget. Returns whether it was applied.
    pub fn dispatch(&mut self, id: WidgetId, event: WidgetEvent) -> bool {
        if id.0 >= self.widgets.len() {
            debug!(%id, ?event, "event for unknown widget");
            return false;
        }

        let (before, rest) = self.widgets.split_at_mut(id.0);
        let Some((target, after)) = rest.split_first_mut() else {
            return false;
        };
        let mut siblings = Siblings { before, after };
        target.handle(event, &mut siblings)
    }

    pub fn dispatch_focused(&mut self, event: WidgetEvent) -> bool {
        match self.focused() {
            Some(id) => self.dispatch(id, event),
            None => false,
        }
    }

    /// Seek the focused widget relative to its current position.
    pub fn seek_focused_by(&mut self, delta: f64) -> bool {
        let Some(id) = self.focused() else {
            return false;
        };
        let Some(current) = self.widget(id).map(Widget::position_fraction) else {
            return false;
        };
        self.dispatch(id, WidgetEvent::Seek(current + delta))
    }

    pub fn on_media_signal(&mut self, signal: MediaSignal) {
        match self.widgets.get_mut(signal.target.widget.0) {
            Some(w) => w.on_media_signal(signal.target.track, &signal.kind),
            None => debug!(?signal, "signal for unknown widget"),
        }
    }

    /// One display refresh for every widget.
    pub fn tick(&mut self) {
        for w in &mut self.widgets {
            w.tick();
        }
    }

    /// Silence the whole page.
    pub fn stop_all(&mut self) {
        for w in &mut self.widgets {
            w.halt();
        }
    }
}
