//! Theme and control presentation.
//!
//! `present` is a pure projection of the playback state and readiness into
//! the affordances the UI shows. Nothing here is ever read back to decide a
//! transition; the controller only consults a freshly computed view to
//! reject events aimed at disabled controls.

use crate::playback::{PlaybackState, Readiness, ReadinessGate, TrackId, WidgetEvent};

/// Visual theme of a widget: light follows A ("Before"), dark follows B ("After").
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn for_track(track: TrackId) -> Self {
        match track {
            TrackId::A => Self::Light,
            TrackId::B => Self::Dark,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TransportIcon {
    Play,
    Pause,
}

/// A button's availability and its accessible pressed state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ButtonView {
    pub enabled: bool,
    pub pressed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlView {
    pub theme: Theme,
    pub a: ButtonView,
    pub b: ButtonView,
    pub transport: ButtonView,
    pub icon: TransportIcon,
    pub stop: ButtonView,
    /// Whether clicks on the progress track seek.
    pub seekable: bool,
    pub status: Readiness,
}

impl ControlView {
    pub fn button(&self, track: TrackId) -> ButtonView {
        match track {
            TrackId::A => self.a,
            TrackId::B => self.b,
        }
    }

    /// Whether the control that emits `event` is currently usable.
    pub fn accepts(&self, event: WidgetEvent) -> bool {
        match event {
            WidgetEvent::Select(t) => self.button(t).enabled,
            WidgetEvent::TogglePlayPause => self.transport.enabled,
            WidgetEvent::Stop => self.stop.enabled,
            WidgetEvent::Seek(_) => self.seekable,
        }
    }
}

pub fn present(state: PlaybackState, gate: &ReadinessGate, seekable: bool) -> ControlView {
    let selected = state.selected();
    let selectable = gate.selection_unlocked();

    // The audible side cannot be selected again; B stays locked while stopped.
    let select_button = |track: TrackId| ButtonView {
        enabled: selectable
            && state.playing() != Some(track)
            && !(state == PlaybackState::Stopped && track == TrackId::B),
        pressed: selected == track,
    };

    ControlView {
        theme: Theme::for_track(selected),
        a: select_button(TrackId::A),
        b: select_button(TrackId::B),
        transport: ButtonView {
            enabled: gate.transport_unlocked(),
            pressed: false,
        },
        icon: if state.is_playing() {
            TransportIcon::Pause
        } else {
            TransportIcon::Play
        },
        stop: ButtonView {
            enabled: state != PlaybackState::Stopped && gate.status() != Readiness::Failed,
            pressed: false,
        },
        seekable,
        status: gate.status(),
    }
}

#[cfg(test)]
mod tests;
