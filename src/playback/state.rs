//! The A/B playback state machine.
//!
//! `PlaybackState::on` is a pure transition function: given the current
//! state and a user event it returns the next state together with the
//! `Action` the track pair has to carry out. Executing the action is the
//! widget controller's job.

use std::fmt;

/// One side of an A/B pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TrackId {
    /// "Before".
    A,
    /// "After".
    B,
}

impl TrackId {
    pub const BOTH: [TrackId; 2] = [TrackId::A, TrackId::B];

    /// The opposite side of the pair.
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::B => f.write_str("B"),
        }
    }
}

/// The playback state of one widget.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing(TrackId),
    /// Paused; the track resumes on the next play.
    Paused(TrackId),
}

/// User-level events a widget reacts to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WidgetEvent {
    /// Press the A or B button.
    Select(TrackId),
    /// Press the transport (play/pause) button.
    TogglePlayPause,
    /// Press the stop button.
    Stop,
    /// Click the progress track at a normalized position (clamped to `0.0..=1.0`).
    Seek(f64),
}

/// Work the track pair has to do for a transition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Action {
    PlayExclusive(TrackId),
    PauseBoth,
    StopBoth,
    SeekFraction(f64),
}

impl PlaybackState {
    /// The side currently presented as active. `Stopped` defaults to A.
    pub fn selected(self) -> TrackId {
        match self {
            Self::Stopped => TrackId::A,
            Self::Playing(t) | Self::Paused(t) => t,
        }
    }

    /// The audible track, if any.
    pub fn playing(self) -> Option<TrackId> {
        match self {
            Self::Playing(t) => Some(t),
            _ => None,
        }
    }

    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing(_))
    }

    /// Compute the transition for `event`.
    ///
    /// `ahead` is the track whose current position is greater than or equal
    /// to the other's (ties resolve to A); it is only consulted when toggling
    /// out of `Stopped`.
    pub fn on(self, event: WidgetEvent, ahead: TrackId) -> (PlaybackState, Action) {
        match event {
            WidgetEvent::Select(t) => (Self::Playing(t), Action::PlayExclusive(t)),
            WidgetEvent::TogglePlayPause => match self {
                Self::Stopped => (Self::Playing(ahead), Action::PlayExclusive(ahead)),
                Self::Playing(t) => (Self::Paused(t), Action::PauseBoth),
                Self::Paused(t) => (Self::Playing(t), Action::PlayExclusive(t)),
            },
            WidgetEvent::Stop => (Self::Stopped, Action::StopBoth),
            WidgetEvent::Seek(p) => (self, Action::SeekFraction(clamp_fraction(p))),
        }
    }
}

/// Clamp a normalized position into `0.0..=1.0`; NaN maps to 0.
pub fn clamp_fraction(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}
