//! Media collaborator interfaces and the signals media resources emit.
//!
//! The widget core never talks to an audio library directly. It drives
//! `Media` handles created by a `MediaFactory`, and learns about buffering
//! and playback through `MediaSignal`s posted back to the page.

use crate::playback::TrackId;
use crate::widget::WidgetId;

/// One loaded (or loading) audio resource.
pub trait Media {
    /// Start or resume audible playback.
    fn play(&mut self);
    /// Pause without touching the position.
    fn pause(&mut self);
    /// True unless the resource is actively playing. An ended resource is paused.
    fn is_paused(&self) -> bool;
    /// Current position in seconds.
    fn current_time(&self) -> f64;
    /// Move the position, clamped to `[0, duration]` when the duration is known.
    fn set_current_time(&mut self, secs: f64);
    /// Duration in seconds, `None` until metadata is available.
    fn duration(&self) -> Option<f64>;
}

/// Creates media handles for source locators.
///
/// Creation never fails synchronously; load problems surface later as
/// `SignalKind::Failed`.
pub trait MediaFactory {
    type Media: Media;

    fn create(&mut self, source: &str, target: SignalTarget) -> Self::Media;
}

/// Where a media signal should be delivered.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SignalTarget {
    pub widget: WidgetId,
    pub track: TrackId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalKind {
    /// Enough data is buffered to play through without stalling.
    CanPlayThrough,
    /// Audible playback actually started.
    Playing,
    /// The resource cannot be loaded.
    Failed(String),
}

/// A notification from a media resource to its widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSignal {
    pub target: SignalTarget,
    pub kind: SignalKind,
}

impl MediaSignal {
    pub fn new(target: SignalTarget, kind: SignalKind) -> Self {
        Self { target, kind }
    }
}
