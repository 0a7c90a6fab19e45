//! Progress fill tracking.
//!
//! The reporter behaves like a self-rescheduling per-frame callback: `start`
//! schedules it for a track, and each `tick` renders one sample and only
//! schedules the next one if that track is still playing. Pausing, stopping
//! or switching therefore ends the loop within one refresh.

use crate::audio::Media;

use super::pair::TrackPair;
use super::state::{TrackId, clamp_fraction};

#[derive(Debug, Clone, Default)]
pub struct ProgressReporter {
    fill: f64,
    scheduled: Option<TrackId>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current fill ratio in `0.0..=1.0`.
    pub fn fill(&self) -> f64 {
        self.fill
    }

    /// The track driving the loop, if one is scheduled.
    #[cfg(test)]
    pub fn scheduled(&self) -> Option<TrackId> {
        self.scheduled
    }

    pub fn start(&mut self, track: TrackId) {
        self.scheduled = Some(track);
    }

    /// Render one sample.
    ///
    /// Returns the driving track when this sample found it no longer
    /// playing, which ends the loop.
    pub fn tick<M: Media>(&mut self, pair: &TrackPair<M>) -> Option<TrackId> {
        let track = self.scheduled.take()?;

        let media = pair.media(track);
        self.fill = ratio(media.current_time(), media.duration());
        if media.is_paused() {
            return Some(track);
        }
        self.scheduled = Some(track);
        None
    }

    /// Show a seek target right away, independent of the loop.
    pub fn show(&mut self, p: f64) {
        self.fill = clamp_fraction(p);
    }

    /// Empty the bar and drop any scheduled sample.
    pub fn reset(&mut self) {
        self.fill = 0.0;
        self.scheduled = None;
    }
}

/// `current / duration`, or 0 when the duration is unknown or zero.
pub fn ratio(current: f64, duration: Option<f64>) -> f64 {
    match duration {
        Some(d) if d > 0.0 && d.is_finite() => clamp_fraction(current / d),
        _ => 0.0,
    }
}
