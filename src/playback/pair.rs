//! The A/B track pair.
//!
//! Wraps the two media handles of a widget and keeps them aligned: every
//! switch and every seek leaves both tracks on the same position, and at
//! most one of them is ever asked to play.

use tracing::debug;

use crate::audio::{Media, MediaFactory, SignalTarget};
use crate::widget::WidgetId;

use super::state::{TrackId, clamp_fraction};

/// Positions closer than this are considered aligned (seconds).
const ALIGN_EPSILON: f64 = 1e-3;

struct Track<M> {
    source: String,
    media: M,
}

pub struct TrackPair<M> {
    a: Track<M>,
    b: Track<M>,
    /// The track that most recently drove playback; its position is the
    /// reference when switching sides.
    lead: TrackId,
}

impl<M: Media> TrackPair<M> {
    /// Attach both sources. Buffering starts in the background and nothing plays.
    pub fn load<F>(widget: WidgetId, source_a: &str, source_b: &str, factory: &mut F) -> Self
    where
        F: MediaFactory<Media = M>,
    {
        let a = factory.create(
            source_a,
            SignalTarget {
                widget,
                track: TrackId::A,
            },
        );
        let b = factory.create(
            source_b,
            SignalTarget {
                widget,
                track: TrackId::B,
            },
        );

        Self {
            a: Track {
                source: source_a.to_string(),
                media: a,
            },
            b: Track {
                source: source_b.to_string(),
                media: b,
            },
            lead: TrackId::A,
        }
    }

    pub fn media(&self, track: TrackId) -> &M {
        match track {
            TrackId::A => &self.a.media,
            TrackId::B => &self.b.media,
        }
    }

    pub fn media_mut(&mut self, track: TrackId) -> &mut M {
        match track {
            TrackId::A => &mut self.a.media,
            TrackId::B => &mut self.b.media,
        }
    }

    pub fn source(&self, track: TrackId) -> &str {
        match track {
            TrackId::A => &self.a.source,
            TrackId::B => &self.b.source,
        }
    }

    pub fn position(&self, track: TrackId) -> f64 {
        self.media(track).current_time()
    }

    /// The longer of the two known durations, or 0 if neither is known yet.
    pub fn duration(&self) -> f64 {
        TrackId::BOTH
            .iter()
            .filter_map(|&t| self.media(t).duration())
            .filter(|d| d.is_finite())
            .fold(0.0, f64::max)
    }

    /// The track whose position is at or past the other's (ties go to A).
    pub fn ahead(&self) -> TrackId {
        if self.position(TrackId::A) >= self.position(TrackId::B) {
            TrackId::A
        } else {
            TrackId::B
        }
    }

    pub fn lead(&self) -> TrackId {
        self.lead
    }

    /// True when either track is actually playing.
    pub fn any_playing(&self) -> bool {
        TrackId::BOTH.iter().any(|&t| !self.media(t).is_paused())
    }

    /// Seek both tracks to `secs`, clamped to `[0, duration]`. Returns the clamped time.
    pub fn seek_to(&mut self, secs: f64) -> f64 {
        let duration = self.duration();
        let target = if secs.is_finite() {
            secs.clamp(0.0, duration)
        } else {
            0.0
        };
        for t in TrackId::BOTH {
            self.media_mut(t).set_current_time(target);
        }
        debug!(target, duration, "seek both tracks");
        target
    }

    /// Seek both tracks to a normalized position of the current duration.
    pub fn seek_fraction(&mut self, p: f64) -> f64 {
        let target = clamp_fraction(p) * self.duration();
        self.seek_to(target)
    }

    /// Make `track` the only audible track, starting where the previously
    /// driving track left off.
    pub fn play_exclusive(&mut self, track: TrackId) {
        self.media_mut(track.other()).pause();

        let reference = self.position(self.lead);
        for t in TrackId::BOTH {
            if (self.position(t) - reference).abs() > ALIGN_EPSILON {
                self.media_mut(t).set_current_time(reference);
            }
        }

        self.media_mut(track).play();
        debug!(%track, reference, "play exclusive");
        self.lead = track;
    }

    pub fn pause_both(&mut self) {
        for t in TrackId::BOTH {
            self.media_mut(t).pause();
        }
    }

    /// Pause both tracks and rewind them to the start.
    pub fn stop_both(&mut self) {
        for t in TrackId::BOTH {
            let media = self.media_mut(t);
            media.pause();
            media.set_current_time(0.0);
        }
        self.lead = TrackId::A;
    }
}
