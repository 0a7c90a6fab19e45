//! Per-track buffering readiness and the control unlock it drives.

use super::state::TrackId;

/// Widget-level load status as shown to the user.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Readiness {
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone)]
pub struct ReadinessGate {
    a: bool,
    b: bool,
    failed: Option<TrackId>,
    touch_primary: bool,
}

impl ReadinessGate {
    /// `touch_primary` unlocks the transport button before buffering completes.
    pub fn new(touch_primary: bool) -> Self {
        Self {
            a: false,
            b: false,
            failed: None,
            touch_primary,
        }
    }

    pub fn is_ready(&self, track: TrackId) -> bool {
        match track {
            TrackId::A => self.a,
            TrackId::B => self.b,
        }
    }

    pub fn all_ready(&self) -> bool {
        self.a && self.b
    }

    /// Record that `track` can play through.
    ///
    /// Returns true exactly once: on the call that makes both tracks ready.
    /// Repeated notifications for an already ready track are ignored.
    pub fn mark_ready(&mut self, track: TrackId) -> bool {
        if self.is_ready(track) {
            return false;
        }
        match track {
            TrackId::A => self.a = true,
            TrackId::B => self.b = true,
        }
        self.all_ready() && self.failed.is_none()
    }

    /// Record a load failure. Only the first failing track is remembered.
    pub fn mark_failed(&mut self, track: TrackId) {
        if self.failed.is_none() {
            self.failed = Some(track);
        }
    }

    pub fn failed(&self) -> Option<TrackId> {
        self.failed
    }

    pub fn touch_primary(&self) -> bool {
        self.touch_primary
    }

    pub fn status(&self) -> Readiness {
        if self.failed.is_some() {
            Readiness::Failed
        } else if self.all_ready() {
            Readiness::Ready
        } else {
            Readiness::Loading
        }
    }

    /// Whether the A/B selection buttons may be used.
    pub fn selection_unlocked(&self) -> bool {
        self.status() == Readiness::Ready
    }

    /// Whether the transport button may be used.
    pub fn transport_unlocked(&self) -> bool {
        match self.status() {
            Readiness::Ready => true,
            Readiness::Loading => self.touch_primary,
            Readiness::Failed => false,
        }
    }
}
