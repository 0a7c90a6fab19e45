//! In-memory media used by the unit tests.

use super::types::{Media, MediaFactory, MediaSignal, SignalKind, SignalTarget};

#[derive(Debug, Clone)]
pub struct FakeMedia {
    pub source: String,
    pub target: SignalTarget,
    pub paused: bool,
    pub time: f64,
    pub duration: Option<f64>,
    pub play_calls: usize,
    pub seeks: Vec<f64>,
}

impl FakeMedia {
    /// Let wall-clock time pass: a playing resource advances and pauses at its end.
    pub fn advance(&mut self, secs: f64) {
        if self.paused {
            return;
        }
        self.time += secs;
        if let Some(d) = self.duration {
            if self.time >= d {
                self.time = d;
                self.paused = true;
            }
        }
    }

    pub fn signal(&self, kind: SignalKind) -> MediaSignal {
        MediaSignal::new(self.target, kind)
    }
}

impl Media for FakeMedia {
    fn play(&mut self) {
        self.paused = false;
        self.play_calls += 1;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.time
    }

    fn set_current_time(&mut self, secs: f64) {
        let upper = self.duration.unwrap_or(f64::MAX);
        self.time = secs.clamp(0.0, upper);
        self.seeks.push(self.time);
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }
}

/// Creates `FakeMedia` with a fixed duration and records what it created.
#[derive(Debug, Default)]
pub struct FakeFactory {
    pub duration: Option<f64>,
    pub created: Vec<(String, SignalTarget)>,
}

impl FakeFactory {
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration: Some(duration),
            created: Vec::new(),
        }
    }
}

impl MediaFactory for FakeFactory {
    type Media = FakeMedia;

    fn create(&mut self, source: &str, target: SignalTarget) -> FakeMedia {
        self.created.push((source.to_string(), target));
        FakeMedia {
            source: source.to_string(),
            target,
            paused: true,
            time: 0.0,
            duration: self.duration,
            play_calls: 0,
            seeks: Vec::new(),
        }
    }
}
