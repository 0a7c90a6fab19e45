//! The widget controller: one A/B widget's state machine wired to its
//! track pair, readiness gate and progress reporter.

use tracing::{debug, info, warn};

use crate::audio::{Media, MediaFactory, SignalKind};
use crate::config::WidgetConfig;
use crate::playback::{
    Action, PlaybackState, ProgressReporter, Readiness, ReadinessGate, TrackId, TrackPair,
    WidgetEvent, ratio,
};
use crate::presenter::{ControlView, present};

use super::environment::{AudibleRegistry, Platform, WidgetId};

pub struct Widget<M> {
    id: WidgetId,
    config: WidgetConfig,
    pair: TrackPair<M>,
    gate: ReadinessGate,
    state: PlaybackState,
    progress: ProgressReporter,
}

impl<M: Media> Widget<M> {
    /// Create the widget and start buffering both of its tracks.
    pub fn new<F>(id: WidgetId, config: WidgetConfig, factory: &mut F, platform: &dyn Platform) -> Self
    where
        F: MediaFactory<Media = M>,
    {
        let pair = TrackPair::load(id, &config.source_a, &config.source_b, factory);
        let gate = ReadinessGate::new(platform.is_touch_primary());
        debug!(
            widget = %config.name,
            a = %config.source_a,
            b = %config.source_b,
            touch_primary = gate.touch_primary(),
            "widget initialized"
        );

        Self {
            id,
            config,
            pair,
            gate,
            state: PlaybackState::Stopped,
            progress: ProgressReporter::new(),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn pair(&self) -> &TrackPair<M> {
        &self.pair
    }

    #[cfg(test)]
    pub fn pair_mut(&mut self) -> &mut TrackPair<M> {
        &mut self.pair
    }

    pub fn readiness(&self) -> Readiness {
        self.gate.status()
    }

    /// The first track that failed to load, if any.
    pub fn failed_track(&self) -> Option<TrackId> {
        self.gate.failed()
    }

    /// Rendered progress fill in `0.0..=1.0`.
    pub fn fill(&self) -> f64 {
        self.progress.fill()
    }

    /// Current position of the selected side as a fraction of the duration.
    pub fn position_fraction(&self) -> f64 {
        let duration = self.pair.duration();
        ratio(self.pair.position(self.state.selected()), Some(duration))
    }

    pub fn view(&self) -> ControlView {
        present(self.state, &self.gate, self.config.progress_track)
    }

    /// Apply a user event. Events aimed at disabled controls are ignored and
    /// `false` is returned.
    pub fn handle(&mut self, event: WidgetEvent, registry: &mut dyn AudibleRegistry) -> bool {
        if !self.view().accepts(event) {
            debug!(widget = %self.config.name, ?event, "control disabled, ignoring event");
            return false;
        }

        let (next, action) = self.state.on(event, self.pair.ahead());
        match action {
            Action::PlayExclusive(track) => {
                registry.pause_all_except(self.id);
                self.pair.play_exclusive(track);
                self.progress.start(track);
            }
            Action::PauseBoth => self.pair.pause_both(),
            Action::StopBoth => {
                self.pair.stop_both();
                self.progress.reset();
            }
            Action::SeekFraction(p) => {
                self.pair.seek_fraction(p);
                self.progress.show(p);
            }
        }

        if next != self.state {
            info!(
                widget = %self.config.name,
                from = ?self.state,
                to = ?next,
                lead = %self.pair.lead(),
                "playback transition"
            );
        }
        self.state = next;
        true
    }

    /// React to a signal from one of this widget's media resources.
    pub fn on_media_signal(&mut self, track: TrackId, kind: &SignalKind) {
        match kind {
            SignalKind::CanPlayThrough => {
                if self.gate.mark_ready(track) {
                    info!(widget = %self.config.name, "audio ready");
                } else {
                    debug!(widget = %self.config.name, %track, "track ready");
                }
            }
            SignalKind::Playing => {
                if self.state.playing() == Some(track) {
                    self.progress.start(track);
                }
            }
            SignalKind::Failed(reason) => {
                warn!(
                    widget = %self.config.name,
                    %track,
                    source = self.pair.source(track),
                    %reason,
                    "track failed to load"
                );
                self.gate.mark_failed(track);
                if self.state != PlaybackState::Stopped {
                    self.pair.stop_both();
                    self.progress.reset();
                    self.state = PlaybackState::Stopped;
                }
            }
        }
    }

    /// One display refresh. A track that stopped on its own (end of
    /// media) leaves the widget paused on that side.
    pub fn tick(&mut self) {
        let Some(track) = self.progress.tick(&self.pair) else {
            return;
        };
        if self.state == PlaybackState::Playing(track) {
            info!(widget = %self.config.name, %track, "track reached its end");
            self.state = PlaybackState::Paused(track);
        }
    }

    /// Another widget became audible: go quiet and show "play" again.
    pub fn yield_audio(&mut self) {
        if !self.state.is_playing() && !self.pair.any_playing() {
            return;
        }
        self.pair.pause_both();
        if let PlaybackState::Playing(track) = self.state {
            info!(widget = %self.config.name, %track, "paused by another widget");
            self.state = PlaybackState::Paused(track);
        }
    }

    /// Stop playback regardless of which controls are enabled.
    pub fn halt(&mut self) {
        self.pair.stop_both();
        self.progress.reset();
        self.state = PlaybackState::Stopped;
    }
}
