//! `rodio` implementation of the media collaborators.
//!
//! `RodioBackend` owns the output stream; every `RodioTrack` it creates
//! plays through the stream's mixer. Tracks buffer on loader threads and
//! report progress through the signal channel handed to `open`.

use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use rodio::mixer::Mixer;
use rodio::{OutputStream, OutputStreamBuilder};
use tracing::{debug, info, warn};

use crate::error::{AbError, AbResult};

use super::loader::{SharedSlot, TrackSlot, resolve_locator, spawn_loader};
use super::sink::{create_sink_at, seek_sink};
use super::types::{Media, MediaFactory, MediaSignal, SignalKind, SignalTarget};

pub struct RodioBackend {
    stream: OutputStream,
    signals: Sender<MediaSignal>,
}

impl RodioBackend {
    /// Open the default output device.
    pub fn open(signals: Sender<MediaSignal>) -> AbResult<Self> {
        let mut stream =
            OutputStreamBuilder::open_default_stream().map_err(|e| AbError::Output(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped, which corrupts the TUI.
        stream.log_on_drop(false);
        info!("audio output opened");
        Ok(Self { stream, signals })
    }
}

impl MediaFactory for RodioBackend {
    type Media = RodioTrack;

    fn create(&mut self, source: &str, target: SignalTarget) -> RodioTrack {
        let slot: SharedSlot = Arc::new(Mutex::new(TrackSlot::default()));
        let mixer = self.stream.mixer().clone();

        let path = match resolve_locator(source) {
            Ok(path) => {
                debug!(%source, widget = %target.widget, track = %target.track, "loading track");
                spawn_loader(
                    path.clone(),
                    mixer.clone(),
                    Arc::clone(&slot),
                    target,
                    self.signals.clone(),
                );
                Some(path)
            }
            Err(e) => {
                warn!(error = %e, "rejecting track source");
                let _ = self
                    .signals
                    .send(MediaSignal::new(target, SignalKind::Failed(e.to_string())));
                None
            }
        };

        RodioTrack {
            path,
            mixer,
            slot,
            target,
            signals: self.signals.clone(),
        }
    }
}

/// One side of an A/B pair, backed by a `rodio::Sink` once buffered.
pub struct RodioTrack {
    path: Option<PathBuf>,
    mixer: Mixer,
    slot: SharedSlot,
    target: SignalTarget,
    signals: Sender<MediaSignal>,
}

impl RodioTrack {
    fn slot(&self) -> Option<MutexGuard<'_, TrackSlot>> {
        self.slot.lock().ok()
    }

    /// Replace an exhausted sink with a fresh one at `pos`.
    ///
    /// A `Sink` cannot rewind once its source has been drained.
    fn rebuild(&self, slot: &mut TrackSlot, pos: Duration) {
        let Some(path) = self.path.as_ref() else {
            return;
        };
        match create_sink_at(&self.mixer, path, pos) {
            Ok((sink, _)) => slot.sink = Some(sink),
            Err(e) => warn!(error = %e, "track could not be reopened"),
        }
    }
}

fn secs_to_duration(secs: f64) -> Duration {
    if secs.is_finite() && secs > 0.0 {
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    } else {
        Duration::ZERO
    }
}

impl Media for RodioTrack {
    fn play(&mut self) {
        let Some(mut slot) = self.slot() else {
            return;
        };
        slot.want_play = true;

        // Playing an ended track starts it over.
        let ended = slot.sink.as_ref().is_some_and(|s| s.empty());
        if ended {
            slot.pending_pos = Duration::ZERO;
            self.rebuild(&mut slot, Duration::ZERO);
        }

        if let Some(sink) = slot.sink.as_ref() {
            sink.play();
            let _ = self
                .signals
                .send(MediaSignal::new(self.target, SignalKind::Playing));
        }
    }

    fn pause(&mut self) {
        let Some(mut slot) = self.slot() else {
            return;
        };
        slot.want_play = false;
        if let Some(sink) = slot.sink.as_ref() {
            sink.pause();
        }
    }

    fn is_paused(&self) -> bool {
        let Some(slot) = self.slot() else {
            return true;
        };
        match slot.sink.as_ref() {
            Some(sink) => sink.is_paused() || sink.empty(),
            None => !slot.want_play,
        }
    }

    fn current_time(&self) -> f64 {
        let Some(slot) = self.slot() else {
            return 0.0;
        };
        match slot.sink.as_ref() {
            Some(sink) if sink.empty() => slot.duration.unwrap_or(slot.pending_pos).as_secs_f64(),
            Some(sink) => sink.get_pos().as_secs_f64(),
            None => slot.pending_pos.as_secs_f64(),
        }
    }

    fn set_current_time(&mut self, secs: f64) {
        let Some(mut slot) = self.slot() else {
            return;
        };
        let mut pos = secs_to_duration(secs);
        if let Some(d) = slot.duration {
            pos = pos.min(d);
        }
        slot.pending_pos = pos;

        let ended = slot.sink.as_ref().is_some_and(|s| s.empty());
        if ended {
            slot.want_play = false;
            self.rebuild(&mut slot, pos);
        } else if let Some(sink) = slot.sink.as_ref() {
            seek_sink(sink, pos);
        }
    }

    fn duration(&self) -> Option<f64> {
        self.slot()?.duration.map(|d| d.as_secs_f64())
    }
}
