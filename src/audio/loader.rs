//! Background buffering of tracks.
//!
//! Each track is opened, measured and decoded on its own loader thread. The
//! thread installs the finished sink into the track's shared slot and posts
//! a `MediaSignal`; it never touches widget state.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use lofty::file::AudioFile;
use rodio::Sink;
use rodio::mixer::Mixer;
use tracing::{debug, warn};

use crate::error::{AbError, AbResult};

use super::sink::{create_sink_at, seek_sink};
use super::types::{MediaSignal, SignalKind, SignalTarget};

/// Playback state of one rodio-backed track, shared with its loader thread.
#[derive(Default)]
pub(super) struct TrackSlot {
    pub sink: Option<Sink>,
    pub duration: Option<Duration>,
    /// Position requested before (or while) the sink exists.
    pub pending_pos: Duration,
    /// Whether playback was requested.
    pub want_play: bool,
}

pub(super) type SharedSlot = Arc<Mutex<TrackSlot>>;

/// Turn a source locator into a local path. Bare paths and `file://` URIs
/// are accepted; any other scheme is rejected.
pub fn resolve_locator(locator: &str) -> AbResult<PathBuf> {
    let locator = locator.trim();
    if let Some(rest) = locator.strip_prefix("file://") {
        // `file://localhost/x` and `file:///x` both name `/x`.
        let rest = rest.strip_prefix("localhost").unwrap_or(rest);
        if rest.is_empty() {
            return Err(AbError::UnsupportedSource {
                locator: locator.to_string(),
            });
        }
        return Ok(PathBuf::from(rest));
    }

    let has_scheme = locator
        .split_once("://")
        .is_some_and(|(scheme, _)| !scheme.is_empty() && scheme.chars().all(char::is_alphanumeric));
    if locator.is_empty() || has_scheme {
        return Err(AbError::UnsupportedSource {
            locator: locator.to_string(),
        });
    }
    Ok(PathBuf::from(locator))
}

/// Read the duration from the file's metadata, if lofty understands it.
pub(super) fn read_duration(path: &Path) -> Option<Duration> {
    lofty::read_from_path(path)
        .ok()
        .map(|tagged| tagged.properties().duration())
        .filter(|d| !d.is_zero())
}

/// Buffer `path` in the background and report the outcome for `target`.
pub(super) fn spawn_loader(
    path: PathBuf,
    mixer: Mixer,
    slot: SharedSlot,
    target: SignalTarget,
    signals: Sender<MediaSignal>,
) {
    thread::spawn(move || {
        let tagged = read_duration(&path);

        match create_sink_at(&mixer, &path, Duration::ZERO) {
            Ok((sink, decoded)) => {
                let duration = tagged.or(decoded);
                let mut started = false;

                if let Ok(mut s) = slot.lock() {
                    let pos = match duration {
                        Some(d) => s.pending_pos.min(d),
                        None => s.pending_pos,
                    };
                    if !pos.is_zero() {
                        seek_sink(&sink, pos);
                    }
                    if s.want_play {
                        sink.play();
                        started = true;
                    }
                    s.sink = Some(sink);
                    s.duration = duration;
                }

                debug!(path = %path.display(), ?duration, "track buffered");
                let _ = signals.send(MediaSignal::new(target, SignalKind::CanPlayThrough));
                if started {
                    let _ = signals.send(MediaSignal::new(target, SignalKind::Playing));
                }
            }
            Err(e) => {
                warn!(error = %e, "track failed to load");
                let _ = signals.send(MediaSignal::new(target, SignalKind::Failed(e.to_string())));
            }
        }
    });
}
