//! Utilities for creating `rodio` sinks from local audio files.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused `Sink` at the requested start position.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::mixer::Mixer;
use rodio::{Decoder, Sink, Source};
use tracing::warn;

use crate::error::{AbError, AbResult};

/// Create a paused `Sink` for `path` positioned at `start_at`.
///
/// Also returns the duration the decoder reports, if any.
pub(super) fn create_sink_at(
    mixer: &Mixer,
    path: &Path,
    start_at: Duration,
) -> AbResult<(Sink, Option<Duration>)> {
    let load_error = |reason: String| AbError::Load {
        path: path.to_path_buf(),
        reason,
    };

    let file = File::open(path).map_err(|e| load_error(e.to_string()))?;
    let source = Decoder::new(BufReader::new(file)).map_err(|e| load_error(e.to_string()))?;
    let total = source.total_duration();

    let sink = Sink::connect_new(mixer);
    sink.append(source);
    sink.pause();

    if !start_at.is_zero() {
        seek_sink(&sink, start_at);
    }
    Ok((sink, total))
}

/// Seek a sink, logging instead of failing when the decoder cannot seek.
pub(super) fn seek_sink(sink: &Sink, pos: Duration) {
    if let Err(e) = sink.try_seek(pos) {
        warn!(error = %e, ?pos, "seek failed");
    }
}
