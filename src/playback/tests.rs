use super::*;
use crate::audio::testing::FakeFactory;
use crate::audio::Media;
use crate::widget::WidgetId;

fn pair(duration: f64) -> TrackPair<crate::audio::testing::FakeMedia> {
    let mut factory = FakeFactory::with_duration(duration);
    TrackPair::load(WidgetId(0), "a.mp3", "b.mp3", &mut factory)
}

#[test]
fn select_moves_to_playing_from_any_state() {
    for from in [
        PlaybackState::Stopped,
        PlaybackState::Playing(TrackId::A),
        PlaybackState::Paused(TrackId::A),
        PlaybackState::Playing(TrackId::B),
        PlaybackState::Paused(TrackId::B),
    ] {
        let (next, action) = from.on(WidgetEvent::Select(TrackId::B), TrackId::A);
        assert_eq!(next, PlaybackState::Playing(TrackId::B));
        assert_eq!(action, Action::PlayExclusive(TrackId::B));
    }
}

#[test]
fn toggle_cycles_between_playing_and_paused() {
    let playing = PlaybackState::Playing(TrackId::B);
    let (paused, action) = playing.on(WidgetEvent::TogglePlayPause, TrackId::A);
    assert_eq!(paused, PlaybackState::Paused(TrackId::B));
    assert_eq!(action, Action::PauseBoth);

    let (resumed, action) = paused.on(WidgetEvent::TogglePlayPause, TrackId::A);
    assert_eq!(resumed, PlaybackState::Playing(TrackId::B));
    assert_eq!(action, Action::PlayExclusive(TrackId::B));
}

#[test]
fn toggle_from_stopped_starts_the_track_ahead() {
    let (next, _) = PlaybackState::Stopped.on(WidgetEvent::TogglePlayPause, TrackId::B);
    assert_eq!(next, PlaybackState::Playing(TrackId::B));
}

#[test]
fn seek_keeps_state_and_clamps_fraction() {
    let state = PlaybackState::Paused(TrackId::B);
    let (next, action) = state.on(WidgetEvent::Seek(1.7), TrackId::A);
    assert_eq!(next, state);
    assert_eq!(action, Action::SeekFraction(1.0));

    let (_, action) = state.on(WidgetEvent::Seek(f64::NAN), TrackId::A);
    assert_eq!(action, Action::SeekFraction(0.0));
}

#[test]
fn stopped_presents_a_as_selected() {
    assert_eq!(PlaybackState::default(), PlaybackState::Stopped);
    assert_eq!(PlaybackState::Stopped.selected(), TrackId::A);
    assert_eq!(PlaybackState::Paused(TrackId::B).selected(), TrackId::B);
    assert_eq!(PlaybackState::Paused(TrackId::B).playing(), None);
}

#[test]
fn ahead_prefers_a_on_ties() {
    let mut p = pair(100.0);
    assert_eq!(p.ahead(), TrackId::A);
    p.media_mut(TrackId::B).set_current_time(3.0);
    assert_eq!(p.ahead(), TrackId::B);
}

#[test]
fn duration_is_max_of_known_durations() {
    let mut p = pair(100.0);
    p.media_mut(TrackId::B).duration = Some(120.0);
    assert_eq!(p.duration(), 120.0);

    p.media_mut(TrackId::A).duration = None;
    p.media_mut(TrackId::B).duration = None;
    assert_eq!(p.duration(), 0.0);
}

#[test]
fn seek_to_clamps_and_moves_both_tracks() {
    let mut p = pair(200.0);
    assert_eq!(p.seek_to(250.0), 200.0);
    assert_eq!(p.position(TrackId::A), 200.0);
    assert_eq!(p.position(TrackId::B), 200.0);

    assert_eq!(p.seek_to(-4.0), 0.0);
    assert_eq!(p.seek_fraction(0.5), 100.0);
    assert_eq!(p.position(TrackId::A), p.position(TrackId::B));
}

#[test]
fn seek_without_known_duration_lands_on_zero() {
    let mut factory = FakeFactory::default();
    let mut p = TrackPair::load(WidgetId(0), "a.mp3", "b.mp3", &mut factory);
    assert_eq!(p.seek_fraction(0.75), 0.0);
}

#[test]
fn play_exclusive_pulls_new_track_to_the_audible_position() {
    let mut p = pair(200.0);
    p.play_exclusive(TrackId::A);
    p.media_mut(TrackId::A).advance(10.0);

    p.play_exclusive(TrackId::B);
    assert!(p.media(TrackId::A).is_paused());
    assert!(!p.media(TrackId::B).is_paused());
    assert_eq!(p.position(TrackId::A), 10.0);
    assert_eq!(p.position(TrackId::B), 10.0);
    assert_eq!(p.lead(), TrackId::B);
}

#[test]
fn play_exclusive_does_not_reseek_an_aligned_track() {
    let mut p = pair(200.0);
    p.play_exclusive(TrackId::A);
    p.media_mut(TrackId::A).advance(10.0);
    p.pause_both();

    p.play_exclusive(TrackId::A);
    assert!(p.media(TrackId::A).seeks.is_empty());
    assert_eq!(p.position(TrackId::B), 10.0);
}

#[test]
fn stop_both_rewinds_and_pauses() {
    let mut p = pair(200.0);
    p.play_exclusive(TrackId::B);
    p.media_mut(TrackId::B).advance(42.0);
    p.stop_both();

    for t in TrackId::BOTH {
        assert!(p.media(t).is_paused());
        assert_eq!(p.position(t), 0.0);
    }
    assert_eq!(p.lead(), TrackId::A);
    assert!(!p.any_playing());
}

#[test]
fn readiness_fires_once_when_both_tracks_are_ready() {
    let mut gate = ReadinessGate::new(false);
    assert_eq!(gate.status(), Readiness::Loading);
    assert!(!gate.transport_unlocked());

    assert!(!gate.mark_ready(TrackId::B));
    assert!(!gate.mark_ready(TrackId::B));
    assert!(gate.mark_ready(TrackId::A));
    assert!(!gate.mark_ready(TrackId::A));

    assert_eq!(gate.status(), Readiness::Ready);
    assert!(gate.selection_unlocked());
    assert!(gate.transport_unlocked());
}

#[test]
fn touch_platforms_unlock_transport_early() {
    let gate = ReadinessGate::new(true);
    assert!(gate.transport_unlocked());
    assert!(!gate.selection_unlocked());
}

#[test]
fn failure_locks_every_control() {
    let mut gate = ReadinessGate::new(true);
    gate.mark_ready(TrackId::A);
    gate.mark_failed(TrackId::B);
    assert!(!gate.mark_ready(TrackId::B));
    assert_eq!(gate.status(), Readiness::Failed);
    assert_eq!(gate.failed(), Some(TrackId::B));
    assert!(!gate.transport_unlocked());
    assert!(!gate.selection_unlocked());
}

#[test]
fn progress_loop_stops_once_the_track_pauses() {
    let mut p = pair(200.0);
    let mut progress = ProgressReporter::new();
    assert_eq!(progress.tick(&p), None);

    p.play_exclusive(TrackId::A);
    progress.start(TrackId::A);
    p.media_mut(TrackId::A).advance(50.0);
    assert_eq!(progress.tick(&p), None);
    assert_eq!(progress.fill(), 0.25);
    assert_eq!(progress.scheduled(), Some(TrackId::A));

    p.media_mut(TrackId::A).advance(50.0);
    p.pause_both();
    assert_eq!(progress.tick(&p), Some(TrackId::A));
    assert_eq!(progress.fill(), 0.5);
    assert_eq!(progress.scheduled(), None);
    assert_eq!(progress.tick(&p), None);
}

#[test]
fn progress_reports_a_track_that_ran_out() {
    let mut p = pair(60.0);
    let mut progress = ProgressReporter::new();
    p.play_exclusive(TrackId::B);
    progress.start(TrackId::B);

    p.media_mut(TrackId::B).advance(90.0);
    assert_eq!(progress.tick(&p), Some(TrackId::B));
    assert_eq!(progress.fill(), 1.0);
    assert_eq!(progress.scheduled(), None);
}

#[test]
fn progress_show_and_reset() {
    let mut progress = ProgressReporter::new();
    progress.show(0.3);
    assert_eq!(progress.fill(), 0.3);
    progress.start(TrackId::B);
    progress.reset();
    assert_eq!(progress.fill(), 0.0);
    assert_eq!(progress.scheduled(), None);
}

#[test]
fn ratio_handles_unknown_and_zero_durations() {
    assert_eq!(ratio(5.0, None), 0.0);
    assert_eq!(ratio(5.0, Some(0.0)), 0.0);
    assert_eq!(ratio(5.0, Some(10.0)), 0.5);
    assert_eq!(ratio(15.0, Some(10.0)), 1.0);
}
