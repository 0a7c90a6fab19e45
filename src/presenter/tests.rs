use super::*;

fn ready_gate() -> ReadinessGate {
    let mut gate = ReadinessGate::new(false);
    gate.mark_ready(TrackId::A);
    gate.mark_ready(TrackId::B);
    gate
}

#[test]
fn loading_widget_is_locked_but_light_with_a_pressed() {
    let view = present(PlaybackState::Stopped, &ReadinessGate::new(false), true);
    assert_eq!(view.theme, Theme::Light);
    assert_eq!(view.status, Readiness::Loading);
    assert!(!view.a.enabled && view.a.pressed);
    assert!(!view.b.enabled && !view.b.pressed);
    assert!(!view.transport.enabled);
    assert!(!view.stop.enabled);
    assert_eq!(view.icon, TransportIcon::Play);
}

#[test]
fn ready_and_stopped_unlocks_a_and_transport_only() {
    let view = present(PlaybackState::Stopped, &ready_gate(), true);
    assert!(view.a.enabled);
    assert!(!view.b.enabled);
    assert!(view.transport.enabled);
    assert!(!view.stop.enabled);
}

#[test]
fn playing_b_is_dark_with_b_pressed_and_pause_icon() {
    let view = present(PlaybackState::Playing(TrackId::B), &ready_gate(), true);
    assert_eq!(view.theme, Theme::Dark);
    assert_eq!(view.icon, TransportIcon::Pause);
    assert_eq!(view.b, ButtonView { enabled: false, pressed: true });
    assert_eq!(view.a, ButtonView { enabled: true, pressed: false });
    assert!(view.stop.enabled);
}

#[test]
fn paused_keeps_side_and_shows_play_icon() {
    let view = present(PlaybackState::Paused(TrackId::B), &ready_gate(), true);
    assert_eq!(view.theme, Theme::Dark);
    assert_eq!(view.icon, TransportIcon::Play);
    assert!(view.a.enabled && view.b.enabled);
    assert!(view.b.pressed);
    assert!(view.stop.enabled);
}

#[test]
fn accepts_follows_enabled_flags() {
    let view = present(PlaybackState::Stopped, &ready_gate(), false);
    assert!(view.accepts(WidgetEvent::Select(TrackId::A)));
    assert!(!view.accepts(WidgetEvent::Select(TrackId::B)));
    assert!(view.accepts(WidgetEvent::TogglePlayPause));
    assert!(!view.accepts(WidgetEvent::Stop));
    assert!(!view.accepts(WidgetEvent::Seek(0.5)));
}

#[test]
fn failed_widget_disables_everything() {
    let mut gate = ready_gate();
    gate.mark_failed(TrackId::A);
    let view = present(PlaybackState::Playing(TrackId::A), &gate, true);
    assert_eq!(view.status, Readiness::Failed);
    assert!(!view.a.enabled && !view.b.enabled);
    assert!(!view.transport.enabled);
    assert!(!view.stop.enabled);
}
