use ratatui::{Terminal, backend::TestBackend, layout::Rect};

use super::*;
use crate::audio::testing::{FakeFactory, FakeMedia};
use crate::audio::{MediaSignal, SignalKind, SignalTarget};
use crate::config::WidgetSettings;
use crate::widget::Platform;

struct Desktop;

impl Platform for Desktop {
    fn is_touch_primary(&self) -> bool {
        false
    }
}

fn page(progress_track: bool) -> App<FakeMedia> {
    let mut entry = WidgetSettings::from_pair("a.flac", "b.flac");
    entry.name = Some("mix".to_string());
    entry.progress_track = progress_track;

    let mut factory = FakeFactory::with_duration(90.0);
    let mut app = App::build(&[entry], &mut factory, &Desktop);
    for track in TrackId::BOTH {
        app.on_media_signal(MediaSignal::new(
            SignalTarget {
                widget: WidgetId(0),
                track,
            },
            SignalKind::CanPlayThrough,
        ));
    }
    app
}

fn render(app: &App<FakeMedia>) -> (String, HitMap) {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    let mut hits = HitMap::default();
    terminal
        .draw(|f| {
            draw(
                f,
                app,
                &UiSettings::default(),
                &ControlsSettings::default(),
                &mut hits,
            )
        })
        .unwrap();
    let text = terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|c| c.symbol())
        .collect::<String>();
    (text, hits)
}

fn events(hits: &HitMap) -> Vec<(u16, u16, WidgetEvent)> {
    let mut out = Vec::new();
    for row in 0..20 {
        for column in 0..80 {
            if let Some((id, event)) = hits.resolve(column, row) {
                assert_eq!(id, WidgetId(0));
                out.push((column, row, event));
            }
        }
    }
    out
}

#[test]
fn format_mmss_truncates_and_guards() {
    assert_eq!(format_mmss(0.0), "00:00");
    assert_eq!(format_mmss(61.9), "01:01");
    assert_eq!(format_mmss(-3.0), "00:00");
    assert_eq!(format_mmss(f64::NAN), "00:00");
}

#[test]
fn controls_text_includes_seek_step() {
    let text = controls_text(7);
    assert!(text.contains("[h/l] seek -/+7%"));
    assert!(text.starts_with("[a/b]"));
    assert!(text.ends_with("[q] quit"));
}

#[test]
fn seek_fraction_maps_columns_onto_the_track() {
    let area = Rect::new(10, 0, 40, 1);
    assert_eq!(seek_fraction(area, 10), 0.0);
    assert_eq!(seek_fraction(area, 30), 0.5);
    assert_eq!(seek_fraction(area, 2), 0.0);
    assert_eq!(seek_fraction(area, 200), 1.0);
    assert_eq!(seek_fraction(Rect::new(0, 0, 0, 1), 5), 0.0);
}

#[test]
fn empty_hit_map_resolves_nothing() {
    let hits = HitMap::default();
    assert_eq!(hits.resolve(0, 0), None);
}

#[test]
fn draw_records_every_control() {
    let app = page(true);
    let (text, hits) = render(&app);
    assert!(text.contains("mix"));
    assert!(text.contains("[ Before ]"));
    assert!(text.contains("[ After ]"));
    assert!(text.contains("ready"));

    let found = events(&hits);
    for wanted in [
        WidgetEvent::Select(TrackId::A),
        WidgetEvent::Select(TrackId::B),
        WidgetEvent::TogglePlayPause,
        WidgetEvent::Stop,
    ] {
        assert!(found.iter().any(|(_, _, e)| *e == wanted), "{wanted:?} missing");
    }

    let seeks: Vec<f64> = found
        .iter()
        .filter_map(|(_, _, e)| match e {
            WidgetEvent::Seek(p) => Some(*p),
            _ => None,
        })
        .collect();
    assert!(!seeks.is_empty());
    assert_eq!(seeks[0], 0.0);
    assert!(seeks.windows(2).all(|w| w[0] <= w[1]));
    assert!(seeks.iter().all(|p| (0.0..=1.0).contains(p)));
}

#[test]
fn progress_track_off_records_no_seek_area() {
    let app = page(false);
    let (_, hits) = render(&app);
    assert!(
        events(&hits)
            .iter()
            .all(|(_, _, e)| !matches!(e, WidgetEvent::Seek(_)))
    );
}

#[test]
fn rejected_entries_are_listed() {
    let mut factory = FakeFactory::default();
    let app: App<FakeMedia> = App::build(&[WidgetSettings::default()], &mut factory, &Desktop);
    let (text, hits) = render(&app);
    assert!(text.contains("skipped widgets"));
    assert!(text.contains("entry 1"));
    assert!(text.contains("no widgets configured"));
    assert_eq!(hits.resolve(5, 5), None);
}
