//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the page with `ratatui`: one panel per A/B widget,
//! plus a header, the rejected-widget list and a controls footer. While
//! drawing it records where every clickable control landed so mouse clicks
//! can be mapped back onto widget events.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::App;
use crate::audio::Media;
use crate::config::{ControlsSettings, UiSettings};
use crate::playback::{PlaybackState, Readiness, TrackId, WidgetEvent, clamp_fraction};
use crate::presenter::{ButtonView, Theme, TransportIcon};
use crate::widget::{Widget, WidgetId};

const ACCENT: Color = Color::Rgb(0x8A, 0x4F, 0xFF);
const STOP_RED: Color = Color::Rgb(0xC7, 0x4A, 0x4A);

/// Rows taken by one widget panel, borders included.
const PANEL_HEIGHT: u16 = 5;

static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("a/b", "before/after");
    map.insert("space/p", "play/pause");
    map.insert("s", "stop");
    // h/l is filled dynamically from config.
    map.insert("0-9", "jump to n×10%");
    map.insert("j/k/tab", "focus");
    map.insert("q", "quit");
    map
});

/// Render the controls help text, incorporating the seek step.
fn controls_text(seek_step_percent: u8) -> String {
    let order = ["a/b", "space/p", "s", "h/l", "0-9", "j/k/tab", "q"];
    order
        .iter()
        .filter_map(|k| {
            if *k == "h/l" {
                Some(format!("[h/l] seek -/+{}%", seek_step_percent))
            } else {
                CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v))
            }
        })
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format seconds as `MM:SS`.
fn format_mmss(secs: f64) -> String {
    let secs = if secs.is_finite() && secs > 0.0 { secs as u64 } else { 0 };
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn panel_style(theme: Theme) -> Style {
    match theme {
        Theme::Light => Style::default().fg(Color::Black).bg(Color::Gray),
        Theme::Dark => Style::default().fg(Color::White).bg(Color::Black),
    }
}

fn button_style(button: ButtonView, base: Style) -> Style {
    let mut style = base;
    if button.pressed {
        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }
    if !button.enabled {
        style = style.add_modifier(Modifier::DIM);
    }
    style
}

/// Fraction of `area`'s width left of `column`, clamped to `[0, 1]`.
pub fn seek_fraction(area: Rect, column: u16) -> f64 {
    if area.width == 0 {
        return 0.0;
    }
    let offset = f64::from(column.saturating_sub(area.x));
    clamp_fraction(offset / f64::from(area.width))
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum HitKind {
    Button(WidgetEvent),
    Progress,
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct HitTarget {
    widget: WidgetId,
    area: Rect,
    kind: HitKind,
}

/// Screen areas of the clickable controls from the last draw.
#[derive(Debug, Default)]
pub struct HitMap {
    targets: Vec<HitTarget>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.targets.clear();
    }

    fn push(&mut self, widget: WidgetId, area: Rect, kind: HitKind) {
        if area.width > 0 && area.height > 0 {
            self.targets.push(HitTarget { widget, area, kind });
        }
    }

    /// Map a click at (`column`, `row`) to the event its control emits.
    pub fn resolve(&self, column: u16, row: u16) -> Option<(WidgetId, WidgetEvent)> {
        let hit = self.targets.iter().find(|t| {
            column >= t.area.x
                && column < t.area.x.saturating_add(t.area.width)
                && row >= t.area.y
                && row < t.area.y.saturating_add(t.area.height)
        })?;

        let event = match hit.kind {
            HitKind::Button(event) => event,
            HitKind::Progress => WidgetEvent::Seek(seek_fraction(hit.area, column)),
        };
        Some((hit.widget, event))
    }
}

fn track_label<M: Media>(widget: &Widget<M>, track: TrackId) -> &str {
    match track {
        TrackId::A => &widget.config().a_label,
        TrackId::B => &widget.config().b_label,
    }
}

fn status_text<M: Media>(widget: &Widget<M>, ui: &UiSettings) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(match widget.readiness() {
        Readiness::Loading => "loading…".to_string(),
        Readiness::Ready => "ready".to_string(),
        Readiness::Failed => match widget.failed_track() {
            Some(track) => format!("failed to load {}", track_label(widget, track)),
            None => "failed to load".to_string(),
        },
    });

    let state = widget.state();
    let label = track_label(widget, state.selected());
    let verb = if state.is_playing() {
        "playing"
    } else if state == PlaybackState::Stopped {
        "stopped"
    } else {
        "paused"
    };
    parts.push(format!("{verb}: {label}"));

    if ui.show_time {
        let pair = widget.pair();
        parts.push(format!(
            "{} / {}",
            format_mmss(pair.position(state.selected())),
            format_mmss(pair.duration())
        ));
    }

    parts.join(" • ")
}

fn draw_widget<M: Media>(
    frame: &mut Frame,
    widget: &Widget<M>,
    focused: bool,
    area: Rect,
    ui: &UiSettings,
    hits: &mut HitMap,
) {
    let view = widget.view();
    let base = panel_style(view.theme);
    let id = widget.id();

    let title = if focused {
        format!(" > {} ", widget.name())
    } else {
        format!(" {} ", widget.name())
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(base)
        .padding(Padding {
            left: 1,
            right: 1,
            top: 0,
            bottom: 0,
        });
    if focused {
        block = block.border_style(base.fg(ACCENT).add_modifier(Modifier::BOLD));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    // Buttons row
    let config = widget.config();
    let a_text = format!("[ {} ]", config.a_label);
    let b_text = format!("[ {} ]", config.b_label);
    let transport_text = match view.icon {
        TransportIcon::Play => "[ ▶ ]",
        TransportIcon::Pause => "[ ⏸ ]",
    };
    let stop_text = "[ ■ ]";

    let width = |s: &str| s.chars().count() as u16;
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Length(width(a_text.as_str())),
            Constraint::Length(width(b_text.as_str())),
            Constraint::Length(width(transport_text)),
            Constraint::Length(width(stop_text)),
            Constraint::Min(0),
        ])
        .split(rows[0]);

    let buttons = [
        (a_text.as_str(), view.a, base, WidgetEvent::Select(TrackId::A)),
        (b_text.as_str(), view.b, base, WidgetEvent::Select(TrackId::B)),
        (transport_text, view.transport, base.fg(ACCENT), WidgetEvent::TogglePlayPause),
        (stop_text, view.stop, base.fg(STOP_RED), WidgetEvent::Stop),
    ];
    for (cell, (text, button, style, event)) in cells.iter().zip(buttons) {
        frame.render_widget(Paragraph::new(text).style(button_style(button, style)), *cell);
        hits.push(id, *cell, HitKind::Button(event));
    }

    // Progress track
    let fill = clamp_fraction(widget.fill());
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(ACCENT).bg(Color::DarkGray))
        .ratio(fill)
        .label(Span::raw(format!("{:.0}%", fill * 100.0)));
    frame.render_widget(gauge, rows[1]);
    if view.seekable {
        hits.push(id, rows[1], HitKind::Progress);
    }

    let status = Paragraph::new(status_text(widget, ui)).style(match view.status {
        Readiness::Failed => base.fg(STOP_RED),
        _ => base,
    });
    frame.render_widget(status, rows[2]);
}

/// Render the entire UI into the provided `frame`, recording hit areas.
pub fn draw<M: Media>(
    frame: &mut Frame,
    app: &App<M>,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
    hits: &mut HitMap,
) {
    hits.clear();

    let rejected = app.rejected();
    let rejected_height = if rejected.is_empty() {
        0
    } else {
        rejected.len() as u16 + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(rejected_height),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" abswitch ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    if !rejected.is_empty() {
        let lines: Vec<Line> = rejected
            .iter()
            .map(|r| Line::from(format!("entry {}: {}", r.index + 1, r.reason)))
            .collect();
        let list = Paragraph::new(lines)
            .style(Style::default().fg(STOP_RED))
            .block(Block::bordered().title(" skipped widgets "));
        frame.render_widget(list, chunks[1]);
    }

    if app.has_widgets() {
        let mut constraints: Vec<Constraint> = app
            .widgets()
            .iter()
            .map(|_| Constraint::Length(PANEL_HEIGHT))
            .collect();
        constraints.push(Constraint::Min(0));
        let panels = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(chunks[2]);

        let focused = app.focused();
        for (widget, area) in app.widgets().iter().zip(panels.iter()) {
            draw_widget(
                frame,
                widget,
                focused == Some(widget.id()),
                *area,
                ui_settings,
                hits,
            );
        }
    } else {
        let empty = Paragraph::new("no widgets configured")
            .alignment(Alignment::Center)
            .block(Block::bordered());
        frame.render_widget(empty, chunks[2]);
    }

    let footer = Paragraph::new(controls_text(controls_settings.seek_step_percent))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

#[cfg(test)]
mod tests;
