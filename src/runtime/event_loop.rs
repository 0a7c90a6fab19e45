use std::sync::mpsc::Receiver;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

use crate::app::App;
use crate::audio::{Media, MediaSignal};
use crate::config::{self, ControlsSettings};
use crate::playback::{TrackId, WidgetEvent};
use crate::ui::{self, HitMap};

/// What a key press asks of the page.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(super) enum KeyAction {
    Widget(WidgetEvent),
    /// Seek the focused widget by a signed fraction of its duration.
    SeekBy(f64),
    FocusNext,
    FocusPrev,
    Quit,
}

pub(super) fn map_key(key: KeyEvent, controls: &ControlsSettings) -> Option<KeyAction> {
    let step = f64::from(controls.seek_step_percent) / 100.0;
    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('a') => KeyAction::Widget(WidgetEvent::Select(TrackId::A)),
        KeyCode::Char('b') => KeyAction::Widget(WidgetEvent::Select(TrackId::B)),
        KeyCode::Char(' ') | KeyCode::Char('p') => KeyAction::Widget(WidgetEvent::TogglePlayPause),
        KeyCode::Char('s') => KeyAction::Widget(WidgetEvent::Stop),
        KeyCode::Char('h') | KeyCode::Left => KeyAction::SeekBy(-step),
        KeyCode::Char('l') | KeyCode::Right => KeyAction::SeekBy(step),
        KeyCode::Char(c @ '0'..='9') => {
            let tenths = c.to_digit(10).unwrap_or(0);
            KeyAction::Widget(WidgetEvent::Seek(f64::from(tenths) / 10.0))
        }
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => KeyAction::FocusNext,
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => KeyAction::FocusPrev,
        _ => return None,
    };
    Some(action)
}

/// Apply a key action to the page. Returns `true` when shutdown is requested.
pub(super) fn apply_key<M: Media>(action: KeyAction, app: &mut App<M>) -> bool {
    match action {
        KeyAction::Widget(event) => {
            app.dispatch_focused(event);
        }
        KeyAction::SeekBy(delta) => {
            app.seek_focused_by(delta);
        }
        KeyAction::FocusNext => app.focus_next(),
        KeyAction::FocusPrev => app.focus_prev(),
        KeyAction::Quit => return true,
    }
    false
}

/// Left clicks press the control under the cursor and focus its widget.
pub(super) fn handle_mouse_event<M: Media>(mouse: MouseEvent, hits: &HitMap, app: &mut App<M>) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    match hits.resolve(mouse.column, mouse.row) {
        Some((id, event)) => {
            app.focus(id);
            app.dispatch(id, event);
        }
        None => debug!(column = mouse.column, row = mouse.row, "click outside any control"),
    }
}

/// Main terminal event loop: drains media signals, refreshes progress,
/// draws and handles input. Returns `Ok(())` when shutdown is requested.
pub fn run<M: Media>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<M>,
    signals: &Receiver<MediaSignal>,
) -> Result<(), Box<dyn std::error::Error>> {
    let refresh = Duration::from_millis(settings.ui.refresh_ms);
    let mut hits = HitMap::default();

    loop {
        while let Ok(signal) = signals.try_recv() {
            app.on_media_signal(signal);
        }
        app.tick();

        terminal.draw(|f| ui::draw(f, app, &settings.ui, &settings.controls, &mut hits))?;

        if event::poll(refresh)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let Some(action) = map_key(key, &settings.controls) else {
                        continue;
                    };
                    if apply_key(action, app) {
                        info!("quit requested");
                        app.stop_all();
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, &hits, app),
                _ => {}
            }
        }
    }
}
