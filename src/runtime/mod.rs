use std::env;
use std::sync::mpsc;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::audio::{MediaSignal, RodioBackend};

mod event_loop;
mod logging;
mod settings;
mod startup;


pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, settings_warning) = settings::load_settings();
    let log_path = logging::init(&settings.log);
    if let Some(msg) = &settings_warning {
        warn!("{msg}");
        if log_path.is_none() {
            eprintln!("abswitch: {msg}");
        }
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let entries = startup::widget_entries(&settings, &args);
    if entries.is_empty() {
        return Err("no widgets configured; pass BEFORE AFTER file pairs or add [[widgets]] to the config".into());
    }

    let platform = startup::TerminalPlatform::detect(&settings.platform);
    let (signal_tx, signal_rx) = mpsc::channel::<MediaSignal>();
    // The backend owns the output stream; it must outlive the page.
    let mut backend = RodioBackend::open(signal_tx)?;
    let mut app = App::build(&entries, &mut backend, &platform);
    info!(
        widgets = app.widgets().len(),
        rejected = app.rejected().len(),
        "page built"
    );
    if !app.has_widgets() {
        let reasons: Vec<String> = app.rejected().iter().map(|r| r.reason.clone()).collect();
        return Err(format!("no usable widgets: {}", reasons.join("; ")).into());
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &signal_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    run_result
}
