mod app;
mod audio;
mod config;
mod error;
mod playback;
mod presenter;
mod runtime;
mod ui;
mod widget;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
