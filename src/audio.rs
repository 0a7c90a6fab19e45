//! Audio layer: media collaborator traits and their `rodio` backend.
//!
//! The widget core only sees `Media`/`MediaFactory`. `RodioBackend` plays
//! local files through the default output device and reports buffering
//! through `MediaSignal`s.

mod backend;
mod loader;
mod sink;
mod types;

#[cfg(test)]
pub mod testing;

pub use backend::{RodioBackend, RodioTrack};
pub use types::*;
