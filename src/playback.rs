//! Playback core: the state machine, the aligned track pair, readiness
//! gating and progress reporting.

mod pair;
mod progress;
mod readiness;
mod state;

pub use pair::TrackPair;
pub use progress::{ProgressReporter, ratio};
pub use readiness::{Readiness, ReadinessGate};
pub use state::*;

#[cfg(test)]
mod tests;
