//! Application module: exposes the page model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds every widget on the
//! page, the entries that failed validation and the keyboard focus.

mod model;

pub use model::*;
