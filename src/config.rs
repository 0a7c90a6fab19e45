//! Configuration loader and schema types.
//!
//! This module exposes the settings schema, the validated per-widget
//! configuration and helpers to load configuration from disk.

mod load;
mod schema;
mod widget;

pub use schema::*;
pub use widget::*;
