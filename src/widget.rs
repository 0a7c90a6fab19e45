//! A/B widget controllers and the collaborator traits they depend on.

mod controller;
mod environment;

pub use controller::Widget;
pub use environment::*;
