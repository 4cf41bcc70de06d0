//! Routed pages.

mod home;
mod submit;

pub use home::*;
pub use submit::*;
