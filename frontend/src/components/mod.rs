//! UI components for the portal.
//!
//! # Layout Components
//! - [`MinimalNav`] - Logos and the "Submit Problem" call to action
//! - [`Hero`] - Landing title, tagline and feature cards
//!
//! # Feature Components
//! - [`ProblemSubmissionForm`] - The problem statement form
//! - [`ToastViewport`] - Transient notifications (see [`use_toaster`])

mod hero;
mod nav;
mod submission_form;
mod toast;

pub use hero::*;
pub use nav::*;
pub use submission_form::*;
pub use toast::*;
