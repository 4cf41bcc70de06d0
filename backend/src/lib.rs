//! # Portal - hosting and terminal submission for the AI Club x DUK portal
//!
//! The browser app in `frontend/` does the real work. This crate adds the
//! native pieces around it:
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────────────┐
//! │ portal serve │────▶│ frontend/dist │────▶│ index.html fallback  │
//! └──────────────┘     └───────────────┘     └──────────────────────┘
//!
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────────────┐
//! │ portal submit│────▶│ portal_core   │────▶│ SupabaseStore        │
//! │ (form JSON)  │     │ workflow      │     │ (reqwest, PostgREST) │
//! └──────────────┘     └───────────────┘     └──────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Configuration and server errors
//! - [`config`] - Environment configuration
//! - [`form`] - Form files and command-line overrides
//! - [`store`] - reqwest implementation of the submission store
//! - [`api`] - Static host

pub mod config;
pub mod error;
pub mod form;

pub mod store;

pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{supabase_from_env, ServeConfig};
pub use error::{ConfigError, FormError, ServerError};
pub use form::{check_form, load_form, resolve_form, FormArgs};
pub use store::SupabaseStore;

// Server
pub mod server {
    pub use crate::api::server::{router, serve, start_server};
}
