//! HTTP module.
//!
//! Hosting for the frontend bundle. There is no API surface: the
//! browser inserts into Supabase directly.

pub mod server;

pub use server::{router, serve, start_server};
