//! Backend services.
//!
//! # Services
//!
//! - [`supabase`] - Inserts into the `problem_submissions` table

pub mod supabase;

pub use supabase::*;
