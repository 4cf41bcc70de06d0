//! # Portal Core - problem statement model and submission workflow
//!
//! Shared by the Leptos frontend (wasm32) and the `portal` CLI (native).
//! Nothing in here touches the DOM or a specific HTTP client: the remote
//! table is reached through the [`SubmissionStore`] trait.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌──────────────┐
//! │ ProblemForm │────▶│  Validation │────▶│    Latch    │────▶│ Store insert │
//! │ (raw input) │     │ (per field) │     │ (one flight)│     │ (PostgREST)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └──────────────┘
//!                                                                    │
//!                                                   Outcome ──▶ Notification
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Validation, store and option parsing errors
//! - [`models`] - Form state, persisted record, option sets
//! - [`validation`] - Field rules and record resolution
//! - [`latch`] - Single-flight submitting flag
//! - [`store`] - Remote store trait and PostgREST request shape
//! - [`notification`] - User-facing outcome messages
//! - [`workflow`] - The submit operation tying it all together

pub mod error;
pub mod models;

pub mod validation;

pub mod latch;
pub mod notification;
pub mod store;
pub mod workflow;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{ParseOptionError, StoreError, ValidationError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Affiliation, Category, Field, ProblemForm, ProblemSubmission};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{is_valid_email, validate, validate_fields, FieldErrors};

// =============================================================================
// Re-exports - Workflow
// =============================================================================

pub use latch::{Latch, LatchGuard};
pub use notification::{Notification, Severity};
pub use store::{SubmissionStore, SupabaseConfig, SUBMISSIONS_TABLE};
pub use workflow::{Outcome, SubmissionWorkflow};
