//! The submit operation.
//!
//! ```text
//! submit(form)
//!   ├─ latch held?            ──▶ Busy        (ignored, no notification)
//!   ├─ base fields invalid?   ──▶ Invalid     (no network call)
//!   ├─ "Other" w/o custom?    ──▶ Invalid     (no network call)
//!   ├─ take latch
//!   ├─ store.insert(record)
//!   │    ├─ Ok   ──▶ clear form, Submitted
//!   │    └─ Err  ──▶ keep form,  Failed
//!   └─ latch released on guard drop
//! ```

use log::{debug, error, info, warn};

use crate::error::{StoreError, ValidationError};
use crate::latch::Latch;
use crate::models::{ProblemForm, ProblemSubmission};
use crate::notification::Notification;
use crate::store::SubmissionStore;
use crate::validation::{validate, FieldErrors};

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Local validation failed; nothing was sent.
    Invalid(ValidationError),
    /// The store accepted the record; the form was cleared.
    Submitted(ProblemSubmission),
    /// The insert failed; the form was left untouched.
    Failed(StoreError),
    /// Another submission was still in flight; this attempt was dropped.
    Busy,
}

impl Outcome {
    /// The notification for this outcome. `Busy` has none.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            Outcome::Invalid(ValidationError::Fields(_)) => Some(Notification::validation_failed()),
            Outcome::Invalid(ValidationError::CustomCategory(_)) => {
                Some(Notification::custom_category_missing())
            }
            Outcome::Submitted(_) => Some(Notification::submitted()),
            Outcome::Failed(_) => Some(Notification::submission_failed()),
            Outcome::Busy => None,
        }
    }

    /// Per-field messages when validation failed.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Outcome::Invalid(err) => Some(err.field_errors()),
            _ => None,
        }
    }

    /// What the inline messages should become after this attempt.
    ///
    /// `None` for `Busy`: a dropped attempt leaves the messages on screen
    /// alone. Every other outcome replaces them, clearing on success or
    /// store failure.
    pub fn inline_errors(&self) -> Option<FieldErrors> {
        match self {
            Outcome::Busy => None,
            other => Some(other.field_errors().cloned().unwrap_or_default()),
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, Outcome::Submitted(_))
    }
}

/// One form's submission pipeline: a store plus the submitting latch.
#[derive(Debug)]
pub struct SubmissionWorkflow<S> {
    store: S,
    latch: Latch,
}

impl<S: SubmissionStore> SubmissionWorkflow<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            latch: Latch::new(),
        }
    }

    /// Observe the submitting state (true while an insert is in flight).
    pub fn on_submitting_change(mut self, f: impl Fn(bool) + 'static) -> Self {
        self.latch = Latch::new().with_listener(f);
        self
    }

    pub fn is_submitting(&self) -> bool {
        self.latch.is_held()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate, insert and report.
    ///
    /// On success `form` is reset to its empty defaults; on any other
    /// outcome it is left exactly as it was.
    pub async fn submit(&self, form: &mut ProblemForm) -> Outcome {
        if self.latch.is_held() {
            debug!("Submission already in flight, ignoring");
            return Outcome::Busy;
        }

        let record = match validate(form) {
            Ok(record) => record,
            Err(err) => {
                warn!("⚠️  {}", err);
                return Outcome::Invalid(err);
            }
        };

        let Some(_guard) = self.latch.try_acquire() else {
            return Outcome::Busy;
        };

        info!("📤 Submitting problem: {}", record.problem_title);

        match self.store.insert(&record).await {
            Ok(()) => {
                info!("✅ Submission stored ({})", record.category);
                form.clear();
                Outcome::Submitted(record)
            }
            Err(err) => {
                error!("❌ Submission failed: {}", err);
                Outcome::Failed(err)
            }
        }
    }
}
