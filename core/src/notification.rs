//! User-facing outcome messages.
//!
//! Each terminal outcome of a submit attempt maps to exactly one
//! [`Notification`]. How it is shown (toast, terminal line) is up to
//! the caller.

use serde::{Deserialize, Serialize};

/// Visual weight of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Normal,
    Destructive,
}

impl Severity {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Normal => "toast-normal",
            Severity::Destructive => "toast-destructive",
        }
    }

    /// Get emoji prefix for terminal output.
    pub fn emoji(&self) -> &'static str {
        match self {
            Severity::Normal => "✅",
            Severity::Destructive => "❌",
        }
    }
}

/// A transient message with a title, a description and a severity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub severity: Severity,
}

impl Notification {
    pub fn normal(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Normal,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    /// Base fields failed validation.
    pub fn validation_failed() -> Self {
        Self::destructive(
            "Validation Error",
            "Please check all required fields and try again.",
        )
    }

    /// "Other" was chosen without a usable custom category.
    pub fn custom_category_missing() -> Self {
        Self::destructive(
            "Validation Error",
            "Please enter a custom category (at least 2 characters).",
        )
    }

    /// The record was stored.
    pub fn submitted() -> Self {
        Self::normal(
            "Problem Submitted Successfully!",
            "Thank you for your submission. Our team will review it and get back to you soon.",
        )
    }

    /// The insert failed. The underlying error is logged, not shown.
    pub fn submission_failed() -> Self {
        Self::destructive(
            "Submission Failed",
            "There was an error submitting your problem. Please try again.",
        )
    }

    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}
