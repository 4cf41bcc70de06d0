//! Field rules for the submission form.
//!
//! Validation runs in two stages, matching the two failure notifications:
//!
//! 1. [`validate_fields`] - length minimums, email syntax, option membership
//! 2. custom category - only when the category is "Other"
//!
//! [`validate`] runs both and, on success, resolves the record that will
//! be inserted (column mapping, effective category, empty links as `None`).
//!
//! Lengths are counted in characters, not bytes.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::error::ValidationError;
use crate::models::{Affiliation, Category, Field, ProblemForm, ProblemSubmission};

/// Minimum length of the name / team name.
pub const NAME_MIN_CHARS: usize = 2;

/// Minimum length of the problem title.
pub const TITLE_MIN_CHARS: usize = 5;

/// Minimum length of the problem description.
pub const DESCRIPTION_MIN_CHARS: usize = 20;

/// Minimum length of the custom category, after trimming.
pub const CUSTOM_CATEGORY_MIN_CHARS: usize = 2;

// Local part: no leading, trailing or doubled dots, and it cannot end in
// an apostrophe. Domain labels start alphanumeric and may end in '-'.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:[A-Za-z0-9_'+-]+\.)*[A-Za-z0-9_'+-]*[A-Za-z0-9_+-]@(?:[A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$",
    )
    .expect("email pattern is valid")
});

// =============================================================================
// Field Errors
// =============================================================================

/// Per-field messages, in form order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(Field, String)>);

impl FieldErrors {
    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.0.push((field, message.into()));
    }

    /// Drop the message for a field, e.g. once the user edits it.
    pub fn remove(&mut self, field: Field) {
        self.0.retain(|(f, _)| *f != field);
    }

    /// Message for one field, if it failed.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| msg.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.iter().map(|(f, _)| *f)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, msg)| (*f, msg.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, msg)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, msg)?;
        }
        Ok(())
    }
}

// =============================================================================
// Rules
// =============================================================================

/// Syntactic email check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Stage 1: every base field against its rule.
///
/// The custom category is not looked at here.
pub fn validate_fields(form: &ProblemForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if char_len(&form.name) < NAME_MIN_CHARS {
        errors.push(Field::Name, "Name must be at least 2 characters");
    }

    if form.affiliation.is_empty() {
        errors.push(Field::Affiliation, "Please select your affiliation");
    } else if form.affiliation.parse::<Affiliation>().is_err() {
        errors.push(Field::Affiliation, "Please select a valid affiliation");
    }

    if !is_valid_email(&form.contact_email) {
        errors.push(Field::ContactEmail, "Please enter a valid email");
    }

    if char_len(&form.problem_title) < TITLE_MIN_CHARS {
        errors.push(Field::ProblemTitle, "Problem title must be at least 5 characters");
    }

    if char_len(&form.problem_description) < DESCRIPTION_MIN_CHARS {
        errors.push(
            Field::ProblemDescription,
            "Problem description must be at least 20 characters",
        );
    }

    if form.category.is_empty() {
        errors.push(Field::Category, "Please select a category");
    } else if form.category.parse::<Category>().is_err() {
        errors.push(Field::Category, "Please select a valid category");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Stage 2: the custom category, required only for "Other".
fn validate_custom_category(form: &ProblemForm) -> Result<(), FieldErrors> {
    if !form.shows_custom_category() {
        return Ok(());
    }

    if char_len(form.custom_category.trim()) < CUSTOM_CATEGORY_MIN_CHARS {
        let mut errors = FieldErrors::default();
        errors.push(
            Field::CustomCategory,
            "Please enter a custom category (at least 2 characters)",
        );
        return Err(errors);
    }

    Ok(())
}

/// Validate the form and resolve the record to insert.
pub fn validate(form: &ProblemForm) -> Result<ProblemSubmission, ValidationError> {
    validate_fields(form).map_err(ValidationError::Fields)?;
    validate_custom_category(form).map_err(ValidationError::CustomCategory)?;

    let affiliation = form
        .affiliation
        .parse::<Affiliation>()
        .map_err(|e| {
            let mut errors = FieldErrors::default();
            errors.push(Field::Affiliation, e.to_string());
            ValidationError::Fields(errors)
        })?;

    let links = form.additional_files_links.trim();

    Ok(ProblemSubmission {
        name: form.name.clone(),
        affiliation,
        contact_email: form.contact_email.clone(),
        problem_title: form.problem_title.clone(),
        problem_description: form.problem_description.clone(),
        category: form.effective_category().to_string(),
        additional_files_links: if links.is_empty() {
            None
        } else {
            Some(form.additional_files_links.clone())
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ProblemForm {
        ProblemForm {
            name: "Jane Doe".into(),
            affiliation: "DUK".into(),
            contact_email: "jane@duk.ac.in".into(),
            problem_title: "Crop disease detection".into(),
            problem_description: "We need an on-device model to detect leaf blight from phone photos in low connectivity areas.".into(),
            category: "Computer Vision".into(),
            custom_category: String::new(),
            additional_files_links: String::new(),
        }
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("jane@duk.ac.in"));
        assert!(is_valid_email("first.last+ai@tcs.com"));
        assert!(is_valid_email("o'neil@example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("jane@duk"));
        assert!(!is_valid_email("@duk.ac.in"));
        assert!(!is_valid_email("jane..doe@duk.ac.in"));
        assert!(!is_valid_email(".jane@duk.ac.in"));
        assert!(!is_valid_email("jane@-duk.ac.in"));
        assert!(!is_valid_email(" jane@duk.ac.in"));
        assert!(!is_valid_email("jane.@duk.ac.in"));
    }

    #[test]
    fn test_email_edge_characters() {
        // apostrophe allowed inside the local part, not at its end
        assert!(is_valid_email("o'neil.k@duk.ac.in"));
        assert!(!is_valid_email("jane'@duk.ac.in"));
        assert!(is_valid_email("jane+@duk.ac.in"));
        // domain labels may end in a hyphen
        assert!(is_valid_email("jane@duk-.ac.in"));
        assert!(!is_valid_email("jane@duk.c"));
    }

    #[test]
    fn test_valid_form_passes() {
        let record = validate(&valid_form()).unwrap();
        assert_eq!(record.category, "Computer Vision");
        assert_eq!(record.affiliation, Affiliation::Duk);
        assert_eq!(record.additional_files_links, None);
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = validate_fields(&ProblemForm::default()).unwrap_err();
        let fields: Vec<Field> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![
                Field::Name,
                Field::Affiliation,
                Field::ContactEmail,
                Field::ProblemTitle,
                Field::ProblemDescription,
                Field::Category,
            ]
        );
    }

    #[test]
    fn test_length_boundaries() {
        let mut form = valid_form();
        form.name = "J".into();
        form.problem_title = "Crop".into();
        form.problem_description = "x".repeat(19);
        let errors = validate_fields(&form).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(Field::Name), Some("Name must be at least 2 characters"));

        form.name = "Jo".into();
        form.problem_title = "Crops".into();
        form.problem_description = "x".repeat(20);
        assert!(validate_fields(&form).is_ok());
    }

    #[test]
    fn test_lengths_count_characters() {
        let mut form = valid_form();
        // one char, two bytes
        form.name = "é".into();
        assert!(validate_fields(&form).unwrap_err().contains(Field::Name));
    }

    #[test]
    fn test_unknown_options_rejected() {
        let mut form = valid_form();
        form.affiliation = "Alien".into();
        form.category = "Quantum".into();
        let errors = validate_fields(&form).unwrap_err();
        assert!(errors.contains(Field::Affiliation));
        assert!(errors.contains(Field::Category));
    }

    #[test]
    fn test_other_requires_custom_category() {
        let mut form = valid_form();
        form.category = "Other".into();
        form.custom_category = " x ".into();
        match validate(&form) {
            Err(ValidationError::CustomCategory(errors)) => {
                assert!(errors.contains(Field::CustomCategory));
            }
            other => panic!("expected custom category error, got {:?}", other),
        }
    }

    #[test]
    fn test_base_fields_checked_before_custom_category() {
        let mut form = valid_form();
        form.name = String::new();
        form.category = "Other".into();
        assert!(matches!(validate(&form), Err(ValidationError::Fields(_))));
    }

    #[test]
    fn test_other_substitutes_custom_category() {
        let mut form = valid_form();
        form.category = "Other".into();
        form.custom_category = "  Edge AI ".into();
        let record = validate(&form).unwrap();
        assert_eq!(record.category, "Edge AI");
    }

    #[test]
    fn test_custom_category_ignored_unless_other() {
        let mut form = valid_form();
        form.custom_category = "Edge AI".into();
        assert_eq!(validate(&form).unwrap().category, "Computer Vision");
    }

    #[test]
    fn test_links_kept_verbatim_or_none() {
        let mut form = valid_form();
        form.additional_files_links = "   ".into();
        assert_eq!(validate(&form).unwrap().additional_files_links, None);

        form.additional_files_links = "https://drive.google.com/x".into();
        assert_eq!(
            validate(&form).unwrap().additional_files_links.as_deref(),
            Some("https://drive.google.com/x")
        );
    }

    #[test]
    fn test_field_errors_display() {
        let mut errors = FieldErrors::default();
        errors.push(Field::Name, "too short");
        errors.push(Field::ContactEmail, "bad");
        assert_eq!(errors.to_string(), "name: too short; contactEmail: bad");

        errors.remove(Field::Name);
        assert_eq!(errors.get(Field::Name), None);
        assert_eq!(errors.len(), 1);
    }
}
