//! Form input for the `submit` and `check` commands.
//!
//! A form starts from an optional JSON file (web form keys) and is then
//! overridden field by field from the command line. A flag that is
//! given replaces the file value; a flag that is absent leaves it alone.

use std::fs;
use std::path::Path;

use clap::Args;
use portal_core::{validate, Field, ProblemForm, ProblemSubmission};

use crate::error::{FormError, FormResult};

/// Individual form fields on the command line.
#[derive(Args, Debug, Default)]
pub struct FormArgs {
    /// Name or team name
    #[arg(long)]
    pub name: Option<String>,

    /// One of the affiliation options
    #[arg(long)]
    pub affiliation: Option<String>,

    /// Contact email
    #[arg(long)]
    pub email: Option<String>,

    /// Problem title
    #[arg(long)]
    pub title: Option<String>,

    /// Problem description
    #[arg(long)]
    pub description: Option<String>,

    /// One of the category options
    #[arg(long)]
    pub category: Option<String>,

    /// Custom category, used when category is "Other"
    #[arg(long)]
    pub custom_category: Option<String>,

    /// Links to documents or datasets
    #[arg(long)]
    pub links: Option<String>,
}

impl FormArgs {
    /// Write every given flag into the form.
    pub fn apply(self, form: &mut ProblemForm) {
        let values = [
            (Field::Name, self.name),
            (Field::Affiliation, self.affiliation),
            (Field::ContactEmail, self.email),
            (Field::ProblemTitle, self.title),
            (Field::ProblemDescription, self.description),
            (Field::Category, self.category),
            (Field::CustomCategory, self.custom_category),
            (Field::AdditionalFilesLinks, self.links),
        ];
        for (field, value) in values {
            if let Some(value) = value {
                form.set(field, value);
            }
        }
    }
}

/// Read a form file. Missing keys stay empty.
pub fn load_form(path: &Path) -> FormResult<ProblemForm> {
    let content = fs::read_to_string(path).map_err(|source| FormError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| FormError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// The form `submit` sends: the file, if any, with the flags on top.
pub fn resolve_form(file: Option<&Path>, fields: FormArgs) -> FormResult<ProblemForm> {
    let mut form = match file {
        Some(path) => load_form(path)?,
        None => ProblemForm::default(),
    };
    fields.apply(&mut form);
    Ok(form)
}

/// Validate a form file and return the record that would be stored.
pub fn check_form(path: &Path) -> FormResult<ProblemSubmission> {
    let form = load_form(path)?;
    Ok(validate(&form)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::{Affiliation, ValidationError};
    use std::path::PathBuf;
    use tempfile::TempDir;

    const JANE: &str = r#"{
        "name": "Jane Doe",
        "affiliation": "DUK",
        "contactEmail": "jane@duk.ac.in",
        "problemTitle": "Crop disease detection",
        "problemDescription": "We need an on-device model to detect leaf blight from phone photos.",
        "category": "Computer Vision"
    }"#;

    fn form_file(content: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("form.json");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_file_only() {
        let (_dir, path) = form_file(JANE);
        let form = resolve_form(Some(&path), FormArgs::default()).unwrap();
        assert_eq!(form.name, "Jane Doe");
        assert_eq!(form.category, "Computer Vision");
        assert_eq!(form.custom_category, "");
        assert_eq!(form.additional_files_links, "");
    }

    #[test]
    fn test_flags_override_file_values() {
        let (_dir, path) = form_file(JANE);
        let fields = FormArgs {
            title: Some("Leaf blight detection".into()),
            category: Some("Other".into()),
            custom_category: Some("Edge AI".into()),
            ..Default::default()
        };

        let form = resolve_form(Some(&path), fields).unwrap();
        assert_eq!(form.problem_title, "Leaf blight detection");
        assert_eq!(form.category, "Other");
        assert_eq!(form.custom_category, "Edge AI");
        // absent flags keep what the file says
        assert_eq!(form.name, "Jane Doe");
        assert_eq!(form.contact_email, "jane@duk.ac.in");
    }

    #[test]
    fn test_flags_without_file() {
        let fields = FormArgs {
            name: Some("Team Vision".into()),
            ..Default::default()
        };
        let form = resolve_form(None, fields).unwrap();
        assert_eq!(form.name, "Team Vision");
        assert_eq!(form.affiliation, "");
    }

    #[test]
    fn test_check_valid_file() {
        let (_dir, path) = form_file(JANE);
        let record = check_form(&path).unwrap();
        assert_eq!(record.affiliation, Affiliation::Duk);
        assert_eq!(record.additional_files_links, None);
    }

    #[test]
    fn test_check_invalid_file_is_err() {
        let (_dir, path) = form_file(r#"{ "name": "J", "contactEmail": "not-an-email" }"#);
        match check_form(&path) {
            Err(FormError::Invalid(ValidationError::Fields(errors))) => {
                assert!(errors.contains(Field::Name));
                assert!(errors.contains(Field::ContactEmail));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_unreadable_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(load_form(&missing), Err(FormError::Read { .. })));

        let (_dir, path) = form_file("not json");
        assert!(matches!(load_form(&path), Err(FormError::Parse { .. })));
    }
}
