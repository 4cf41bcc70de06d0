//! Domain models for problem statement submissions.
//!
//! - [`ProblemForm`] - Raw values as typed into the form (camelCase keys)
//! - [`ProblemSubmission`] - The validated record, keyed by table column
//! - [`Affiliation`] / [`Category`] - The fixed option sets
//! - [`Field`] - Identifies a form field for per-field messages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseOptionError;

// =============================================================================
// Option Sets
// =============================================================================

/// Who is submitting the problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Affiliation {
    #[serde(rename = "TCS Employee")]
    TcsEmployee,
    #[serde(rename = "DUK")]
    Duk,
    #[serde(rename = "Academic Researcher")]
    AcademicResearcher,
    #[serde(rename = "Industry Professional")]
    IndustryProfessional,
    #[serde(rename = "Startup/Entrepreneur")]
    StartupEntrepreneur,
}

impl Affiliation {
    /// Every option, in display order.
    pub const ALL: [Affiliation; 5] = [
        Affiliation::TcsEmployee,
        Affiliation::Duk,
        Affiliation::AcademicResearcher,
        Affiliation::IndustryProfessional,
        Affiliation::StartupEntrepreneur,
    ];

    /// Label shown in the select and stored in the `affiliation` column.
    pub fn label(&self) -> &'static str {
        match self {
            Affiliation::TcsEmployee => "TCS Employee",
            Affiliation::Duk => "DUK",
            Affiliation::AcademicResearcher => "Academic Researcher",
            Affiliation::IndustryProfessional => "Industry Professional",
            Affiliation::StartupEntrepreneur => "Startup/Entrepreneur",
        }
    }
}

impl fmt::Display for Affiliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Affiliation {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Affiliation::ALL
            .into_iter()
            .find(|a| a.label() == s)
            .ok_or_else(|| ParseOptionError {
                kind: "affiliation",
                value: s.to_string(),
            })
    }
}

/// Problem category. `Other` is never stored as-is: the custom
/// category typed by the user replaces it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "AI/Machine Learning")]
    MachineLearning,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Computer Vision")]
    ComputerVision,
    #[serde(rename = "Natural Language Processing")]
    NaturalLanguageProcessing,
    #[serde(rename = "IoT/Edge Computing")]
    EdgeComputing,
    #[serde(rename = "Robotics")]
    Robotics,
    #[serde(rename = "Blockchain")]
    Blockchain,
    #[serde(rename = "Digital Transformation")]
    DigitalTransformation,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// Every option, in display order.
    pub const ALL: [Category; 9] = [
        Category::MachineLearning,
        Category::DataScience,
        Category::ComputerVision,
        Category::NaturalLanguageProcessing,
        Category::EdgeComputing,
        Category::Robotics,
        Category::Blockchain,
        Category::DigitalTransformation,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::MachineLearning => "AI/Machine Learning",
            Category::DataScience => "Data Science",
            Category::ComputerVision => "Computer Vision",
            Category::NaturalLanguageProcessing => "Natural Language Processing",
            Category::EdgeComputing => "IoT/Edge Computing",
            Category::Robotics => "Robotics",
            Category::Blockchain => "Blockchain",
            Category::DigitalTransformation => "Digital Transformation",
            Category::Other => "Other",
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| ParseOptionError {
                kind: "category",
                value: s.to_string(),
            })
    }
}

// =============================================================================
// Form Fields
// =============================================================================

/// A single input of the submission form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Affiliation,
    ContactEmail,
    ProblemTitle,
    ProblemDescription,
    Category,
    CustomCategory,
    AdditionalFilesLinks,
}

impl Field {
    /// Client-side key, as used in form JSON.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Affiliation => "affiliation",
            Field::ContactEmail => "contactEmail",
            Field::ProblemTitle => "problemTitle",
            Field::ProblemDescription => "problemDescription",
            Field::Category => "category",
            Field::CustomCategory => "customCategory",
            Field::AdditionalFilesLinks => "additionalFilesLinks",
        }
    }

    /// Input label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name / Team Name",
            Field::Affiliation => "Affiliation",
            Field::ContactEmail => "Contact Email",
            Field::ProblemTitle => "Problem Title",
            Field::ProblemDescription => "Problem Description",
            Field::Category => "Category",
            Field::CustomCategory => "Custom Category",
            Field::AdditionalFilesLinks => "Additional file links",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::AdditionalFilesLinks)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// =============================================================================
// Form State
// =============================================================================

/// Values as entered, before any validation.
///
/// Every field defaults to the empty string; [`ProblemForm::clear`]
/// brings the form back to that state after a successful insert.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProblemForm {
    pub name: String,
    pub affiliation: String,
    pub contact_email: String,
    pub problem_title: String,
    pub problem_description: String,
    pub category: String,
    pub custom_category: String,
    pub additional_files_links: String,
}

impl ProblemForm {
    /// Whether the custom category input is part of the form right now.
    pub fn shows_custom_category(&self) -> bool {
        self.category == Category::Other.label()
    }

    /// The category that would be stored for the current values.
    pub fn effective_category(&self) -> &str {
        if self.shows_custom_category() {
            self.custom_category.trim()
        } else {
            &self.category
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Affiliation => &self.affiliation,
            Field::ContactEmail => &self.contact_email,
            Field::ProblemTitle => &self.problem_title,
            Field::ProblemDescription => &self.problem_description,
            Field::Category => &self.category,
            Field::CustomCategory => &self.custom_category,
            Field::AdditionalFilesLinks => &self.additional_files_links,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Affiliation => self.affiliation = value,
            Field::ContactEmail => self.contact_email = value,
            Field::ProblemTitle => self.problem_title = value,
            Field::ProblemDescription => self.problem_description = value,
            Field::Category => self.category = value,
            Field::CustomCategory => self.custom_category = value,
            Field::AdditionalFilesLinks => self.additional_files_links = value,
        }
    }

    /// Reset every field to its empty default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// =============================================================================
// Persisted Record
// =============================================================================

/// One row of the `problem_submissions` table.
///
/// Serializes with the table's snake_case column names. An empty links
/// field is sent as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemSubmission {
    pub name: String,
    pub affiliation: Affiliation,
    pub contact_email: String,
    pub problem_title: String,
    pub problem_description: String,
    pub category: String,
    pub additional_files_links: Option<String>,
}
