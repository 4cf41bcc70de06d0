//! Error types for the portal CLI and static host.
//!
//! - [`ConfigError`] - Missing or malformed environment configuration
//! - [`ServerError`] - Static hosting failures
//! - [`FormError`] - Reading or checking a form file
//!
//! Store and validation errors come from `portal_core` unchanged.

use std::path::PathBuf;

use portal_core::ValidationError;
use thiserror::Error;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required variable not set.
    #[error("Missing {0} environment variable")]
    MissingVar(&'static str),

    /// Variable set but unusable.
    #[error("Invalid value for {key}: '{value}' ({message})")]
    InvalidVar {
        key: &'static str,
        value: String,
        message: String,
    },
}

// =============================================================================
// Server Errors
// =============================================================================

/// Static hosting errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The bundle directory has no `index.html` to fall back to.
    #[error("No index.html in {0} (build the frontend with `trunk build` first)")]
    MissingIndex(PathBuf),

    /// Bind or accept failure.
    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Form Errors
// =============================================================================

/// Errors while loading or checking a form file.
#[derive(Debug, Error)]
pub enum FormError {
    /// The file could not be read.
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a form JSON object.
    #[error("Invalid form JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The form failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Result type for form files.
pub type FormResult<T> = Result<T, FormError>;
