//! Remote submissions table.
//!
//! The table lives behind Supabase's PostgREST interface. This module
//! owns the request shape (URL, headers, error body) so the gloo-net
//! store in the frontend and the reqwest store in the CLI send exactly
//! the same insert.
//!
//! | Method | Path                               | Body                  |
//! |--------|------------------------------------|-----------------------|
//! | POST   | `/rest/v1/problem_submissions`     | one record, snake_case|

use serde::Deserialize;

use crate::error::{StoreError, StoreResult};
use crate::models::ProblemSubmission;

/// Table the records are inserted into.
pub const SUBMISSIONS_TABLE: &str = "problem_submissions";

/// Insert-only access to the submissions table.
///
/// Futures are not required to be `Send`: the browser store runs on the
/// single wasm thread.
#[allow(async_fn_in_trait)]
pub trait SubmissionStore {
    /// Persist one record. Either the whole record is stored or nothing is.
    async fn insert(&self, record: &ProblemSubmission) -> StoreResult<()>;
}

// =============================================================================
// PostgREST request shape
// =============================================================================

/// Project URL and public (anon) key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupabaseConfig {
    url: String,
    anon_key: String,
}

impl SupabaseConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// REST endpoint of a table.
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }

    /// Endpoint the submission insert is posted to.
    pub fn insert_url(&self) -> String {
        self.table_url(SUBMISSIONS_TABLE)
    }

    /// Headers for an insert that does not need the row echoed back.
    pub fn insert_headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("apikey", self.anon_key.clone()),
            ("Authorization", format!("Bearer {}", self.anon_key)),
            ("Content-Type", "application/json".to_string()),
            ("Prefer", "return=minimal".to_string()),
        ]
    }
}

/// Error body returned by PostgREST on a failed request.
#[derive(Debug, Clone, Deserialize)]
pub struct PostgrestError {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl PostgrestError {
    /// `message [code] details (hint: ...)`, skipping absent parts.
    fn summary(&self) -> String {
        let mut summary = self.message.clone();
        if let Some(code) = &self.code {
            summary.push_str(&format!(" [{}]", code));
        }
        if let Some(details) = &self.details {
            summary.push(' ');
            summary.push_str(details);
        }
        if let Some(hint) = &self.hint {
            summary.push_str(&format!(" (hint: {})", hint));
        }
        summary
    }
}

/// Turn a non-success response into a [`StoreError::Rejected`].
///
/// Falls back to the raw body, then to the bare status, when the body
/// is not a PostgREST error object.
pub fn rejection(status: u16, body: &str) -> StoreError {
    let message = match serde_json::from_str::<PostgrestError>(body) {
        Ok(err) => err.summary(),
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => format!("HTTP {}", status),
    };
    StoreError::Rejected { status, message }
}

/// Serialize a record as the insert body.
pub fn insert_body(record: &ProblemSubmission) -> StoreResult<String> {
    serde_json::to_string(record).map_err(|e| StoreError::Request(e.to_string()))
}
