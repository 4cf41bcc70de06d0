//! gloo-net access to the submissions table.
//!
//! Same request as the CLI store: one `POST` to
//! `/rest/v1/problem_submissions` with the anon key, no row echoed back.

use gloo_net::http::Request;
use portal_core::store::{insert_body, rejection};
use portal_core::{ProblemSubmission, StoreError, SubmissionStore, SupabaseConfig};

/// Supabase table client for the browser.
#[derive(Clone, Debug)]
pub struct SupabaseStore {
    config: SupabaseConfig,
}

impl SupabaseStore {
    pub fn new(config: SupabaseConfig) -> Self {
        Self { config }
    }
}

impl SubmissionStore for SupabaseStore {
    async fn insert(&self, record: &ProblemSubmission) -> Result<(), StoreError> {
        let url = self.config.insert_url();
        let body = insert_body(record)?;

        let mut builder = Request::post(&url);
        for (name, value) in self.config.insert_headers() {
            builder = builder.header(name, &value);
        }

        let request = builder
            .body(body)
            .map_err(|e| StoreError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        Err(rejection(status, &text))
    }
}
