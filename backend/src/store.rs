//! reqwest-backed access to the submissions table.

use portal_core::store::{insert_body, rejection};
use portal_core::{ProblemSubmission, StoreError, SubmissionStore, SupabaseConfig};
use tracing::debug;

/// Supabase table client for native builds.
#[derive(Clone, Debug)]
pub struct SupabaseStore {
    client: reqwest::Client,
    config: SupabaseConfig,
}

impl SupabaseStore {
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }
}

impl SubmissionStore for SupabaseStore {
    async fn insert(&self, record: &ProblemSubmission) -> Result<(), StoreError> {
        let url = self.config.insert_url();
        let body = insert_body(record)?;

        debug!("POST {}", url);

        let mut request = self.client.post(&url).body(body);
        for (name, value) in self.config.insert_headers() {
            request = request.header(name, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        Err(rejection(status.as_u16(), &text))
    }
}
