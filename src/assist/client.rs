use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;

use super::types::{GenerateRequest, GenerateResponse, RankRequest, RankResponse, RankedListing};
use crate::listing::Listing;

/// Upper bound on ids returned by [`AssistClient::rank`].
pub const MAX_RECOMMENDATIONS: usize = 2;

#[derive(Debug, Error)]
pub enum AssistError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Server returned error status {status}: {body}")]
    ServerError { status: u16, body: String },
}

/// Blocking HTTP client for the text-assist server.
pub struct AssistClient {
    http: Client,
    endpoint: String,
}

impl AssistClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_timeout(endpoint, Duration::from_secs(30))
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Free-form text generation.
    pub fn generate(&self, prompt: &str) -> Result<String, AssistError> {
        let response = self
            .http
            .post(format!("{}/generate", self.endpoint))
            .json(&GenerateRequest {
                prompt: prompt.to_string(),
            })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AssistError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json()?;
        Ok(parsed.text)
    }

    /// Rank listings for a candidate. Returns at most
    /// [`MAX_RECOMMENDATIONS`] listing ids, best match first.
    pub fn rank(&self, candidate: &str, listings: &[Listing]) -> Result<Vec<String>, AssistError> {
        let request = RankRequest {
            candidate: candidate.to_string(),
            listings: listings
                .iter()
                .map(|l| RankedListing {
                    id: l.id.clone(),
                    summary: format!("{} at {}", l.title, l.organization),
                })
                .collect(),
        };

        let response = self
            .http
            .post(format!("{}/rank", self.endpoint))
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AssistError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: RankResponse = response.json()?;
        Ok(cap_recommendations(parsed.recommended_ids))
    }
}

pub(super) fn cap_recommendations(mut ids: Vec<String>) -> Vec<String> {
    ids.truncate(MAX_RECOMMENDATIONS);
    ids
}
