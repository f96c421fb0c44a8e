//! reqwest-based client for the onboarding API
//!
//! Two collaborators live behind one base URL: the corporation registry
//! lookup (`GET /corporation-number/{number}`) and the profile submission
//! endpoint (`POST /profile-details`).

use super::{ApiError, OnboardingApi, ProfileDetails};
use crate::config::OnboardConfig;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Default API base URL
const DEFAULT_ADDRESS: &str = "https://fe-hometask-api.qa.vault.tryvault.com";

/// Default per-request timeout in seconds, bounding worst-case latency of a
/// submit attempt
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Error body shape the API uses for rejections
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for the onboarding API
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// Base URL resolution: `ONBOARD_API_ADDRESS` env var, then the config
    /// file, then the built-in default.
    pub fn new(config: &OnboardConfig) -> Result<Self> {
        let base_url = std::env::var("ONBOARD_API_ADDRESS")
            .ok()
            .or_else(|| config.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        let timeout = Duration::from_secs(
            config.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        );
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    /// Extract a human-readable detail from a rejection body
    fn rejection_detail(body: &str) -> String {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed.message,
            Err(_) if !body.trim().is_empty() => body.trim().to_string(),
            Err(_) => "no detail provided".to_string(),
        }
    }
}

#[async_trait]
impl OnboardingApi for ApiClient {
    async fn lookup_corporation_number(&self, number: &str) -> Result<bool, ApiError> {
        let url = format!("{}/corporation-number/{}", self.base_url, number);
        tracing::debug!(%url, "looking up corporation number");

        let response = self.client.get(&url).send().await?;
        let valid = response.status().is_success();
        if !valid {
            tracing::debug!(status = %response.status(), "corporation number rejected");
        }
        Ok(valid)
    }

    async fn submit_profile(&self, profile: &ProfileDetails) -> Result<(), ApiError> {
        let url = format!("{}/profile-details", self.base_url);
        tracing::debug!(%url, "submitting profile");

        let response = self.client.post(&url).json(profile).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let detail = Self::rejection_detail(&body);
        tracing::warn!(%status, %detail, "profile submission rejected");
        Err(ApiError::Rejected { status, detail })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_detail_prefers_message_field() {
        let detail = ApiClient::rejection_detail(r#"{"message": "Invalid phone number"}"#);
        assert_eq!(detail, "Invalid phone number");
    }

    #[test]
    fn test_rejection_detail_falls_back_to_raw_body() {
        assert_eq!(ApiClient::rejection_detail("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_rejection_detail_handles_empty_body() {
        assert_eq!(ApiClient::rejection_detail(""), "no detail provided");
        assert_eq!(ApiClient::rejection_detail("  "), "no detail provided");
    }

    #[test]
    fn test_client_uses_config_base_url() {
        let config = OnboardConfig {
            api_base_url: Some("http://localhost:9999".to_string()),
            ..Default::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url, "http://localhost:9999");
    }
}
