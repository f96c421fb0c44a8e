//! HTTP client for the onboarding API

mod client;
mod traits;

pub use client::ApiClient;
pub use traits::OnboardingApi;

#[cfg(test)]
pub use traits::MockOnboardingApi;

use serde::Serialize;
use thiserror::Error;

/// Request body for profile submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetails {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub corporation_number: String,
}

/// Errors from the onboarding API collaborators
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connect failure, timeout, ...)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server responded with {status}: {detail}")]
    Rejected {
        status: reqwest::StatusCode,
        detail: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_profile_details_wire_format() {
        let profile = ProfileDetails {
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            phone: "+19055161757".to_string(),
            corporation_number: "123456789".to_string(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "firstName": "Jane",
                "lastName": "Smith",
                "phone": "+19055161757",
                "corporationNumber": "123456789",
            })
        );
    }

    #[test]
    fn test_rejected_error_display_includes_detail() {
        let err = ApiError::Rejected {
            status: reqwest::StatusCode::BAD_REQUEST,
            detail: "Invalid phone number".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("400"));
        assert!(text.contains("Invalid phone number"));
    }
}
