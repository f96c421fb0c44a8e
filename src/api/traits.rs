//! Trait abstraction for the onboarding API to enable mocking in tests

use super::{ApiError, ProfileDetails};
use async_trait::async_trait;

/// Trait for onboarding API operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OnboardingApi: Send + Sync {
    /// Look up a corporation number in the registry.
    ///
    /// `Ok(true)` when the registry answered with a success status,
    /// `Ok(false)` on any non-success status, `Err` when the request itself
    /// failed. Callers fold both failure shapes into "invalid".
    async fn lookup_corporation_number(&self, number: &str) -> Result<bool, ApiError>;

    /// Submit the collected profile
    async fn submit_profile(&self, profile: &ProfileDetails) -> Result<(), ApiError>;
}
