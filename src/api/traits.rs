//! Trait abstraction for the account client to enable mocking in tests

use super::client::NewUser;
use super::error::ApiError;
use async_trait::async_trait;

/// Account service operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountApi: Send + Sync {
    /// Create a user account.
    ///
    /// Returns the HTTP status of the response whatever its class; only
    /// failures that never reached a response are errors.
    async fn create_user(&self, user: &NewUser) -> Result<u16, ApiError>;
}
