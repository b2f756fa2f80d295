//! HTTP client for communicating with the account service
//!
//! One POST per registration. Status codes come back as plain data so the
//! caller decides what each one means.

use super::error::ApiError;
use super::traits::AccountApi;
use crate::state::RegistrationInput;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Account creation endpoint, relative to the base URL
const USERS_PATH: &str = "users";

/// Body of the account creation request
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl From<&RegistrationInput> for NewUser {
    fn from(input: &RegistrationInput) -> Self {
        Self {
            name: input.name.clone(),
            email: input.email.clone(),
            password: input.password.clone(),
        }
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Client for the account service
pub struct AccountClient {
    http: Client,
    users_url: Url,
}

impl AccountClient {
    /// Create a new client against `base_url`
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let users_url = users_url(base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        tracing::debug!("Account endpoint: {users_url}");
        Ok(Self { http, users_url })
    }

    pub fn users_url(&self) -> &Url {
        &self.users_url
    }
}

#[async_trait]
impl AccountApi for AccountClient {
    async fn create_user(&self, user: &NewUser) -> Result<u16, ApiError> {
        let response = self
            .http
            .post(self.users_url.clone())
            .json(user)
            .send()
            .await?;

        let status = response.status().as_u16();
        tracing::info!("Account service answered {status}");
        Ok(status)
    }
}

/// Join the users path onto the base URL, treating the base as a directory
fn users_url(base_url: &str) -> Result<Url, ApiError> {
    let trimmed = base_url.trim();
    let base = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    Url::parse(&base)
        .and_then(|url| url.join(USERS_PATH))
        .map_err(|_| ApiError::InvalidBaseUrl(base_url.to_string()))
}
