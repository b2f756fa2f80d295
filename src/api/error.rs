//! Errors raised by the account service client

use thiserror::Error;

/// Failures that never produced an HTTP status
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid account service URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("request to account service failed: {0}")]
    Transport(#[from] reqwest::Error),
}
