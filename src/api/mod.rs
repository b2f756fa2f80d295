//! Account service client module for HTTP communication

mod client;
mod error;
mod outcome;
mod traits;

pub use client::{AccountClient, NewUser};
pub use error::ApiError;
pub use outcome::SubmissionOutcome;
pub use traits::AccountApi;

#[cfg(test)]
pub use outcome::{CONFLICT_MESSAGE, CREATED_MESSAGE, FAILURE_MESSAGE};
#[cfg(test)]
pub use traits::MockAccountApi;
