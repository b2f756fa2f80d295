//! Mapping from account service responses to user-facing outcomes

use super::error::ApiError;
use crate::state::NotificationKind;

pub const CREATED_MESSAGE: &str = "Account created successfully!";
pub const CONFLICT_MESSAGE: &str = "Email already registered! Sign in to continue.";
pub const FAILURE_MESSAGE: &str = "Something went wrong! Please try again.";

/// Result of one registration attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// 200 or 201
    Created,
    /// 409: the email is taken
    Conflict,
    /// Any other status
    UnknownFailure(u16),
    /// No response at all
    TransportFailure,
}

impl SubmissionOutcome {
    pub fn from_status(status: u16) -> Self {
        match status {
            200 | 201 => Self::Created,
            409 => Self::Conflict,
            other => Self::UnknownFailure(other),
        }
    }

    pub fn from_response(response: Result<u16, ApiError>) -> Self {
        match response {
            Ok(status) => Self::from_status(status),
            Err(e) => {
                tracing::warn!("Registration request failed: {e}");
                Self::TransportFailure
            }
        }
    }

    /// Toast to raise for this outcome
    pub fn notice(&self) -> (NotificationKind, &'static str) {
        match self {
            Self::Created => (NotificationKind::Success, CREATED_MESSAGE),
            Self::Conflict => (NotificationKind::Error, CONFLICT_MESSAGE),
            Self::UnknownFailure(_) | Self::TransportFailure => {
                (NotificationKind::Error, FAILURE_MESSAGE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses_are_created() {
        assert_eq!(SubmissionOutcome::from_status(200), SubmissionOutcome::Created);
        assert_eq!(SubmissionOutcome::from_status(201), SubmissionOutcome::Created);
    }

    #[test]
    fn test_conflict_status() {
        assert_eq!(SubmissionOutcome::from_status(409), SubmissionOutcome::Conflict);
    }

    #[test]
    fn test_other_statuses_are_unknown() {
        for status in [202, 204, 400, 404, 422, 500, 503] {
            assert_eq!(
                SubmissionOutcome::from_status(status),
                SubmissionOutcome::UnknownFailure(status)
            );
        }
    }

    #[test]
    fn test_transport_error_maps_to_transport_failure() {
        let outcome =
            SubmissionOutcome::from_response(Err(ApiError::InvalidBaseUrl("nope".to_string())));
        assert_eq!(outcome, SubmissionOutcome::TransportFailure);
    }

    #[test]
    fn test_created_notice_is_success() {
        let (kind, message) = SubmissionOutcome::Created.notice();
        assert_eq!(kind, NotificationKind::Success);
        assert_eq!(message, CREATED_MESSAGE);
    }

    #[test]
    fn test_conflict_notice_mentions_registered() {
        let (kind, message) = SubmissionOutcome::Conflict.notice();
        assert_eq!(kind, NotificationKind::Error);
        assert!(message.contains("already registered"));
    }

    #[test]
    fn test_failures_share_generic_notice() {
        assert_eq!(
            SubmissionOutcome::UnknownFailure(500).notice(),
            SubmissionOutcome::TransportFailure.notice()
        );
        assert_eq!(
            SubmissionOutcome::TransportFailure.notice(),
            (NotificationKind::Error, FAILURE_MESSAGE)
        );
    }
}
