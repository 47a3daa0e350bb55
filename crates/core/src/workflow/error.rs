//! Workflow error types.
//!
//! Covers the full request-lifecycle taxonomy: validation failures,
//! authorization denials, not-found signals, invalid transitions, and
//! the ledger-inconsistency condition that demands operator attention.

use thiserror::Error;

use ferio_shared::AppError;
use ferio_shared::types::{RequestId, UserId};

use crate::quota::error::QuotaError;
use crate::request::error::ValidationError;
use crate::request::types::RequestStatus;

/// Errors that can occur during workflow operations.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Attempted a status transition the lifecycle does not allow.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: RequestStatus,
        /// The attempted target status.
        to: RequestStatus,
    },

    /// A non-owner attempted to submit a request.
    #[error("User {user_id} does not own this request")]
    NotOwner {
        /// The user who attempted the submission.
        user_id: UserId,
    },

    /// The actor lacks the rights for this transition.
    #[error("User {user_id} is not authorized for this transition")]
    NotAuthorized {
        /// The user who attempted the transition.
        user_id: UserId,
    },

    /// Period or quota validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Quota ledger operation failed.
    #[error(transparent)]
    Quota(#[from] QuotaError),

    /// Request not found.
    #[error("Vacation request {0} not found")]
    RequestNotFound(RequestId),

    /// User not found.
    #[error("User {0} not found")]
    UserNotFound(UserId),

    /// The request status was written but the matching quota ledger
    /// adjustment was not, and the writes could not be rolled back.
    ///
    /// The request mutation already took effect; this error exists to
    /// signal an operator-visible reconciliation need and must be
    /// alerted distinctly from ordinary failures.
    #[error(
        "Request {request_id} approved but quota ledger not adjusted by {days} days; \
         manual reconciliation required"
    )]
    LedgerInconsistency {
        /// The request left in the mutated state.
        request_id: RequestId,
        /// The unapplied ledger movement.
        days: i32,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl WorkflowError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidTransition { .. } => 409,
            Self::NotOwner { .. } | Self::NotAuthorized { .. } => 403,
            Self::Validation(inner) => inner.status_code(),
            Self::Quota(inner) => inner.status_code(),
            Self::RequestNotFound(_) | Self::UserNotFound(_) => 404,
            Self::LedgerInconsistency { .. } | Self::Database(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::NotOwner { .. } => "NOT_OWNER",
            Self::NotAuthorized { .. } => "NOT_AUTHORIZED",
            Self::Validation(inner) => inner.error_code(),
            Self::Quota(inner) => inner.error_code(),
            Self::RequestNotFound(_) => "REQUEST_NOT_FOUND",
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::LedgerInconsistency { .. } => "LEDGER_INCONSISTENCY",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

/// Maps workflow errors onto the application error surface, preserving
/// the status class.
impl From<WorkflowError> for AppError {
    fn from(err: WorkflowError) -> Self {
        let message = err.to_string();
        match err.status_code() {
            400 => Self::Validation(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            409 => Self::Conflict(message),
            422 => Self::BusinessRule(message),
            _ => match err {
                WorkflowError::Database(_) => Self::Database(message),
                _ => Self::Internal(message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_error() {
        let err = WorkflowError::InvalidTransition {
            from: RequestStatus::Rejected,
            to: RequestStatus::Cancelled,
        };
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "INVALID_TRANSITION");
        assert!(err.to_string().contains("rejected"));
        assert!(err.to_string().contains("cancelled"));
    }

    #[test]
    fn test_authorization_errors_are_403() {
        assert_eq!(
            WorkflowError::NotOwner {
                user_id: UserId::new()
            }
            .status_code(),
            403
        );
        assert_eq!(
            WorkflowError::NotAuthorized {
                user_id: UserId::new()
            }
            .status_code(),
            403
        );
    }

    #[test]
    fn test_validation_errors_pass_through() {
        let err = WorkflowError::from(ValidationError::InsufficientQuota {
            requested: 30,
            available: 28,
        });
        assert_eq!(err.status_code(), 422);
        assert_eq!(err.error_code(), "INSUFFICIENT_QUOTA");
    }

    #[test]
    fn test_quota_errors_pass_through() {
        let err = WorkflowError::from(QuotaError::LimitNotFound {
            user_id: UserId::new(),
            year: 2026,
        });
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "LIMIT_NOT_FOUND");
    }

    #[test]
    fn test_app_error_mapping_preserves_status() {
        let cases: Vec<WorkflowError> = vec![
            WorkflowError::InvalidTransition {
                from: RequestStatus::Rejected,
                to: RequestStatus::Cancelled,
            },
            WorkflowError::NotAuthorized {
                user_id: UserId::new(),
            },
            WorkflowError::RequestNotFound(RequestId::new()),
            WorkflowError::from(ValidationError::EmptyRequest),
            WorkflowError::from(ValidationError::MissingLongStretch { minimum: 14 }),
            WorkflowError::LedgerInconsistency {
                request_id: RequestId::new(),
                days: 14,
            },
            WorkflowError::Database("connection reset".to_string()),
        ];
        for err in cases {
            let status = err.status_code();
            let app: AppError = err.into();
            assert_eq!(app.status_code(), status);
        }
    }

    #[test]
    fn test_ledger_inconsistency_is_distinct() {
        let err = WorkflowError::LedgerInconsistency {
            request_id: RequestId::new(),
            days: 14,
        };
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "LEDGER_INCONSISTENCY");
        assert!(err.to_string().contains("manual reconciliation"));
    }
}
