//! Workflow action types.
//!
//! Each variant captures a validated transition, the resulting status,
//! and the audit data (who, when) plus the quota movement the database
//! layer must apply in the same transaction.

use chrono::{DateTime, Utc};

use ferio_shared::types::UserId;

use crate::request::types::RequestStatus;

/// A validated state transition with its side effects.
#[derive(Debug, Clone)]
pub enum WorkflowAction {
    /// Submit a draft request for review.
    Submit {
        /// The new status after submission.
        new_status: RequestStatus,
        /// The owner who submitted the request.
        submitted_by: UserId,
        /// When the request was submitted.
        submitted_at: DateTime<Utc>,
    },
    /// Approve a pending request.
    Approve {
        /// The new status after approval.
        new_status: RequestStatus,
        /// The reviewer who approved the request.
        approved_by: UserId,
        /// When the request was approved.
        approved_at: DateTime<Utc>,
        /// Days to debit from the owner's quota ledger.
        days_debited: i32,
    },
    /// Reject a pending request.
    Reject {
        /// The new status after rejection.
        new_status: RequestStatus,
        /// The reviewer who rejected the request.
        rejected_by: UserId,
        /// When the request was rejected.
        rejected_at: DateTime<Utc>,
        /// Optional reviewer reason.
        reason: Option<String>,
    },
    /// Cancel a draft, pending, or approved request.
    Cancel {
        /// The new status after cancellation.
        new_status: RequestStatus,
        /// The user who cancelled the request.
        cancelled_by: UserId,
        /// When the request was cancelled.
        cancelled_at: DateTime<Utc>,
        /// Days to refund to the owner's quota ledger; zero unless the
        /// request was Approved.
        days_refunded: i32,
    },
}

impl WorkflowAction {
    /// Returns the new status resulting from this action.
    #[must_use]
    pub fn new_status(&self) -> RequestStatus {
        match self {
            Self::Submit { new_status, .. }
            | Self::Approve { new_status, .. }
            | Self::Reject { new_status, .. }
            | Self::Cancel { new_status, .. } => *new_status,
        }
    }

    /// Net quota ledger movement this action requires (positive debits,
    /// negative refunds, zero otherwise).
    #[must_use]
    pub fn quota_delta(&self) -> i32 {
        match self {
            Self::Approve { days_debited, .. } => *days_debited,
            Self::Cancel { days_refunded, .. } => -days_refunded,
            Self::Submit { .. } | Self::Reject { .. } => 0,
        }
    }
}
