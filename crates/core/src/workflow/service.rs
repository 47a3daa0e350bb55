//! State transition logic for the approval workflow.
//!
//! All methods are associated functions that validate a transition and
//! return the [`WorkflowAction`] the database layer must apply. A guard
//! failure returns a typed error and implies no mutation anywhere.

use chrono::Utc;

use crate::identity::{Actor, User};
use crate::quota::types::Quota;
use crate::request::error::ValidationError;
use crate::request::types::RequestStatus;
use crate::workflow::authz::AuthzPolicy;
use crate::workflow::error::WorkflowError;
use crate::workflow::types::WorkflowAction;

/// Stateless service for request workflow transitions.
pub struct WorkflowService;

impl WorkflowService {
    /// Submits a draft request for review.
    ///
    /// Guards: the actor owns the request and the current status is
    /// Draft. Callers run the period validator first; the repository
    /// enforces that ordering.
    ///
    /// # Errors
    ///
    /// * `WorkflowError::NotOwner` if the actor is not the owner
    /// * `WorkflowError::InvalidTransition` if not in Draft status
    pub fn submit(
        current_status: RequestStatus,
        actor: &Actor,
        owner: &User,
    ) -> Result<WorkflowAction, WorkflowError> {
        if !AuthzPolicy::is_owner(actor, owner.id) {
            return Err(WorkflowError::NotOwner {
                user_id: actor.user_id,
            });
        }

        match current_status {
            RequestStatus::Draft => Ok(WorkflowAction::Submit {
                new_status: RequestStatus::Pending,
                submitted_by: actor.user_id,
                submitted_at: Utc::now(),
            }),
            _ => Err(WorkflowError::InvalidTransition {
                from: current_status,
                to: RequestStatus::Pending,
            }),
        }
    }

    /// Approves a pending request.
    ///
    /// Guards: the actor is an admin or manages the owner's unit, the
    /// current status is Pending, and the requested total still fits
    /// the remaining quota. The quota is re-checked here independently
    /// of the equality check done at submission, so approvals that race
    /// other approvals cannot overshoot the ceiling.
    ///
    /// # Errors
    ///
    /// * `WorkflowError::NotAuthorized` if the actor may not review
    /// * `WorkflowError::InvalidTransition` if not in Pending status
    /// * `WorkflowError::Validation` (insufficient quota) if the total
    ///   no longer fits — returned before any write occurs
    pub fn approve(
        current_status: RequestStatus,
        actor: &Actor,
        owner: &User,
        requested_days: i32,
        quota: &Quota,
    ) -> Result<WorkflowAction, WorkflowError> {
        if !AuthzPolicy::can_review(actor, owner) {
            return Err(WorkflowError::NotAuthorized {
                user_id: actor.user_id,
            });
        }

        if current_status != RequestStatus::Pending {
            return Err(WorkflowError::InvalidTransition {
                from: current_status,
                to: RequestStatus::Approved,
            });
        }

        if requested_days > quota.available_days() {
            return Err(WorkflowError::Validation(
                ValidationError::InsufficientQuota {
                    requested: requested_days,
                    available: quota.available_days(),
                },
            ));
        }

        Ok(WorkflowAction::Approve {
            new_status: RequestStatus::Approved,
            approved_by: actor.user_id,
            approved_at: Utc::now(),
            days_debited: requested_days,
        })
    }

    /// Rejects a pending request, optionally recording a reason.
    ///
    /// # Errors
    ///
    /// * `WorkflowError::NotAuthorized` if the actor may not review
    /// * `WorkflowError::InvalidTransition` if not in Pending status
    pub fn reject(
        current_status: RequestStatus,
        actor: &Actor,
        owner: &User,
        reason: Option<String>,
    ) -> Result<WorkflowAction, WorkflowError> {
        if !AuthzPolicy::can_review(actor, owner) {
            return Err(WorkflowError::NotAuthorized {
                user_id: actor.user_id,
            });
        }

        match current_status {
            RequestStatus::Pending => Ok(WorkflowAction::Reject {
                new_status: RequestStatus::Rejected,
                rejected_by: actor.user_id,
                rejected_at: Utc::now(),
                reason,
            }),
            _ => Err(WorkflowError::InvalidTransition {
                from: current_status,
                to: RequestStatus::Rejected,
            }),
        }
    }

    /// Cancels a draft, pending, or approved request.
    ///
    /// If the prior status was Approved, the action carries a refund of
    /// the request's full total; otherwise the refund is zero.
    ///
    /// # Errors
    ///
    /// * `WorkflowError::InvalidTransition` if the status is terminal
    /// * `WorkflowError::NotAuthorized` if the actor may not cancel a
    ///   request in this status
    pub fn cancel(
        current_status: RequestStatus,
        actor: &Actor,
        owner: &User,
        total_days: i32,
    ) -> Result<WorkflowAction, WorkflowError> {
        if !current_status.is_cancellable() {
            return Err(WorkflowError::InvalidTransition {
                from: current_status,
                to: RequestStatus::Cancelled,
            });
        }

        if !AuthzPolicy::can_cancel(actor, owner, current_status) {
            return Err(WorkflowError::NotAuthorized {
                user_id: actor.user_id,
            });
        }

        let days_refunded = if current_status == RequestStatus::Approved {
            total_days
        } else {
            0
        };

        Ok(WorkflowAction::Cancel {
            new_status: RequestStatus::Cancelled,
            cancelled_by: actor.user_id,
            cancelled_at: Utc::now(),
            days_refunded,
        })
    }

    /// Check if a status transition is valid.
    ///
    /// Valid transitions:
    /// - Draft → Pending (submit)
    /// - Pending → Approved (approve)
    /// - Pending → Rejected (reject)
    /// - Draft | Pending | Approved → Cancelled (cancel)
    #[must_use]
    pub fn is_valid_transition(from: RequestStatus, to: RequestStatus) -> bool {
        matches!(
            (from, to),
            (RequestStatus::Draft, RequestStatus::Pending)
                | (
                    RequestStatus::Pending,
                    RequestStatus::Approved | RequestStatus::Rejected
                )
                | (
                    RequestStatus::Draft | RequestStatus::Pending | RequestStatus::Approved,
                    RequestStatus::Cancelled
                )
        )
    }
}
