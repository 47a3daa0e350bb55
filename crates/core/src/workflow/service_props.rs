//! Property-based tests for the workflow state machine.

use proptest::prelude::*;

use ferio_shared::types::{UnitId, UserId};

use crate::identity::{Actor, User};
use crate::quota::types::Quota;
use crate::request::types::RequestStatus;
use crate::workflow::error::WorkflowError;
use crate::workflow::service::WorkflowService;

fn arb_status() -> impl Strategy<Value = RequestStatus> {
    prop_oneof![
        Just(RequestStatus::Draft),
        Just(RequestStatus::Pending),
        Just(RequestStatus::Approved),
        Just(RequestStatus::Rejected),
        Just(RequestStatus::Cancelled),
    ]
}

fn owner() -> User {
    User {
        id: UserId::new(),
        full_name: "Owner".to_string(),
        unit_id: Some(UnitId::new()),
        is_admin: false,
        is_manager: false,
        default_annual_days: 28,
    }
}

fn admin() -> Actor {
    Actor {
        user_id: UserId::new(),
        is_admin: true,
        is_manager: false,
        unit_id: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// State machine totality: a transition attempted from a status the
    /// lifecycle table does not list is always rejected with an invalid
    /// transition error, never silently accepted, even for the most
    /// privileged actor.
    #[test]
    fn prop_unlisted_transitions_rejected(status in arb_status(), days in 1i32..60) {
        let owner = owner();
        let owner_actor = Actor {
            user_id: owner.id,
            is_admin: false,
            is_manager: false,
            unit_id: owner.unit_id,
        };
        let quota = Quota {
            user_id: owner.id,
            year: 2026,
            total_days: days,
            used_days: 0,
        };
        let submit = WorkflowService::submit(status, &owner_actor, &owner);
        prop_assert_eq!(
            submit.is_ok(),
            WorkflowService::is_valid_transition(status, RequestStatus::Pending)
        );

        let approve = WorkflowService::approve(status, &admin(), &owner, days, &quota);
        prop_assert_eq!(
            approve.is_ok(),
            WorkflowService::is_valid_transition(status, RequestStatus::Approved)
        );

        let reject = WorkflowService::reject(status, &admin(), &owner, None);
        prop_assert_eq!(
            reject.is_ok(),
            WorkflowService::is_valid_transition(status, RequestStatus::Rejected)
        );

        let cancel = WorkflowService::cancel(status, &admin(), &owner, days);
        prop_assert_eq!(
            cancel.is_ok(),
            WorkflowService::is_valid_transition(status, RequestStatus::Cancelled)
        );
    }

    /// Approval never overshoots the ceiling: whenever the requested
    /// total exceeds the available days the guard fails, and whenever
    /// it fits the debit equals the requested total exactly.
    #[test]
    fn prop_approve_respects_available_days(
        total in 0i32..60,
        used in 0i32..60,
        requested in 1i32..60,
    ) {
        prop_assume!(used <= total);
        let owner = owner();
        let quota = Quota {
            user_id: owner.id,
            year: 2026,
            total_days: total,
            used_days: used,
        };

        match WorkflowService::approve(RequestStatus::Pending, &admin(), &owner, requested, &quota) {
            Ok(action) => {
                prop_assert!(requested <= quota.available_days());
                prop_assert_eq!(action.quota_delta(), requested);
            }
            Err(WorkflowError::Validation(_)) => {
                prop_assert!(requested > quota.available_days());
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    /// Cancellation refunds the full total exactly when the prior
    /// status was Approved, and zero otherwise.
    #[test]
    fn prop_cancel_refund_matches_prior_status(status in arb_status(), days in 1i32..60) {
        let owner = owner();
        if let Ok(action) = WorkflowService::cancel(status, &admin(), &owner, days) {
            let expected = if status == RequestStatus::Approved { -days } else { 0 };
            prop_assert_eq!(action.quota_delta(), expected);
        } else {
            prop_assert!(status.is_terminal());
        }
    }
}
