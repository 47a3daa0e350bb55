//! Stateless authorization predicates.
//!
//! Role flags are independent capabilities composed with plain boolean
//! logic; there is no role-inheritance hierarchy beyond "admin
//! supersedes manager supersedes owner" expressed directly in the
//! predicates below.

use ferio_shared::types::{UnitId, UserId};

use crate::identity::{Actor, User};
use crate::request::types::RequestStatus;

/// Visibility scope for request listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestScope {
    /// Admins see every request.
    All,
    /// Managers see their organizational unit.
    Unit(UnitId),
    /// Everyone else sees only their own requests.
    Own(UserId),
}

/// Stateless authorization policy consumed by the workflow service.
pub struct AuthzPolicy;

impl AuthzPolicy {
    /// True iff the actor owns the given request.
    #[must_use]
    pub fn is_owner(actor: &Actor, owner_id: UserId) -> bool {
        actor.user_id == owner_id
    }

    /// True iff the actor manages the owner's organizational unit.
    ///
    /// Requires both unit memberships to be set; a manager without a
    /// unit manages nobody.
    #[must_use]
    pub fn is_manager_of(actor: &Actor, owner: &User) -> bool {
        actor.is_manager
            && matches!((actor.unit_id, owner.unit_id), (Some(a), Some(o)) if a == o)
    }

    /// True iff the actor may approve or reject the owner's requests.
    #[must_use]
    pub fn can_review(actor: &Actor, owner: &User) -> bool {
        actor.is_admin || Self::is_manager_of(actor, owner)
    }

    /// True iff the actor may cancel a request in the given status.
    ///
    /// Owners may cancel their own Draft/Pending requests; admins may
    /// cancel anything cancellable; managers may cancel within their
    /// unit. Terminal statuses are never cancellable, which the state
    /// machine checks separately.
    #[must_use]
    pub fn can_cancel(actor: &Actor, owner: &User, status: RequestStatus) -> bool {
        if actor.is_admin || Self::is_manager_of(actor, owner) {
            return true;
        }
        Self::is_owner(actor, owner.id)
            && matches!(status, RequestStatus::Draft | RequestStatus::Pending)
    }

    /// Computes the listing scope for an actor: admins see everything,
    /// managers their unit, owners only their own requests.
    #[must_use]
    pub fn list_scope(actor: &Actor) -> RequestScope {
        if actor.is_admin {
            return RequestScope::All;
        }
        if actor.is_manager
            && let Some(unit) = actor.unit_id
        {
            return RequestScope::Unit(unit);
        }
        RequestScope::Own(actor.user_id)
    }
}
