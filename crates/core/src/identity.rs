//! User read model and acting principal.
//!
//! Users are created and maintained by the external identity flow; this
//! core only reads them. The [`Actor`] is the already-verified principal
//! supplied by the auth collaborator on every call.

use serde::{Deserialize, Serialize};

use ferio_shared::types::{UnitId, UserId};

/// A user as seen by the workflow core.
///
/// Role flags are independent capabilities, not a hierarchy: a user may
/// be both manager and admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: UserId,
    /// Display name.
    pub full_name: String,
    /// Organizational unit membership, if any.
    pub unit_id: Option<UnitId>,
    /// Whether the user holds the admin capability.
    pub is_admin: bool,
    /// Whether the user holds the manager capability.
    pub is_manager: bool,
    /// Annual day ceiling used when no ledger row exists for a year.
    pub default_annual_days: i32,
}

/// The acting principal for a core operation.
///
/// Identity and role flags arrive pre-verified from the auth
/// collaborator; the core trusts them as-is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Actor {
    /// The acting user's identifier.
    pub user_id: UserId,
    /// Admin capability flag.
    pub is_admin: bool,
    /// Manager capability flag.
    pub is_manager: bool,
    /// Organizational unit membership, if any.
    pub unit_id: Option<UnitId>,
}

impl Actor {
    /// Builds an actor from a stored user record.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            is_admin: user.is_admin,
            is_manager: user.is_manager,
            unit_id: user.unit_id,
        }
    }
}
