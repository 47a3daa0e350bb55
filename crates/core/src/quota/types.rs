//! Quota ledger domain types.

use serde::{Deserialize, Serialize};

use ferio_shared::types::UserId;

/// One quota ledger row: the vacation day allowance for a user in a
/// planning year, and the running count already committed against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quota {
    /// The user this allowance belongs to.
    pub user_id: UserId,
    /// The planning year.
    pub year: i32,
    /// Configured day ceiling for the year.
    pub total_days: i32,
    /// Days already debited by approved requests.
    pub used_days: i32,
}

impl Quota {
    /// Days still available for new approvals.
    #[must_use]
    pub const fn available_days(&self) -> i32 {
        self.total_days - self.used_days
    }

    /// Synthesizes an unpersisted default row for a (user, year) with no
    /// ledger entry. Reads must not assume a row was written.
    #[must_use]
    pub const fn synthesized(user_id: UserId, year: i32, default_days: i32) -> Self {
        Self {
            user_id,
            year,
            total_days: default_days,
            used_days: 0,
        }
    }
}
