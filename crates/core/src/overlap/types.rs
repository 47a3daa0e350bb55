//! Intersection detector types.
//!
//! Intersections are derived and ephemeral: computed on demand over
//! already-approved requests, never persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ferio_shared::types::{RequestId, UserId};

use crate::request::types::VacationPeriod;

/// One approved request restricted to a unit and year, with the owner
/// resolved for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovedSchedule {
    /// The approved request.
    pub request_id: RequestId,
    /// The owning user.
    pub user_id: UserId,
    /// Owner display name from the unit directory.
    pub user_name: String,
    /// The request's periods.
    pub periods: Vec<VacationPeriod>,
}

/// One side of a detected intersection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapParty {
    /// The user absent during the overlap.
    pub user_id: UserId,
    /// Display name.
    pub user_name: String,
    /// The request the overlapping period belongs to.
    pub request_id: RequestId,
    /// Start of the full period (inclusive).
    pub period_start: NaiveDate,
    /// End of the full period (inclusive).
    pub period_end: NaiveDate,
}

/// A scheduling conflict between two users' approved periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intersection {
    /// First party (from the earlier request in discovery order).
    pub first: OverlapParty,
    /// Second party.
    pub second: OverlapParty,
    /// Start of the shared window (inclusive).
    pub overlap_start: NaiveDate,
    /// End of the shared window (inclusive).
    pub overlap_end: NaiveDate,
    /// Days in the shared window.
    pub days: i64,
}
