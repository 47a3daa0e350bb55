//! Vacation request domain types.
//!
//! Periods are inclusive calendar-day ranges with no time-of-day
//! component. A request's `year` is the planning year used for quota
//! lookups; every period must fall inside it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use ferio_shared::types::{PeriodId, RequestId, UserId};

/// Vacation request status in the approval workflow.
///
/// The lifecycle is a DAG with two terminal sinks and one
/// absorbing-but-escapable state:
/// - Draft → Pending (submit)
/// - Pending → Approved (approve)
/// - Pending → Rejected (reject)
/// - Draft | Pending | Approved → Cancelled (cancel)
///
/// `Rejected` and `Cancelled` are terminal; no transition leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Request is being drafted by its owner and can be modified.
    Draft,
    /// Request has been submitted for review.
    Pending,
    /// Request has been approved and debited against the quota ledger.
    Approved,
    /// Request has been rejected (terminal).
    Rejected,
    /// Request has been cancelled (terminal).
    Cancelled,
}

impl RequestStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Returns true if no transition leaves this status.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Cancelled)
    }

    /// Returns true if the status admits cancellation.
    #[must_use]
    pub fn is_cancellable(&self) -> bool {
        matches!(self, Self::Draft | Self::Pending | Self::Approved)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Caller-supplied period data before validation.
///
/// Dates arrive as options so a missing date is rejected by the
/// validator with a specific error rather than failing upstream.
/// The declared day count, when present, is checked against the date
/// span; the span is authoritative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PeriodDraft {
    /// First day of the period (inclusive).
    pub start_date: Option<NaiveDate>,
    /// Last day of the period (inclusive).
    pub end_date: Option<NaiveDate>,
    /// Declared day count, validated against the span if supplied.
    pub days_count: Option<i32>,
}

impl PeriodDraft {
    /// Builds a draft with both dates set and no declared count.
    #[must_use]
    pub const fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date: Some(start_date),
            end_date: Some(end_date),
            days_count: None,
        }
    }
}

/// One contiguous inclusive date range within a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationPeriod {
    /// Unique identifier.
    pub id: PeriodId,
    /// First day off (inclusive).
    pub start_date: NaiveDate,
    /// Last day off (inclusive).
    pub end_date: NaiveDate,
    /// Day count derived from the inclusive span.
    pub days_count: i32,
}

impl VacationPeriod {
    /// Number of calendar days covered by an inclusive range.
    #[must_use]
    pub fn span_days(start_date: NaiveDate, end_date: NaiveDate) -> i64 {
        (end_date - start_date).num_days() + 1
    }

    /// Returns true if the two periods share at least one full day
    /// beyond a touching endpoint.
    ///
    /// Touching endpoints do not count: with inclusive dates,
    /// `[10..20]` and `[20..30]` do not intersect.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.start_date < other.end_date && other.start_date < self.end_date
    }

    /// The inclusive overlap window shared with another period, if the
    /// two intersect.
    #[must_use]
    pub fn overlap_window(&self, other: &Self) -> Option<(NaiveDate, NaiveDate)> {
        if self.intersects(other) {
            Some((
                self.start_date.max(other.start_date),
                self.end_date.min(other.end_date),
            ))
        } else {
            None
        }
    }
}

/// An employee's vacation request for one planning year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationRequest {
    /// Unique identifier.
    pub id: RequestId,
    /// The owning user.
    pub user_id: UserId,
    /// Planning year; all periods fall inside it.
    pub year: i32,
    /// Current lifecycle status.
    pub status: RequestStatus,
    /// Free-form comment from the owner.
    pub comment: Option<String>,
    /// Reviewer comment recorded on rejection.
    pub review_comment: Option<String>,
    /// Periods in stable insertion order (order carries no semantics).
    pub periods: Vec<VacationPeriod>,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
    /// When the request was last modified.
    pub updated_at: DateTime<Utc>,
    /// When the request entered Pending, if it has.
    pub submitted_at: Option<DateTime<Utc>>,
    /// When the request was approved, rejected, or cancelled.
    pub decided_at: Option<DateTime<Utc>>,
}

impl VacationRequest {
    /// Total requested days across all periods.
    #[must_use]
    pub fn total_days(&self) -> i32 {
        self.periods.iter().map(|p| p.days_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period(start: NaiveDate, end: NaiveDate) -> VacationPeriod {
        VacationPeriod {
            id: PeriodId::new(),
            start_date: start,
            end_date: end,
            days_count: i32::try_from(VacationPeriod::span_days(start, end)).unwrap(),
        }
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            RequestStatus::Draft,
            RequestStatus::Pending,
            RequestStatus::Approved,
            RequestStatus::Rejected,
            RequestStatus::Cancelled,
        ] {
            assert_eq!(RequestStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(RequestStatus::parse("invalid"), None);
        assert_eq!(RequestStatus::parse("PENDING"), Some(RequestStatus::Pending));
    }

    #[test]
    fn test_status_terminal_and_cancellable() {
        assert!(RequestStatus::Rejected.is_terminal());
        assert!(RequestStatus::Cancelled.is_terminal());
        assert!(!RequestStatus::Approved.is_terminal());

        assert!(RequestStatus::Draft.is_cancellable());
        assert!(RequestStatus::Pending.is_cancellable());
        assert!(RequestStatus::Approved.is_cancellable());
        assert!(!RequestStatus::Rejected.is_cancellable());
        assert!(!RequestStatus::Cancelled.is_cancellable());
    }

    #[test]
    fn test_span_days_inclusive() {
        assert_eq!(
            VacationPeriod::span_days(date(2026, 6, 1), date(2026, 6, 14)),
            14
        );
        assert_eq!(
            VacationPeriod::span_days(date(2026, 6, 1), date(2026, 6, 1)),
            1
        );
    }

    #[test]
    fn test_touching_endpoints_do_not_intersect() {
        let a = period(date(2026, 6, 10), date(2026, 6, 20));
        let b = period(date(2026, 6, 20), date(2026, 6, 30));
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
        assert_eq!(a.overlap_window(&b), None);
    }

    #[test]
    fn test_overlap_window() {
        let a = period(date(2026, 6, 10), date(2026, 6, 20));
        let b = period(date(2026, 6, 15), date(2026, 6, 25));
        assert!(a.intersects(&b));
        let window = a.overlap_window(&b).unwrap();
        assert_eq!(window, (date(2026, 6, 15), date(2026, 6, 20)));
        assert_eq!(VacationPeriod::span_days(window.0, window.1), 6);
    }

    #[test]
    fn test_disjoint_periods_do_not_intersect() {
        let a = period(date(2026, 6, 1), date(2026, 6, 5));
        let b = period(date(2026, 7, 1), date(2026, 7, 5));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_total_days_sums_periods() {
        let request = VacationRequest {
            id: RequestId::new(),
            user_id: UserId::new(),
            year: 2026,
            status: RequestStatus::Draft,
            comment: None,
            review_comment: None,
            periods: vec![
                period(date(2026, 6, 1), date(2026, 6, 14)),
                period(date(2026, 9, 1), date(2026, 9, 14)),
            ],
            created_at: Utc::now(),
            updated_at: Utc::now(),
            submitted_at: None,
            decided_at: None,
        };
        assert_eq!(request.total_days(), 28);
    }
}
