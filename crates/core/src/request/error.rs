//! Validation error types for vacation requests.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced by the period validator.
///
/// Every variant carries the offending values so a caller can render a
/// specific message. Validation failures are recoverable by correcting
/// input and are never retried automatically.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The request has no periods.
    #[error("Request must contain at least one vacation period")]
    EmptyRequest,

    /// A period is missing its start or end date.
    #[error("Period is missing a {which} date")]
    MissingDate {
        /// Which date is absent ("start" or "end").
        which: &'static str,
    },

    /// A period ends before it starts.
    #[error("Period end date {end} is before start date {start}")]
    InvalidDateRange {
        /// The period's start date.
        start: NaiveDate,
        /// The period's end date.
        end: NaiveDate,
    },

    /// A period leaves the request's planning year.
    #[error("Period {start}..{end} falls outside planning year {year}")]
    OutsidePlanningYear {
        /// The request's planning year.
        year: i32,
        /// The offending period's start date.
        start: NaiveDate,
        /// The offending period's end date.
        end: NaiveDate,
    },

    /// A declared day count disagrees with the period's date span.
    #[error("Declared day count {declared} does not match the {computed}-day span starting {start}")]
    DayCountMismatch {
        /// The caller-supplied day count.
        declared: i32,
        /// The count derived from the inclusive date span.
        computed: i32,
        /// The offending period's start date.
        start: NaiveDate,
    },

    /// Two periods within the same request intersect.
    #[error("Periods {first_start}..{first_end} and {second_start}..{second_end} overlap")]
    OverlappingPeriods {
        /// Start of the first period.
        first_start: NaiveDate,
        /// End of the first period.
        first_end: NaiveDate,
        /// Start of the second period.
        second_start: NaiveDate,
        /// End of the second period.
        second_end: NaiveDate,
    },

    /// No period satisfies the long-stretch rule.
    #[error("At least one period of {minimum} days or more is required")]
    MissingLongStretch {
        /// The minimum qualifying stretch length in days.
        minimum: i64,
    },

    /// The requested total does not exactly consume the remaining quota.
    #[error("Requested {requested} days but exactly {available} available days must be planned")]
    QuotaMismatch {
        /// Total days across the request's periods.
        requested: i32,
        /// Remaining quota for the planning year.
        available: i32,
    },

    /// The requested total exceeds the remaining quota.
    #[error("Requested {requested} days but only {available} available")]
    InsufficientQuota {
        /// Total days requested.
        requested: i32,
        /// Remaining quota for the planning year.
        available: i32,
    },
}

impl ValidationError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::EmptyRequest
            | Self::MissingDate { .. }
            | Self::InvalidDateRange { .. }
            | Self::OutsidePlanningYear { .. }
            | Self::DayCountMismatch { .. }
            | Self::OverlappingPeriods { .. } => 400,

            Self::MissingLongStretch { .. }
            | Self::QuotaMismatch { .. }
            | Self::InsufficientQuota { .. } => 422,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyRequest => "EMPTY_REQUEST",
            Self::MissingDate { .. } => "MISSING_DATE",
            Self::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
            Self::OutsidePlanningYear { .. } => "OUTSIDE_PLANNING_YEAR",
            Self::DayCountMismatch { .. } => "DAY_COUNT_MISMATCH",
            Self::OverlappingPeriods { .. } => "OVERLAPPING_PERIODS",
            Self::MissingLongStretch { .. } => "MISSING_LONG_STRETCH",
            Self::QuotaMismatch { .. } => "QUOTA_MISMATCH",
            Self::InsufficientQuota { .. } => "INSUFFICIENT_QUOTA",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_structural_errors_are_400() {
        assert_eq!(ValidationError::EmptyRequest.status_code(), 400);
        assert_eq!(
            ValidationError::MissingDate { which: "start" }.status_code(),
            400
        );
        assert_eq!(
            ValidationError::InvalidDateRange {
                start: date(2026, 6, 10),
                end: date(2026, 6, 1),
            }
            .status_code(),
            400
        );
    }

    #[test]
    fn test_policy_errors_are_422() {
        assert_eq!(
            ValidationError::MissingLongStretch { minimum: 14 }.status_code(),
            422
        );
        assert_eq!(
            ValidationError::QuotaMismatch {
                requested: 27,
                available: 28,
            }
            .status_code(),
            422
        );
        assert_eq!(
            ValidationError::InsufficientQuota {
                requested: 30,
                available: 28,
            }
            .status_code(),
            422
        );
    }

    #[test]
    fn test_quota_mismatch_cites_both_values() {
        let err = ValidationError::QuotaMismatch {
            requested: 27,
            available: 28,
        };
        assert_eq!(err.error_code(), "QUOTA_MISMATCH");
        assert!(err.to_string().contains("27"));
        assert!(err.to_string().contains("28"));
    }
}
