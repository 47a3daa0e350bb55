//! Structural validation for vacation requests.
//!
//! Runs before a request may enter the approval workflow: date sanity,
//! intra-request overlap, the long-stretch rule, and the quota
//! consumption policy.

use ferio_shared::QuotaPolicy;
use ferio_shared::types::PeriodId;

use crate::request::error::ValidationError;
use crate::request::types::{PeriodDraft, VacationPeriod};

/// Minimum length in days of the one required long stretch.
pub const MIN_LONG_STRETCH_DAYS: i64 = 14;

/// Outcome of a successful validation.
///
/// Carries the cleaned periods and the computed totals so callers can
/// proceed without recomputation.
#[derive(Debug, Clone)]
pub struct ValidatedPeriods {
    /// Periods with day counts derived from their date spans.
    pub periods: Vec<VacationPeriod>,
    /// Total requested days across all periods.
    pub total_days: i32,
    /// Whether any single period satisfies the long-stretch rule.
    pub has_long_stretch: bool,
}

/// Stateless validator for a request's period set.
pub struct PeriodValidator;

impl PeriodValidator {
    /// Validates caller-supplied periods against the planning year and
    /// the remaining quota.
    ///
    /// Checks, in order:
    /// 1. the period list is non-empty;
    /// 2. every period has both dates, in order, inside `year`;
    /// 3. a declared day count matches the inclusive span (the span is
    ///    authoritative, so a stored count can never disagree with its
    ///    dates);
    /// 4. no two periods in the request intersect;
    /// 5. at least one period spans [`MIN_LONG_STRETCH_DAYS`] or more;
    /// 6. the total satisfies the quota policy — `ExactMatch` requires
    ///    the total to equal `available_days`, `AtMost` merely forbids
    ///    exceeding it.
    ///
    /// # Errors
    ///
    /// Returns the first failing check as a [`ValidationError`].
    pub fn validate(
        drafts: &[PeriodDraft],
        year: i32,
        available_days: i32,
        policy: QuotaPolicy,
    ) -> Result<ValidatedPeriods, ValidationError> {
        if drafts.is_empty() {
            return Err(ValidationError::EmptyRequest);
        }

        let mut periods = Vec::with_capacity(drafts.len());
        for draft in drafts {
            periods.push(Self::check_draft(draft, year)?);
        }

        for (i, first) in periods.iter().enumerate() {
            for second in &periods[i + 1..] {
                if first.intersects(second) {
                    return Err(ValidationError::OverlappingPeriods {
                        first_start: first.start_date,
                        first_end: first.end_date,
                        second_start: second.start_date,
                        second_end: second.end_date,
                    });
                }
            }
        }

        let total_days = periods.iter().map(|p| p.days_count).sum();
        let has_long_stretch = periods
            .iter()
            .any(|p| i64::from(p.days_count) >= MIN_LONG_STRETCH_DAYS);
        if !has_long_stretch {
            return Err(ValidationError::MissingLongStretch {
                minimum: MIN_LONG_STRETCH_DAYS,
            });
        }

        match policy {
            QuotaPolicy::ExactMatch => {
                if total_days != available_days {
                    return Err(ValidationError::QuotaMismatch {
                        requested: total_days,
                        available: available_days,
                    });
                }
            }
            QuotaPolicy::AtMost => {
                if total_days > available_days {
                    return Err(ValidationError::InsufficientQuota {
                        requested: total_days,
                        available: available_days,
                    });
                }
            }
        }

        Ok(ValidatedPeriods {
            periods,
            total_days,
            has_long_stretch,
        })
    }

    /// Checks one draft and converts it into a clean period.
    fn check_draft(draft: &PeriodDraft, year: i32) -> Result<VacationPeriod, ValidationError> {
        let start = draft
            .start_date
            .ok_or(ValidationError::MissingDate { which: "start" })?;
        let end = draft
            .end_date
            .ok_or(ValidationError::MissingDate { which: "end" })?;

        if end < start {
            return Err(ValidationError::InvalidDateRange { start, end });
        }

        if !Self::within_year(start, end, year) {
            return Err(ValidationError::OutsidePlanningYear { year, start, end });
        }

        let computed = i32::try_from(VacationPeriod::span_days(start, end))
            .map_err(|_| ValidationError::InvalidDateRange { start, end })?;

        if let Some(declared) = draft.days_count
            && declared != computed
        {
            return Err(ValidationError::DayCountMismatch {
                declared,
                computed,
                start,
            });
        }

        Ok(VacationPeriod {
            id: PeriodId::new(),
            start_date: start,
            end_date: end,
            days_count: computed,
        })
    }

    /// Returns true if the full inclusive range lies in the given year.
    fn within_year(start: chrono::NaiveDate, end: chrono::NaiveDate, year: i32) -> bool {
        use chrono::Datelike;
        start.year() == year && end.year() == year
    }
}
