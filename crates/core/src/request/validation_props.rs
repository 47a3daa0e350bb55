//! Property-based tests for the period validator.

use chrono::NaiveDate;
use proptest::prelude::*;

use ferio_shared::QuotaPolicy;

use crate::request::error::ValidationError;
use crate::request::types::{PeriodDraft, VacationPeriod};
use crate::request::validation::{PeriodValidator, MIN_LONG_STRETCH_DAYS};

/// Builds a set of non-overlapping drafts inside 2026 from a list of
/// (start offset, length) pairs laid out back to back with gaps.
fn disjoint_drafts(specs: &[(u32, u32)]) -> Vec<PeriodDraft> {
    let base = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let mut cursor = 0u32;
    specs
        .iter()
        .map(|&(gap, len)| {
            let start = base + chrono::Days::new(u64::from(cursor + gap));
            let end = start + chrono::Days::new(u64::from(len - 1));
            cursor += gap + len + 1;
            PeriodDraft::new(start, end)
        })
        .collect()
}

/// Strategy for period layouts: up to 5 periods, each 1..=20 days with
/// 1..=9 day gaps, always fitting well inside one year.
fn arb_layout() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((1u32..10, 1u32..21), 1..5)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For disjoint in-year periods, the validator either accepts with
    /// a total equal to the summed spans, or rejects for a policy
    /// reason (long stretch or quota), never a structural one.
    #[test]
    fn prop_total_equals_sum_of_spans(specs in arb_layout()) {
        let drafts = disjoint_drafts(&specs);
        let expected_total: i64 = specs.iter().map(|&(_, len)| i64::from(len)).sum();
        let available = i32::try_from(expected_total).unwrap();

        match PeriodValidator::validate(&drafts, 2026, available, QuotaPolicy::ExactMatch) {
            Ok(validated) => {
                prop_assert_eq!(i64::from(validated.total_days), expected_total);
                prop_assert!(specs.iter().any(|&(_, len)| i64::from(len) >= MIN_LONG_STRETCH_DAYS));
            }
            Err(ValidationError::MissingLongStretch { .. }) => {
                prop_assert!(specs.iter().all(|&(_, len)| i64::from(len) < MIN_LONG_STRETCH_DAYS));
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    /// Duplicating any period with a length above one day introduces an
    /// intra-request overlap and the validator rejects it.
    #[test]
    fn prop_duplicated_period_rejected(specs in arb_layout(), pick in any::<prop::sample::Index>()) {
        let mut drafts = disjoint_drafts(&specs);
        let dup = drafts[pick.index(drafts.len())];
        prop_assume!(
            VacationPeriod::span_days(dup.start_date.unwrap(), dup.end_date.unwrap()) > 1
        );
        drafts.push(dup);

        let result = PeriodValidator::validate(&drafts, 2026, 100, QuotaPolicy::AtMost);
        prop_assert!(
            matches!(result, Err(ValidationError::OverlappingPeriods { .. })),
            "expected OverlappingPeriods, got {result:?}"
        );
    }

    /// Validation is insensitive to period order.
    #[test]
    fn prop_order_insensitive(specs in arb_layout()) {
        let drafts = disjoint_drafts(&specs);
        let mut reversed = drafts.clone();
        reversed.reverse();

        let forward = PeriodValidator::validate(&drafts, 2026, 200, QuotaPolicy::AtMost);
        let backward = PeriodValidator::validate(&reversed, 2026, 200, QuotaPolicy::AtMost);
        match (forward, backward) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a.total_days, b.total_days),
            (Err(a), Err(b)) => prop_assert_eq!(a.error_code(), b.error_code()),
            (a, b) => prop_assert!(false, "diverged: {a:?} vs {b:?}"),
        }
    }

    /// Under the exact-match policy, any available-day figure other
    /// than the true total is rejected with the mismatch error.
    #[test]
    fn prop_exact_match_requires_equality(stretch in 14u32..28, offset in 1i32..10) {
        let drafts = disjoint_drafts(&[(1, stretch)]);
        let total = i32::try_from(stretch).unwrap();

        let result =
            PeriodValidator::validate(&drafts, 2026, total + offset, QuotaPolicy::ExactMatch);
        prop_assert!(
            matches!(result, Err(ValidationError::QuotaMismatch { .. })),
            "expected QuotaMismatch, got {result:?}"
        );
    }
}
