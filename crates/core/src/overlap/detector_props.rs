//! Property-based tests for the intersection detector.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use ferio_shared::types::{PeriodId, RequestId, UserId};

use crate::overlap::detector::IntersectionDetector;
use crate::overlap::types::ApprovedSchedule;
use crate::request::types::VacationPeriod;

/// Strategy for a random in-year period as (start offset, length).
fn arb_period_spec() -> impl Strategy<Value = (u64, u64)> {
    (0u64..300, 1u64..30)
}

fn build_schedule(name: &str, specs: &[(u64, u64)]) -> ApprovedSchedule {
    let base = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    ApprovedSchedule {
        request_id: RequestId::new(),
        user_id: UserId::new(),
        user_name: name.to_string(),
        periods: specs
            .iter()
            .map(|&(offset, len)| {
                let start = base + Days::new(offset);
                let end = start + Days::new(len - 1);
                VacationPeriod {
                    id: PeriodId::new(),
                    start_date: start,
                    end_date: end,
                    days_count: i32::try_from(len).unwrap(),
                }
            })
            .collect(),
    }
}

/// Normalizes an intersection to an order-independent key.
fn window_key(
    i: &crate::overlap::types::Intersection,
) -> (NaiveDate, NaiveDate, [uuid::Uuid; 2]) {
    let mut users = [i.first.user_id.into_inner(), i.second.user_id.into_inner()];
    users.sort();
    (i.overlap_start, i.overlap_end, users)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Reversing the input order yields the same set of overlap windows.
    #[test]
    fn prop_symmetric_in_input_order(
        a in prop::collection::vec(arb_period_spec(), 1..4),
        b in prop::collection::vec(arb_period_spec(), 1..4),
        c in prop::collection::vec(arb_period_spec(), 1..4),
    ) {
        let schedules = vec![
            build_schedule("a", &a),
            build_schedule("b", &b),
            build_schedule("c", &c),
        ];
        let mut reversed = schedules.clone();
        reversed.reverse();

        let mut forward: Vec<_> = IntersectionDetector::find_intersections(&schedules)
            .iter()
            .map(window_key)
            .collect();
        let mut backward: Vec<_> = IntersectionDetector::find_intersections(&reversed)
            .iter()
            .map(window_key)
            .collect();
        forward.sort();
        backward.sort();
        prop_assert_eq!(forward, backward);
    }

    /// Every reported window lies inside both contributing periods and
    /// never pairs a user with themselves.
    #[test]
    fn prop_window_contained_in_both_periods(
        a in prop::collection::vec(arb_period_spec(), 1..4),
        b in prop::collection::vec(arb_period_spec(), 1..4),
    ) {
        let schedules = vec![build_schedule("a", &a), build_schedule("b", &b)];

        for hit in IntersectionDetector::find_intersections(&schedules) {
            prop_assert_ne!(hit.first.user_id, hit.second.user_id);
            prop_assert!(hit.overlap_start <= hit.overlap_end);
            prop_assert!(hit.overlap_start >= hit.first.period_start);
            prop_assert!(hit.overlap_end <= hit.first.period_end);
            prop_assert!(hit.overlap_start >= hit.second.period_start);
            prop_assert!(hit.overlap_end <= hit.second.period_end);
            prop_assert_eq!(hit.days, VacationPeriod::span_days(hit.overlap_start, hit.overlap_end));
            prop_assert!(hit.days >= 1);
        }
    }

    /// A user's own requests never produce intersections, however many
    /// they have and however much they overlap themselves.
    #[test]
    fn prop_single_user_never_intersects(
        specs in prop::collection::vec(prop::collection::vec(arb_period_spec(), 1..4), 2..5)
    ) {
        let user = UserId::new();
        let schedules: Vec<_> = specs
            .iter()
            .map(|s| {
                let mut schedule = build_schedule("solo", s);
                schedule.user_id = user;
                schedule
            })
            .collect();

        prop_assert!(IntersectionDetector::find_intersections(&schedules).is_empty());
    }
}
