//! Pairwise overlap detection over approved schedules.

use crate::overlap::types::{ApprovedSchedule, Intersection, OverlapParty};
use crate::request::types::VacationPeriod;

/// Stateless detector for overlapping approved absences.
///
/// Complexity is `O(n² · p²)` in request count `n` and periods per
/// request `p`, which is fine for per-unit datasets. If unit sizes
/// grow, replace with a sweep line over sorted interval endpoints
/// (`O(n log n)`).
pub struct IntersectionDetector;

impl IntersectionDetector {
    /// Finds every overlap between periods of two *different* users.
    ///
    /// Emits one record per overlapping period pair, in discovery
    /// order. Output ordering carries no semantics; treat the result
    /// as a set. Touching endpoints do not count as overlap.
    #[must_use]
    pub fn find_intersections(schedules: &[ApprovedSchedule]) -> Vec<Intersection> {
        let mut found = Vec::new();

        for (i, first) in schedules.iter().enumerate() {
            for second in &schedules[i + 1..] {
                if first.user_id == second.user_id {
                    continue;
                }

                for p1 in &first.periods {
                    for p2 in &second.periods {
                        if let Some((start, end)) = p1.overlap_window(p2) {
                            found.push(Intersection {
                                first: party(first, p1),
                                second: party(second, p2),
                                overlap_start: start,
                                overlap_end: end,
                                days: VacationPeriod::span_days(start, end),
                            });
                        }
                    }
                }
            }
        }

        found
    }
}

fn party(schedule: &ApprovedSchedule, period: &VacationPeriod) -> OverlapParty {
    OverlapParty {
        user_id: schedule.user_id,
        user_name: schedule.user_name.clone(),
        request_id: schedule.request_id,
        period_start: period.start_date,
        period_end: period.end_date,
    }
}
