//! Property-based tests for the quota ledger.

use proptest::prelude::*;

use ferio_shared::types::UserId;

use crate::quota::service::QuotaService;
use crate::quota::types::Quota;

/// Strategy for a plausible ledger row.
fn arb_quota() -> impl Strategy<Value = Quota> {
    (0i32..400, 0i32..400).prop_map(|(total, used)| Quota {
        user_id: UserId::new(),
        year: 2026,
        total_days: total,
        used_days: used,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `used_days` never goes negative, whatever sequence of adjustments
    /// is applied (failed adjustments leave the row untouched).
    #[test]
    fn prop_used_days_never_negative(
        quota in arb_quota(),
        deltas in prop::collection::vec(-50i32..50, 0..20)
    ) {
        let mut current = quota;
        for delta in deltas {
            if let Ok(updated) = QuotaService::adjust_used(&current, delta) {
                current = updated;
            }
            prop_assert!(current.used_days >= 0);
        }
    }

    /// A debit followed by an equal refund restores the original balance.
    #[test]
    fn prop_refund_reverses_debit(quota in arb_quota(), days in 0i32..100) {
        let debited = QuotaService::adjust_used(&quota, days).unwrap();
        let refunded = QuotaService::adjust_used(&debited, -days).unwrap();
        prop_assert_eq!(refunded, quota);
    }

    /// An administrative reset always yields a zero-used row with the
    /// requested ceiling, or rejects a negative ceiling.
    #[test]
    fn prop_set_limit_resets(total in -50i32..400) {
        match QuotaService::set_limit(UserId::new(), 2026, total) {
            Ok(row) => {
                prop_assert!(total >= 0);
                prop_assert_eq!(row.total_days, total);
                prop_assert_eq!(row.used_days, 0);
                prop_assert_eq!(row.available_days(), total);
            }
            Err(_) => prop_assert!(total < 0),
        }
    }

    /// Available days is always the ceiling minus the running debit.
    #[test]
    fn prop_available_days_identity(quota in arb_quota()) {
        prop_assert_eq!(quota.available_days(), quota.total_days - quota.used_days);
    }
}
