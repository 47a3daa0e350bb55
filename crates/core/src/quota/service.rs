//! Pure quota ledger arithmetic.
//!
//! All methods are associated functions over value types; the database
//! layer owns reading and writing the rows these functions produce.

use ferio_shared::types::UserId;

use crate::quota::error::QuotaError;
use crate::quota::types::Quota;

/// Stateless service for quota ledger mutations.
pub struct QuotaService;

impl QuotaService {
    /// Builds a fresh ledger row for an administrative reset.
    ///
    /// Resets `used_days` to zero regardless of any prior row.
    ///
    /// # Errors
    ///
    /// Returns `QuotaError::InvalidQuota` if `total_days` is negative.
    pub fn set_limit(user_id: UserId, year: i32, total_days: i32) -> Result<Quota, QuotaError> {
        if total_days < 0 {
            return Err(QuotaError::InvalidQuota { days: total_days });
        }

        Ok(Quota {
            user_id,
            year,
            total_days,
            used_days: 0,
        })
    }

    /// Applies `used_days += delta` to a ledger row.
    ///
    /// `delta` is positive for an approval debit and negative for a
    /// cancellation refund. The ceiling (`used_days <= total_days`) is
    /// deliberately not checked here; the workflow verifies availability
    /// before debiting so the ledger stays a composable accumulator.
    ///
    /// # Errors
    ///
    /// Returns `QuotaError::NegativeBalance` if the adjustment would
    /// drive `used_days` below zero.
    pub fn adjust_used(quota: &Quota, delta: i32) -> Result<Quota, QuotaError> {
        let resulting = quota.used_days + delta;
        if resulting < 0 {
            return Err(QuotaError::NegativeBalance {
                user_id: quota.user_id,
                year: quota.year,
                resulting,
            });
        }

        Ok(Quota {
            used_days: resulting,
            ..*quota
        })
    }
}
