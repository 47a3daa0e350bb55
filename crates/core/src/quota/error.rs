//! Quota ledger error types.

use thiserror::Error;

use ferio_shared::types::UserId;

/// Errors that can occur during quota ledger operations.
#[derive(Debug, Error)]
pub enum QuotaError {
    /// An administrative reset supplied a negative day ceiling.
    #[error("Invalid quota: total days must not be negative, got {days}")]
    InvalidQuota {
        /// The rejected day ceiling.
        days: i32,
    },

    /// No ledger row exists for the (user, year) being adjusted.
    #[error("No vacation limit found for user {user_id} in year {year}")]
    LimitNotFound {
        /// The user whose ledger row is missing.
        user_id: UserId,
        /// The planning year.
        year: i32,
    },

    /// An adjustment would drive `used_days` below zero.
    #[error("Adjustment would leave user {user_id} with {resulting} used days in year {year}")]
    NegativeBalance {
        /// The user whose balance was adjusted.
        user_id: UserId,
        /// The planning year.
        year: i32,
        /// The negative balance the adjustment would have produced.
        resulting: i32,
    },
}

impl QuotaError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidQuota { .. } => 400,
            Self::LimitNotFound { .. } => 404,
            Self::NegativeBalance { .. } => 422,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidQuota { .. } => "INVALID_QUOTA",
            Self::LimitNotFound { .. } => "LIMIT_NOT_FOUND",
            Self::NegativeBalance { .. } => "NEGATIVE_BALANCE",
        }
    }
}
