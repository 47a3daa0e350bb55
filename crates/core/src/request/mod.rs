//! Vacation requests, periods, and the period validator.
//!
//! # Modules
//!
//! - `types` - Request and period domain types, lifecycle status
//! - `error` - Validation error types
//! - `validation` - Structural checks run before a request may be submitted

pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use error::ValidationError;
pub use types::{PeriodDraft, RequestStatus, VacationPeriod, VacationRequest};
pub use validation::{PeriodValidator, ValidatedPeriods, MIN_LONG_STRETCH_DAYS};
