//! Per-(user, year) vacation day ledger.
//!
//! The ledger is a dumb accumulator: it guarantees `used_days` never goes
//! negative, but the ceiling check (`used_days <= total_days`) belongs to
//! the approval workflow, which verifies availability before debiting.
//!
//! # Modules
//!
//! - `types` - Ledger row and snapshot types
//! - `error` - Quota-specific error types
//! - `service` - Pure ledger arithmetic

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::QuotaError;
pub use service::QuotaService;
pub use types::Quota;
