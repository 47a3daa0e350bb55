//! Core business logic for Ferio.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and workflow guards live here.
//!
//! # Modules
//!
//! - `identity` - User read model and acting principal
//! - `quota` - Per-(user, year) vacation day ledger
//! - `request` - Vacation requests, periods, and the period validator
//! - `overlap` - Cross-user intersection detection for approved absences
//! - `workflow` - Approval state machine and authorization policy

pub mod identity;
pub mod overlap;
pub mod quota;
pub mod request;
pub mod workflow;
