//! Cross-user intersection detection for approved absences.
//!
//! # Modules
//!
//! - `types` - Input view and intersection record types
//! - `detector` - Pairwise overlap detection

pub mod detector;
pub mod types;

#[cfg(test)]
mod detector_props;

pub use detector::IntersectionDetector;
pub use types::{ApprovedSchedule, Intersection, OverlapParty};
