//! Shared type definitions.

pub mod id;
pub mod pagination;

pub use id::{PeriodId, RequestId, UnitId, UserId};
pub use pagination::{PageMeta, PageRequest, PageResponse};
