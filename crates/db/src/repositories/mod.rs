//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the
//! application. Lifecycle guards stay in `ferio-core`; this layer
//! fetches, converts, guards, and writes.

pub mod overlap;
pub mod quota;
pub mod request;
pub mod user;

pub use overlap::OverlapRepository;
pub use quota::QuotaRepository;
pub use request::{RequestFilter, RequestRepository};
pub use user::UserRepository;

#[cfg(test)]
mod request_tests;
