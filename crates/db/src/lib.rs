//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository abstractions for data access
//! - Database migrations
//!
//! Repositories orchestrate the pure guards from `ferio-core`: fetch,
//! convert, guard, write. Status writes and quota ledger writes that
//! belong together happen in one database transaction.

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{
    OverlapRepository, QuotaRepository, RequestFilter, RequestRepository, UserRepository,
};

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Establishes a connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
