//! Active enums mapped to Postgres enum types.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Vacation request lifecycle status, stored as the `request_status`
/// Postgres enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "request_status")]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Request is being drafted.
    #[sea_orm(string_value = "draft")]
    Draft,
    /// Request awaits review.
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Request is approved and debited against the ledger.
    #[sea_orm(string_value = "approved")]
    Approved,
    /// Request was rejected (terminal).
    #[sea_orm(string_value = "rejected")]
    Rejected,
    /// Request was cancelled (terminal).
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}
