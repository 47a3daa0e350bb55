//! Quota ledger repository.
//!
//! Reads fall back to a synthesized default when no ledger row exists
//! for the (user, year); writes are admin-only and always persist a
//! row. The ledger rows themselves are moved only by the request
//! repository, inside the same transaction as the status write.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use ferio_core::identity::Actor;
use ferio_core::quota::service::QuotaService;
use ferio_core::quota::types::Quota;
use ferio_core::workflow::error::WorkflowError;
use ferio_shared::types::UserId;

use crate::entities::vacation_limits;

/// Converts a ledger row into the core quota value.
pub(crate) fn limit_to_core(model: &vacation_limits::Model) -> Quota {
    Quota {
        user_id: UserId::from_uuid(model.user_id),
        year: model.year,
        total_days: model.total_days,
        used_days: model.used_days,
    }
}

/// Quota ledger repository.
#[derive(Debug, Clone)]
pub struct QuotaRepository {
    db: DatabaseConnection,
    default_annual_days: i32,
}

impl QuotaRepository {
    /// Creates a new quota repository.
    ///
    /// `default_annual_days` is the configured ceiling used when a user
    /// row carries no override and no ledger row exists yet.
    #[must_use]
    pub const fn new(db: DatabaseConnection, default_annual_days: i32) -> Self {
        Self {
            db,
            default_annual_days,
        }
    }

    /// Returns the quota for a (user, year).
    ///
    /// When no ledger row exists the quota is synthesized from the
    /// user's default ceiling without persisting anything; a row is
    /// only materialized by [`set_quota`](Self::set_quota) or by the
    /// first approval debit.
    ///
    /// # Errors
    ///
    /// * `WorkflowError::UserNotFound` if the user does not exist
    /// * `WorkflowError::Database` on query failure
    pub async fn get_quota(&self, user_id: UserId, year: i32) -> Result<Quota, WorkflowError> {
        let row = vacation_limits::Entity::find()
            .filter(vacation_limits::Column::UserId.eq(user_id.into_inner()))
            .filter(vacation_limits::Column::Year.eq(year))
            .one(&self.db)
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?;

        if let Some(model) = row {
            return Ok(limit_to_core(&model));
        }

        let user = crate::entities::users::Entity::find_by_id(user_id.into_inner())
            .one(&self.db)
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?
            .ok_or(WorkflowError::UserNotFound(user_id))?;

        let ceiling = if user.default_annual_days > 0 {
            user.default_annual_days
        } else {
            self.default_annual_days
        };
        Ok(Quota::synthesized(user_id, year, ceiling))
    }

    /// Sets the total allowance for a (user, year), resetting usage.
    ///
    /// Admin-only. Upserts the ledger row keyed by the unique
    /// (user, year) pair.
    ///
    /// # Errors
    ///
    /// * `WorkflowError::NotAuthorized` if the actor is not an admin
    /// * `WorkflowError::Quota` if the allowance is negative
    /// * `WorkflowError::Database` on write failure
    pub async fn set_quota(
        &self,
        actor: &Actor,
        user_id: UserId,
        year: i32,
        total_days: i32,
    ) -> Result<Quota, WorkflowError> {
        if !actor.is_admin {
            return Err(WorkflowError::NotAuthorized {
                user_id: actor.user_id,
            });
        }

        let quota = QuotaService::set_limit(user_id, year, total_days)?;

        let now = Utc::now().into();
        let existing = vacation_limits::Entity::find()
            .filter(vacation_limits::Column::UserId.eq(user_id.into_inner()))
            .filter(vacation_limits::Column::Year.eq(year))
            .one(&self.db)
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?;

        match existing {
            Some(model) => {
                let mut active: vacation_limits::ActiveModel = model.into();
                active.total_days = Set(quota.total_days);
                active.used_days = Set(quota.used_days);
                active.updated_at = Set(now);
                active
                    .update(&self.db)
                    .await
                    .map_err(|e| WorkflowError::Database(e.to_string()))?;
            }
            None => {
                let active = vacation_limits::ActiveModel {
                    id: Set(Uuid::now_v7()),
                    user_id: Set(user_id.into_inner()),
                    year: Set(year),
                    total_days: Set(quota.total_days),
                    used_days: Set(quota.used_days),
                    created_at: Set(now),
                    updated_at: Set(now),
                };
                active
                    .insert(&self.db)
                    .await
                    .map_err(|e| WorkflowError::Database(e.to_string()))?;
            }
        }

        Ok(quota)
    }
}
