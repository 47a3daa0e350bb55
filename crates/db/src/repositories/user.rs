//! User repository for directory lookups.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use ferio_core::identity::User;
use ferio_shared::types::{UnitId, UserId};

use crate::entities::users;

/// Converts a user row into the core read model.
pub(crate) fn user_to_core(model: &users::Model) -> User {
    User {
        id: UserId::from_uuid(model.id),
        full_name: model.full_name.clone(),
        unit_id: model.unit_id.map(UnitId::from_uuid),
        is_admin: model.is_admin,
        is_manager: model.is_manager,
        default_annual_days: model.default_annual_days,
    }
}

/// User repository for directory lookups.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DbErr> {
        let model = users::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?;
        Ok(model.as_ref().map(user_to_core))
    }

    /// Lists the members of an organizational unit, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_unit_members(&self, unit_id: UnitId) -> Result<Vec<User>, DbErr> {
        let models = users::Entity::find()
            .filter(users::Column::UnitId.eq(unit_id.into_inner()))
            .order_by_asc(users::Column::FullName)
            .all(&self.db)
            .await?;
        Ok(models.iter().map(user_to_core).collect())
    }
}
