//! `SeaORM` Entity for users table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub full_name: String,
    pub unit_id: Option<Uuid>,
    pub is_admin: bool,
    pub is_manager: bool,
    pub default_annual_days: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organizational_units::Entity",
        from = "Column::UnitId",
        to = "super::organizational_units::Column::Id"
    )]
    OrganizationalUnits,
    #[sea_orm(has_many = "super::vacation_requests::Entity")]
    VacationRequests,
    #[sea_orm(has_many = "super::vacation_limits::Entity")]
    VacationLimits,
}

impl Related<super::organizational_units::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrganizationalUnits.def()
    }
}

impl Related<super::vacation_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VacationRequests.def()
    }
}

impl Related<super::vacation_limits::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VacationLimits.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
