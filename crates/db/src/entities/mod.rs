//! `SeaORM` entity definitions.

pub mod organizational_units;
pub mod sea_orm_active_enums;
pub mod users;
pub mod vacation_limits;
pub mod vacation_periods;
pub mod vacation_requests;
