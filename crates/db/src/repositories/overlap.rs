//! Overlap repository: intersection reports over approved absences.
//!
//! Intersections are derived on demand and never persisted; this
//! repository only assembles the approved schedules for a unit and
//! year and hands them to the core detector.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use ferio_core::overlap::detector::IntersectionDetector;
use ferio_core::overlap::types::{ApprovedSchedule, Intersection};
use ferio_core::request::types::VacationPeriod;
use ferio_core::workflow::error::WorkflowError;
use ferio_shared::types::{PeriodId, RequestId, UnitId, UserId};

use crate::entities::{
    sea_orm_active_enums::RequestStatus as DbStatus, users, vacation_periods, vacation_requests,
};

/// Overlap repository.
#[derive(Debug, Clone)]
pub struct OverlapRepository {
    db: DatabaseConnection,
}

impl OverlapRepository {
    /// Creates a new overlap repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds all pairwise intersections between approved vacation
    /// periods of different users in one unit and planning year.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_intersections(
        &self,
        unit_id: UnitId,
        year: i32,
    ) -> Result<Vec<Intersection>, WorkflowError> {
        let members = users::Entity::find()
            .filter(users::Column::UnitId.eq(unit_id.into_inner()))
            .all(&self.db)
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?;

        if members.is_empty() {
            return Ok(Vec::new());
        }
        let member_ids: Vec<Uuid> = members.iter().map(|u| u.id).collect();

        let rows = vacation_requests::Entity::find()
            .filter(vacation_requests::Column::UserId.is_in(member_ids))
            .filter(vacation_requests::Column::Year.eq(year))
            .filter(vacation_requests::Column::Status.eq(DbStatus::Approved))
            .order_by_asc(vacation_requests::Column::CreatedAt)
            .find_with_related(vacation_periods::Entity)
            .all(&self.db)
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?;

        let schedules: Vec<ApprovedSchedule> = rows
            .into_iter()
            .map(|(request, periods)| {
                let user_name = members
                    .iter()
                    .find(|u| u.id == request.user_id)
                    .map(|u| u.full_name.clone())
                    .unwrap_or_default();
                ApprovedSchedule {
                    request_id: RequestId::from_uuid(request.id),
                    user_id: UserId::from_uuid(request.user_id),
                    user_name,
                    periods: periods
                        .iter()
                        .map(|p| VacationPeriod {
                            id: PeriodId::from_uuid(p.id),
                            start_date: p.start_date,
                            end_date: p.end_date,
                            days_count: p.days_count,
                        })
                        .collect(),
                }
            })
            .collect();

        Ok(IntersectionDetector::find_intersections(&schedules))
    }
}
