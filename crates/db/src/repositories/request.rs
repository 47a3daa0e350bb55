//! Vacation request repository for lifecycle transitions.
//!
//! Every transition follows the same shape: fetch, convert to core
//! types, run the pure workflow guard, then write. Approval and
//! cancellation pair the status write with the quota ledger movement
//! inside one transaction, taking a row lock on the (user, year)
//! ledger row so concurrent transitions for the same allowance
//! serialize at the database.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use ferio_core::identity::Actor;
use ferio_core::quota::error::QuotaError;
use ferio_core::quota::service::QuotaService;
use ferio_core::quota::types::Quota;
use ferio_core::request::error::ValidationError;
use ferio_core::request::types::{
    PeriodDraft, RequestStatus, VacationPeriod, VacationRequest,
};
use ferio_core::request::validation::PeriodValidator;
use ferio_core::workflow::authz::{AuthzPolicy, RequestScope};
use ferio_core::workflow::error::WorkflowError;
use ferio_core::workflow::service::WorkflowService;
use ferio_shared::config::PolicyConfig;
use ferio_shared::types::{PageRequest, PageResponse, PeriodId, RequestId, UserId};
use ferio_shared::{NotificationSink, QuotaPolicy};

use crate::entities::{
    sea_orm_active_enums::RequestStatus as DbStatus, users, vacation_limits, vacation_periods,
    vacation_requests,
};

use super::user::user_to_core;

/// Converts a stored status into the core status.
pub(crate) fn db_status_to_core(status: DbStatus) -> RequestStatus {
    match status {
        DbStatus::Draft => RequestStatus::Draft,
        DbStatus::Pending => RequestStatus::Pending,
        DbStatus::Approved => RequestStatus::Approved,
        DbStatus::Rejected => RequestStatus::Rejected,
        DbStatus::Cancelled => RequestStatus::Cancelled,
    }
}

/// Converts a core status into the stored status.
pub(crate) fn core_status_to_db(status: RequestStatus) -> DbStatus {
    match status {
        RequestStatus::Draft => DbStatus::Draft,
        RequestStatus::Pending => DbStatus::Pending,
        RequestStatus::Approved => DbStatus::Approved,
        RequestStatus::Rejected => DbStatus::Rejected,
        RequestStatus::Cancelled => DbStatus::Cancelled,
    }
}

/// Builds the domain request from its rows.
pub(crate) fn to_domain(
    request: &vacation_requests::Model,
    periods: &[vacation_periods::Model],
) -> VacationRequest {
    VacationRequest {
        id: RequestId::from_uuid(request.id),
        user_id: UserId::from_uuid(request.user_id),
        year: request.year,
        status: db_status_to_core(request.status),
        comment: request.comment.clone(),
        review_comment: request.review_comment.clone(),
        periods: periods
            .iter()
            .map(|p| VacationPeriod {
                id: PeriodId::from_uuid(p.id),
                start_date: p.start_date,
                end_date: p.end_date,
                days_count: p.days_count,
            })
            .collect(),
        created_at: request.created_at.with_timezone(&Utc),
        updated_at: request.updated_at.with_timezone(&Utc),
        submitted_at: request.submitted_at.map(|t| t.with_timezone(&Utc)),
        decided_at: request.decided_at.map(|t| t.with_timezone(&Utc)),
    }
}

/// Filters for request listings, applied after visibility scoping.
#[derive(Debug, Clone, Default)]
pub struct RequestFilter {
    /// Restrict to one planning year.
    pub year: Option<i32>,
    /// Restrict to one lifecycle status.
    pub status: Option<RequestStatus>,
    /// Restrict to one owner; narrowed to the actor's scope.
    pub user_id: Option<UserId>,
}

/// Vacation request repository for lifecycle transitions.
#[derive(Clone)]
pub struct RequestRepository {
    db: DatabaseConnection,
    quota_policy: QuotaPolicy,
    default_annual_days: i32,
    notifier: Arc<dyn NotificationSink>,
}

impl RequestRepository {
    /// Creates a new request repository.
    #[must_use]
    pub fn new(
        db: DatabaseConnection,
        policy: &PolicyConfig,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            db,
            quota_policy: policy.quota_policy,
            default_annual_days: policy.default_annual_days,
            notifier,
        }
    }

    /// Creates a draft request owned by the acting user.
    ///
    /// Only date sanity is checked here; the long-stretch and quota
    /// rules apply at submission, so an incomplete plan can be saved.
    ///
    /// # Errors
    ///
    /// * `WorkflowError::Validation` if a period is structurally invalid
    /// * `WorkflowError::Database` on write failure
    pub async fn create_draft(
        &self,
        actor: &Actor,
        year: i32,
        comment: Option<String>,
        drafts: &[PeriodDraft],
    ) -> Result<VacationRequest, WorkflowError> {
        if drafts.is_empty() {
            return Err(WorkflowError::Validation(ValidationError::EmptyRequest));
        }

        let mut rows = Vec::with_capacity(drafts.len());
        let request_id = Uuid::now_v7();
        let now = Utc::now().into();
        for draft in drafts {
            let start = draft
                .start_date
                .ok_or(WorkflowError::Validation(ValidationError::MissingDate {
                    which: "start",
                }))?;
            let end = draft
                .end_date
                .ok_or(WorkflowError::Validation(ValidationError::MissingDate {
                    which: "end",
                }))?;
            if end < start {
                return Err(WorkflowError::Validation(
                    ValidationError::InvalidDateRange { start, end },
                ));
            }
            let computed = i32::try_from(VacationPeriod::span_days(start, end))
                .map_err(|_| {
                    WorkflowError::Validation(ValidationError::InvalidDateRange { start, end })
                })?;
            if let Some(declared) = draft.days_count
                && declared != computed
            {
                return Err(WorkflowError::Validation(
                    ValidationError::DayCountMismatch {
                        declared,
                        computed,
                        start,
                    },
                ));
            }
            rows.push(vacation_periods::ActiveModel {
                id: Set(Uuid::now_v7()),
                request_id: Set(request_id),
                start_date: Set(start),
                end_date: Set(end),
                days_count: Set(computed),
                created_at: Set(now),
            });
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?;

        let request = vacation_requests::ActiveModel {
            id: Set(request_id),
            user_id: Set(actor.user_id.into_inner()),
            year: Set(year),
            status: Set(DbStatus::Draft),
            comment: Set(comment),
            review_comment: Set(None),
            submitted_at: Set(None),
            decided_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|e| WorkflowError::Database(e.to_string()))?;

        vacation_periods::Entity::insert_many(rows)
            .exec(&txn)
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?;

        let periods = self.load_periods(request_id).await?;
        Ok(to_domain(&request, &periods))
    }

    /// Fetches one request, enforcing visibility.
    ///
    /// # Errors
    ///
    /// * `WorkflowError::RequestNotFound` if the request does not exist
    /// * `WorkflowError::NotAuthorized` if the actor may not see it
    pub async fn get_request(
        &self,
        actor: &Actor,
        request_id: RequestId,
    ) -> Result<VacationRequest, WorkflowError> {
        let (request, periods, owner) = self.fetch_request(request_id).await?;
        let owner_core = user_to_core(&owner);
        if !actor.is_admin
            && !AuthzPolicy::is_owner(actor, owner_core.id)
            && !AuthzPolicy::is_manager_of(actor, &owner_core)
        {
            return Err(WorkflowError::NotAuthorized {
                user_id: actor.user_id,
            });
        }
        Ok(to_domain(&request, &periods))
    }

    /// Submits a draft request for review.
    ///
    /// Re-validates the stored periods against the owner's remaining
    /// quota and the consumption policy before the transition.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Request is not found
    /// - Actor is not the owner
    /// - Request is not in draft status
    /// - The periods fail validation
    /// - Database operation fails
    pub async fn submit_request(
        &self,
        actor: &Actor,
        request_id: RequestId,
    ) -> Result<VacationRequest, WorkflowError> {
        let (request, periods, owner) = self.fetch_request(request_id).await?;
        let owner_core = user_to_core(&owner);
        let year = request.year;

        let drafts: Vec<PeriodDraft> = periods
            .iter()
            .map(|p| PeriodDraft {
                start_date: Some(p.start_date),
                end_date: Some(p.end_date),
                days_count: Some(p.days_count),
            })
            .collect();

        let quota = self.fetch_quota(&owner, year).await?;
        let validated =
            PeriodValidator::validate(&drafts, year, quota.available_days(), self.quota_policy)?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?;

        let request = self.lock_request_row(&txn, request_id).await?;
        let action = WorkflowService::submit(db_status_to_core(request.status), actor, &owner_core)?;

        let now = Utc::now().into();
        let mut active: vacation_requests::ActiveModel = request.into();
        active.status = Set(core_status_to_db(action.new_status()));
        active.submitted_at = Set(Some(now));
        active.updated_at = Set(now);
        let updated = active
            .update(&txn)
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?;

        self.notify_unit_managers(&owner_core, validated.total_days)
            .await;

        Ok(to_domain(&updated, &periods))
    }

    /// Approves a pending request, debiting the owner's quota ledger.
    ///
    /// The status write and the ledger debit happen in one transaction.
    /// The request row is re-read and locked inside the transaction, so
    /// the guard always sees the committed status; two racing approvals
    /// serialize on the row locks and the loser gets an invalid
    /// transition instead of a second debit. The (user, year) ledger
    /// row lock additionally re-checks availability serially so racing
    /// approvals of different requests cannot overdraw the allowance
    /// together.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Request is not found
    /// - Actor may not review the owner's requests
    /// - Request is not in pending status
    /// - The total no longer fits the remaining quota
    /// - Database operation fails
    pub async fn approve_request(
        &self,
        actor: &Actor,
        request_id: RequestId,
    ) -> Result<VacationRequest, WorkflowError> {
        let (request, periods, owner) = self.fetch_request(request_id).await?;
        let owner_core = user_to_core(&owner);
        let requested_days: i32 = periods.iter().map(|p| p.days_count).sum();
        let year = request.year;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?;

        // Lock order everywhere: request row first, ledger row second.
        let request = self.lock_request_row(&txn, request_id).await?;
        let current_status = db_status_to_core(request.status);

        let limit_row = self.lock_limit_row(&txn, &owner, year, true).await?;
        let quota = super::quota::limit_to_core(&limit_row);

        // Guards run before any write; an error here rolls back the
        // still-untouched transaction on drop.
        let action =
            WorkflowService::approve(current_status, actor, &owner_core, requested_days, &quota)?;
        let adjusted = QuotaService::adjust_used(&quota, action.quota_delta())?;

        let now = Utc::now().into();
        let mut active: vacation_requests::ActiveModel = request.into();
        active.status = Set(core_status_to_db(action.new_status()));
        active.decided_at = Set(Some(now));
        active.updated_at = Set(now);
        let updated = active
            .update(&txn)
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?;

        self.apply_ledger_write(txn, limit_row, &adjusted, request_id, action.quota_delta())
            .await?;

        tracing::info!(
            %request_id,
            user_id = %owner_core.id,
            days = requested_days,
            "vacation request approved"
        );
        self.notifier.notify(
            owner_core.id,
            "Vacation request approved",
            &format!("Your {requested_days}-day vacation request was approved."),
        );

        Ok(to_domain(&updated, &periods))
    }

    /// Rejects a pending request, optionally recording a reason.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Request is not found
    /// - Actor may not review the owner's requests
    /// - Request is not in pending status
    /// - Database operation fails
    pub async fn reject_request(
        &self,
        actor: &Actor,
        request_id: RequestId,
        reason: Option<String>,
    ) -> Result<VacationRequest, WorkflowError> {
        let (_, periods, owner) = self.fetch_request(request_id).await?;
        let owner_core = user_to_core(&owner);

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?;

        let request = self.lock_request_row(&txn, request_id).await?;
        let action = WorkflowService::reject(
            db_status_to_core(request.status),
            actor,
            &owner_core,
            reason.clone(),
        )?;

        let now = Utc::now().into();
        let mut active: vacation_requests::ActiveModel = request.into();
        active.status = Set(core_status_to_db(action.new_status()));
        active.review_comment = Set(reason);
        active.decided_at = Set(Some(now));
        active.updated_at = Set(now);
        let updated = active
            .update(&txn)
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?;

        self.notifier.notify(
            owner_core.id,
            "Vacation request rejected",
            updated
                .review_comment
                .as_deref()
                .unwrap_or("Your vacation request was rejected."),
        );

        Ok(to_domain(&updated, &periods))
    }

    /// Cancels a draft, pending, or approved request.
    ///
    /// The status is re-read under a request-row lock so the refund
    /// decision matches the committed state; a racing double-cancel
    /// refunds once and the loser gets an invalid transition.
    /// Cancelling an approved request refunds the full debit in the
    /// same transaction as the status write, under the same ledger row
    /// lock as approval.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Request is not found
    /// - Request is in a terminal status
    /// - Actor may not cancel it
    /// - Database operation fails
    pub async fn cancel_request(
        &self,
        actor: &Actor,
        request_id: RequestId,
    ) -> Result<VacationRequest, WorkflowError> {
        let (request, periods, owner) = self.fetch_request(request_id).await?;
        let owner_core = user_to_core(&owner);
        let total_days: i32 = periods.iter().map(|p| p.days_count).sum();
        let year = request.year;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?;

        let request = self.lock_request_row(&txn, request_id).await?;
        let current_status = db_status_to_core(request.status);

        let action = WorkflowService::cancel(current_status, actor, &owner_core, total_days)?;
        let now = Utc::now().into();

        let updated = if action.quota_delta() == 0 {
            // No ledger movement; a single status write suffices.
            let mut active: vacation_requests::ActiveModel = request.into();
            active.status = Set(core_status_to_db(action.new_status()));
            active.decided_at = Set(Some(now));
            active.updated_at = Set(now);
            let updated = active
                .update(&txn)
                .await
                .map_err(|e| WorkflowError::Database(e.to_string()))?;
            txn.commit()
                .await
                .map_err(|e| WorkflowError::Database(e.to_string()))?;
            updated
        } else {
            // An approved request was debited, so the row must exist.
            let limit_row = self.lock_limit_row(&txn, &owner, year, false).await?;
            let quota = super::quota::limit_to_core(&limit_row);
            let adjusted = QuotaService::adjust_used(&quota, action.quota_delta())?;

            let mut active: vacation_requests::ActiveModel = request.into();
            active.status = Set(core_status_to_db(action.new_status()));
            active.decided_at = Set(Some(now));
            active.updated_at = Set(now);
            let updated = active
                .update(&txn)
                .await
                .map_err(|e| WorkflowError::Database(e.to_string()))?;

            self.apply_ledger_write(txn, limit_row, &adjusted, request_id, action.quota_delta())
                .await?;

            tracing::info!(
                %request_id,
                user_id = %owner_core.id,
                days = total_days,
                "approved vacation request cancelled, quota refunded"
            );
            updated
        };

        self.notifier.notify(
            owner_core.id,
            "Vacation request cancelled",
            "Your vacation request was cancelled.",
        );

        Ok(to_domain(&updated, &periods))
    }

    /// Lists requests visible to the actor, most recent first.
    ///
    /// Admins see everything, managers their unit, everyone else their
    /// own requests; the filter only ever narrows that scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_requests(
        &self,
        actor: &Actor,
        filter: &RequestFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<VacationRequest>, WorkflowError> {
        let mut query = vacation_requests::Entity::find();

        match AuthzPolicy::list_scope(actor) {
            RequestScope::All => {
                if let Some(user_id) = filter.user_id {
                    query = query.filter(
                        vacation_requests::Column::UserId.eq(user_id.into_inner()),
                    );
                }
            }
            RequestScope::Unit(unit_id) => {
                let member_ids: Vec<Uuid> = users::Entity::find()
                    .filter(users::Column::UnitId.eq(unit_id.into_inner()))
                    .all(&self.db)
                    .await
                    .map_err(|e| WorkflowError::Database(e.to_string()))?
                    .into_iter()
                    .map(|u| u.id)
                    .collect();

                if let Some(user_id) = filter.user_id {
                    if !member_ids.contains(&user_id.into_inner()) {
                        return Ok(Self::empty_page(page));
                    }
                    query = query.filter(
                        vacation_requests::Column::UserId.eq(user_id.into_inner()),
                    );
                } else {
                    query =
                        query.filter(vacation_requests::Column::UserId.is_in(member_ids));
                }
            }
            RequestScope::Own(own_id) => {
                if let Some(user_id) = filter.user_id
                    && user_id != own_id
                {
                    return Ok(Self::empty_page(page));
                }
                query =
                    query.filter(vacation_requests::Column::UserId.eq(own_id.into_inner()));
            }
        }

        if let Some(year) = filter.year {
            query = query.filter(vacation_requests::Column::Year.eq(year));
        }
        if let Some(status) = filter.status {
            query = query.filter(vacation_requests::Column::Status.eq(core_status_to_db(status)));
        }

        let total = query
            .clone()
            .count(&self.db)
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?;

        let rows = query
            .order_by_desc(vacation_requests::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?;

        let period_rows = rows
            .load_many(vacation_periods::Entity, &self.db)
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?;

        let data = rows
            .iter()
            .zip(period_rows.iter())
            .map(|(request, periods)| to_domain(request, periods))
            .collect();

        Ok(PageResponse::new(data, page.page, page.per_page, total))
    }

    fn empty_page(page: &PageRequest) -> PageResponse<VacationRequest> {
        PageResponse::new(Vec::new(), page.page, page.per_page, 0)
    }

    /// Fetches a request with its periods and owner.
    async fn fetch_request(
        &self,
        request_id: RequestId,
    ) -> Result<
        (
            vacation_requests::Model,
            Vec<vacation_periods::Model>,
            users::Model,
        ),
        WorkflowError,
    > {
        let request = vacation_requests::Entity::find_by_id(request_id.into_inner())
            .one(&self.db)
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?
            .ok_or(WorkflowError::RequestNotFound(request_id))?;

        let periods = self.load_periods(request.id).await?;

        let owner = users::Entity::find_by_id(request.user_id)
            .one(&self.db)
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?
            .ok_or_else(|| WorkflowError::UserNotFound(UserId::from_uuid(request.user_id)))?;

        Ok((request, periods, owner))
    }

    async fn load_periods(
        &self,
        request_id: Uuid,
    ) -> Result<Vec<vacation_periods::Model>, WorkflowError> {
        vacation_periods::Entity::find()
            .filter(vacation_periods::Column::RequestId.eq(request_id))
            .order_by_asc(vacation_periods::Column::StartDate)
            .all(&self.db)
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))
    }

    /// Re-reads the request row under the transaction with a row lock.
    ///
    /// Transition guards must run against this fresh status, not the
    /// pre-transaction snapshot: a transition committed in between
    /// (say, a racing approval of the same request) would otherwise be
    /// replayed, moving the ledger twice.
    async fn lock_request_row(
        &self,
        txn: &sea_orm::DatabaseTransaction,
        request_id: RequestId,
    ) -> Result<vacation_requests::Model, WorkflowError> {
        vacation_requests::Entity::find_by_id(request_id.into_inner())
            .lock_exclusive()
            .one(txn)
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?
            .ok_or(WorkflowError::RequestNotFound(request_id))
    }

    /// Reads the owner's quota for a year, synthesizing the default
    /// ceiling when no ledger row exists yet.
    async fn fetch_quota(
        &self,
        owner: &users::Model,
        year: i32,
    ) -> Result<Quota, WorkflowError> {
        let row = vacation_limits::Entity::find()
            .filter(vacation_limits::Column::UserId.eq(owner.id))
            .filter(vacation_limits::Column::Year.eq(year))
            .one(&self.db)
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?;

        Ok(row.map_or_else(
            || {
                let ceiling = if owner.default_annual_days > 0 {
                    owner.default_annual_days
                } else {
                    self.default_annual_days
                };
                Quota::synthesized(UserId::from_uuid(owner.id), year, ceiling)
            },
            |model| super::quota::limit_to_core(&model),
        ))
    }

    /// Locks the (user, year) ledger row for update.
    ///
    /// With `materialize` set, a missing row is created from the
    /// owner's default ceiling; this is the first-debit path. Without
    /// it, a missing row is an error, because a refund presupposes a
    /// prior debit.
    async fn lock_limit_row(
        &self,
        txn: &sea_orm::DatabaseTransaction,
        owner: &users::Model,
        year: i32,
        materialize: bool,
    ) -> Result<vacation_limits::Model, WorkflowError> {
        let row = vacation_limits::Entity::find()
            .filter(vacation_limits::Column::UserId.eq(owner.id))
            .filter(vacation_limits::Column::Year.eq(year))
            .lock_exclusive()
            .one(txn)
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))?;

        match row {
            Some(model) => Ok(model),
            None if materialize => {
                let now = Utc::now().into();
                let ceiling = if owner.default_annual_days > 0 {
                    owner.default_annual_days
                } else {
                    self.default_annual_days
                };
                vacation_limits::ActiveModel {
                    id: Set(Uuid::now_v7()),
                    user_id: Set(owner.id),
                    year: Set(year),
                    total_days: Set(ceiling),
                    used_days: Set(0),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(txn)
                .await
                .map_err(|e| WorkflowError::Database(e.to_string()))
            }
            None => Err(WorkflowError::Quota(QuotaError::LimitNotFound {
                user_id: UserId::from_uuid(owner.id),
                year,
            })),
        }
    }

    /// Writes the adjusted ledger row and commits.
    ///
    /// The status write already happened on `txn`. If the ledger write
    /// fails the transaction is rolled back so the two never diverge; a
    /// rollback that itself fails is the one condition reported as
    /// [`WorkflowError::LedgerInconsistency`].
    async fn apply_ledger_write(
        &self,
        txn: sea_orm::DatabaseTransaction,
        limit_row: vacation_limits::Model,
        adjusted: &Quota,
        request_id: RequestId,
        delta: i32,
    ) -> Result<(), WorkflowError> {
        let now = Utc::now().into();
        let mut limit_active: vacation_limits::ActiveModel = limit_row.into();
        limit_active.used_days = Set(adjusted.used_days);
        limit_active.updated_at = Set(now);

        if let Err(write_err) = limit_active.update(&txn).await {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!(
                    %request_id,
                    days = delta,
                    write_error = %write_err,
                    rollback_error = %rollback_err,
                    "status written but ledger adjustment failed and rollback did not complete"
                );
                return Err(WorkflowError::LedgerInconsistency {
                    request_id,
                    days: delta,
                });
            }
            return Err(WorkflowError::Database(write_err.to_string()));
        }

        txn.commit()
            .await
            .map_err(|e| WorkflowError::Database(e.to_string()))
    }

    /// Tells the owner's unit managers that a request awaits review.
    ///
    /// Notifications are fire-and-forget: the transition already
    /// committed, so a failed manager lookup is logged and swallowed
    /// rather than surfaced as a failure of the submission.
    async fn notify_unit_managers(&self, owner: &ferio_core::identity::User, total_days: i32) {
        let Some(unit_id) = owner.unit_id else {
            return;
        };
        let managers = match users::Entity::find()
            .filter(users::Column::UnitId.eq(unit_id.into_inner()))
            .filter(users::Column::IsManager.eq(true))
            .all(&self.db)
            .await
        {
            Ok(managers) => managers,
            Err(e) => {
                tracing::warn!(
                    user_id = %owner.id,
                    error = %e,
                    "manager lookup failed, submission notification skipped"
                );
                return;
            }
        };

        for manager in &managers {
            self.notifier.notify(
                UserId::from_uuid(manager.id),
                "Vacation request pending review",
                &format!(
                    "{} submitted a {total_days}-day vacation request.",
                    owner.full_name
                ),
            );
        }
    }
}
