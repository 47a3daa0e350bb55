//! Unit tests for the request repository's pure conversion layer.
//!
//! Repository methods that touch the database are exercised against a
//! real Postgres in deployment environments; here we cover the mapping
//! between rows and domain types, which is where subtle drift between
//! the stored and in-memory lifecycle would hide.

use chrono::{NaiveDate, Utc};
use rstest::rstest;
use uuid::Uuid;

use ferio_core::request::types::RequestStatus;

use crate::entities::{
    sea_orm_active_enums::RequestStatus as DbStatus, vacation_periods, vacation_requests,
};

use super::request::{core_status_to_db, db_status_to_core, to_domain, RequestFilter};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn request_row(status: DbStatus) -> vacation_requests::Model {
    let now = Utc::now().into();
    vacation_requests::Model {
        id: Uuid::now_v7(),
        user_id: Uuid::now_v7(),
        year: 2026,
        status,
        comment: Some("summer plans".to_string()),
        review_comment: None,
        submitted_at: None,
        decided_at: None,
        created_at: now,
        updated_at: now,
    }
}

fn period_row(request_id: Uuid, start: NaiveDate, end: NaiveDate, days: i32) -> vacation_periods::Model {
    vacation_periods::Model {
        id: Uuid::now_v7(),
        request_id,
        start_date: start,
        end_date: end,
        days_count: days,
        created_at: Utc::now().into(),
    }
}

#[rstest]
#[case(RequestStatus::Draft)]
#[case(RequestStatus::Pending)]
#[case(RequestStatus::Approved)]
#[case(RequestStatus::Rejected)]
#[case(RequestStatus::Cancelled)]
fn test_status_mapping_round_trips(#[case] status: RequestStatus) {
    assert_eq!(db_status_to_core(core_status_to_db(status)), status);
}

#[test]
fn test_db_status_strings_match_core() {
    // The Postgres enum labels and the core serde names must agree so
    // raw SQL filters and JSON payloads mean the same thing.
    for (db, core) in [
        (DbStatus::Draft, RequestStatus::Draft),
        (DbStatus::Pending, RequestStatus::Pending),
        (DbStatus::Approved, RequestStatus::Approved),
        (DbStatus::Rejected, RequestStatus::Rejected),
        (DbStatus::Cancelled, RequestStatus::Cancelled),
    ] {
        let db_json = serde_json::to_string(&db).unwrap();
        let core_json = serde_json::to_string(&core).unwrap();
        assert_eq!(db_json, core_json);
    }
}

#[test]
fn test_to_domain_maps_rows() {
    let request = request_row(DbStatus::Pending);
    let periods = vec![
        period_row(request.id, date(2026, 6, 1), date(2026, 6, 14), 14),
        period_row(request.id, date(2026, 9, 1), date(2026, 9, 14), 14),
    ];

    let domain = to_domain(&request, &periods);

    assert_eq!(domain.id.into_inner(), request.id);
    assert_eq!(domain.user_id.into_inner(), request.user_id);
    assert_eq!(domain.year, 2026);
    assert_eq!(domain.status, RequestStatus::Pending);
    assert_eq!(domain.comment.as_deref(), Some("summer plans"));
    assert_eq!(domain.periods.len(), 2);
    assert_eq!(domain.total_days(), 28);
    assert_eq!(domain.periods[0].start_date, date(2026, 6, 1));
}

#[test]
fn test_to_domain_with_no_periods() {
    let request = request_row(DbStatus::Draft);
    let domain = to_domain(&request, &[]);
    assert!(domain.periods.is_empty());
    assert_eq!(domain.total_days(), 0);
}

#[test]
fn test_filter_default_is_unrestricted() {
    let filter = RequestFilter::default();
    assert!(filter.year.is_none());
    assert!(filter.status.is_none());
    assert!(filter.user_id.is_none());
}
