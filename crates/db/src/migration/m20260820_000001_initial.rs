//! Initial database migration.
//!
//! Creates the request lifecycle enum, the directory tables, the
//! request/period tables, and the per-(user, year) quota ledger.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(ENUMS_SQL).await?;
        db.execute_unprepared(ORGANIZATIONAL_UNITS_SQL).await?;
        db.execute_unprepared(USERS_SQL).await?;
        db.execute_unprepared(VACATION_REQUESTS_SQL).await?;
        db.execute_unprepared(VACATION_PERIODS_SQL).await?;
        db.execute_unprepared(VACATION_LIMITS_SQL).await?;
        db.execute_unprepared(INDEXES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_SQL).await?;
        Ok(())
    }
}

const ENUMS_SQL: &str = r"
CREATE TYPE request_status AS ENUM (
    'draft',
    'pending',
    'approved',
    'rejected',
    'cancelled'
);
";

const ORGANIZATIONAL_UNITS_SQL: &str = r"
CREATE TABLE organizational_units (
    id UUID PRIMARY KEY,
    name VARCHAR(255) NOT NULL UNIQUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const USERS_SQL: &str = r"
CREATE TABLE users (
    id UUID PRIMARY KEY,
    full_name VARCHAR(255) NOT NULL,
    unit_id UUID REFERENCES organizational_units(id) ON DELETE SET NULL,
    is_admin BOOLEAN NOT NULL DEFAULT FALSE,
    is_manager BOOLEAN NOT NULL DEFAULT FALSE,
    default_annual_days INTEGER NOT NULL DEFAULT 28
        CHECK (default_annual_days >= 0),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const VACATION_REQUESTS_SQL: &str = r"
CREATE TABLE vacation_requests (
    id UUID PRIMARY KEY,
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    year INTEGER NOT NULL,
    status request_status NOT NULL DEFAULT 'draft',
    comment TEXT,
    review_comment TEXT,
    submitted_at TIMESTAMPTZ,
    decided_at TIMESTAMPTZ,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
";

const VACATION_PERIODS_SQL: &str = r"
CREATE TABLE vacation_periods (
    id UUID PRIMARY KEY,
    request_id UUID NOT NULL REFERENCES vacation_requests(id) ON DELETE CASCADE,
    start_date DATE NOT NULL,
    end_date DATE NOT NULL,
    days_count INTEGER NOT NULL CHECK (days_count > 0),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    CHECK (end_date >= start_date)
);
";

const VACATION_LIMITS_SQL: &str = r"
CREATE TABLE vacation_limits (
    id UUID PRIMARY KEY,
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    year INTEGER NOT NULL,
    total_days INTEGER NOT NULL CHECK (total_days >= 0),
    used_days INTEGER NOT NULL DEFAULT 0 CHECK (used_days >= 0),
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    UNIQUE (user_id, year)
);
";

const INDEXES_SQL: &str = r"
CREATE INDEX idx_users_unit ON users(unit_id);
CREATE INDEX idx_vacation_requests_user_year ON vacation_requests(user_id, year);
CREATE INDEX idx_vacation_requests_status ON vacation_requests(status);
CREATE INDEX idx_vacation_periods_request ON vacation_periods(request_id);
CREATE INDEX idx_vacation_periods_dates ON vacation_periods(start_date, end_date);
";

const DROP_SQL: &str = r"
DROP TABLE IF EXISTS vacation_limits;
DROP TABLE IF EXISTS vacation_periods;
DROP TABLE IF EXISTS vacation_requests;
DROP TABLE IF EXISTS users;
DROP TABLE IF EXISTS organizational_units;
DROP TYPE IF EXISTS request_status;
";
