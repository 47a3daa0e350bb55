//! Shared types, errors, and configuration for Ferio.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Pagination types for list endpoints
//! - Application-wide error types
//! - Configuration management
//! - The outbound notification boundary

pub mod config;
pub mod error;
pub mod notify;
pub mod types;

pub use config::{AppConfig, QuotaPolicy};
pub use error::{AppError, AppResult};
pub use notify::{NotificationSink, TracingNotifier};
