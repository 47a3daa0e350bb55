//! Approval workflow for vacation requests.
//!
//! This module implements the request lifecycle state machine and the
//! role-gated transition guards.
//!
//! # Modules
//!
//! - `types` - Workflow action types carrying audit data
//! - `error` - Workflow-specific error types
//! - `service` - State transition logic
//! - `authz` - Stateless authorization predicates and list scoping

pub mod authz;
pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use authz::{AuthzPolicy, RequestScope};
pub use error::WorkflowError;
pub use service::WorkflowService;
pub use types::WorkflowAction;
