//! HTTP API module for the Workforce Tracking Engine.
//!
//! This module provides the REST endpoints for managing worker records
//! and reading the derived wage views.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CreateWorkerRequest, ListWorkersQuery, ScheduleUpdateRequest, UpdateWorkerRequest,
};
pub use response::ApiError;
pub use state::AppState;
