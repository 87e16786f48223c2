//! HTTP request handlers for the worker tracker API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, put},
};
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::aggregation::{filter_by_name, site_breakdown, summarize_wages, workforce_stats};
use crate::export::{export_filename, format_currency, wage_summary_csv, workers_workbook};
use crate::models::Worker;

use super::request::{CreateWorkerRequest, ListWorkersQuery, UpdateWorkerRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/workers",
            get(list_workers_handler).post(create_worker_handler),
        )
        .route("/api/workers/reset-sites", put(reset_sites_handler))
        .route("/api/workers/summary", get(wage_summary_handler))
        .route("/api/workers/stats", get(stats_handler))
        .route(
            "/api/workers/:id",
            put(update_worker_handler).delete(delete_worker_handler),
        )
        .route("/api/workers/:id/breakdown", get(site_breakdown_handler))
        .route("/api/export/wages.csv", get(export_wages_handler))
        .route("/api/export/workbook", get(export_workbook_handler))
        .with_state(state)
}

/// Maps a JSON extraction failure to the API error body.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for GET /api/workers.
///
/// Lists all workers, optionally filtered by a case-insensitive name search.
async fn list_workers_handler(
    State(state): State<AppState>,
    Query(query): Query<ListWorkersQuery>,
) -> impl IntoResponse {
    let workers = state.store().list();
    let workers: Vec<Worker> = match query.search.as_deref() {
        Some(term) if !term.is_empty() => filter_by_name(&workers, term)
            .into_iter()
            .cloned()
            .collect(),
        _ => workers,
    };
    Json(workers)
}

/// Handler for POST /api/workers.
///
/// Creates a worker and returns the updated record set.
async fn create_worker_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateWorkerRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    info!(correlation_id = %correlation_id, name = %request.name, "Creating worker");
    match state.store().create(request.into()) {
        Ok(workers) => {
            info!(
                correlation_id = %correlation_id,
                workers = workers.len(),
                "Worker created"
            );
            (StatusCode::CREATED, Json(workers)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Create failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for PUT /api/workers/{id}.
///
/// Applies a partial update and returns the updated record set.
async fn update_worker_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateWorkerRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = rejection_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    info!(correlation_id = %correlation_id, worker_id = %id, "Updating worker");
    match state.store().update(id, request.into()) {
        Ok(workers) => (StatusCode::OK, Json(workers)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Update failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for DELETE /api/workers/{id}.
async fn delete_worker_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, worker_id = %id, "Deleting worker");

    match state.store().delete(id) {
        Ok(workers) => (StatusCode::OK, Json(workers)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Delete failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for PUT /api/workers/reset-sites.
///
/// Clears every worker's schedule and returns the updated record set.
async fn reset_sites_handler(State(state): State<AppState>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let workers = state.store().reset_sites();
    info!(
        correlation_id = %correlation_id,
        workers = workers.len(),
        "Reset all worker sites"
    );
    Json(workers)
}

/// Handler for GET /api/workers/summary.
async fn wage_summary_handler(State(state): State<AppState>) -> impl IntoResponse {
    let workers = state.store().list();
    Json(summarize_wages(&workers))
}

/// Handler for GET /api/workers/stats.
async fn stats_handler(State(state): State<AppState>) -> impl IntoResponse {
    let workers = state.store().list();
    let stats = workforce_stats(&workers);
    debug!(
        total_workers = stats.total_workers,
        active_sites = stats.active_sites,
        total_wages = %format_currency(&state.config().currency_symbol, stats.total_wages),
        "Computed workforce stats"
    );
    Json(stats)
}

/// Handler for GET /api/workers/{id}/breakdown.
async fn site_breakdown_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.store().get(id) {
        Ok(worker) => Json(site_breakdown(&worker)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}

/// Handler for GET /api/export/wages.csv.
///
/// Returns the wage summary as a CSV attachment with a date-stamped name.
async fn export_wages_handler(State(state): State<AppState>) -> Response {
    let workers = state.store().list();
    let summary = summarize_wages(&workers);

    match wage_summary_csv(&summary) {
        Ok(csv) => {
            let filename = export_filename("wage_summary", Utc::now().date_naive(), "csv");
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", filename),
                    ),
                ],
                csv,
            )
                .into_response()
        }
        Err(err) => {
            warn!(error = %err, "CSV export failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /api/export/workbook.
///
/// Returns the two-sheet export (raw records, wage summary) as JSON.
async fn export_workbook_handler(State(state): State<AppState>) -> Response {
    let workers = state.store().list();
    let summary = summarize_wages(&workers);

    match workers_workbook(&workers, &summary) {
        Ok(workbook) => Json(workbook).into_response(),
        Err(err) => {
            warn!(error = %err, "Workbook export failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
