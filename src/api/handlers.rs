//! HTTP request handlers for the Travel Settlement Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::SettlementError;

use super::request::ParseRequest;
use super::response::{ApiError, ApiErrorResponse, ParseResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/parse", post(parse_handler))
        .route("/report", post(report_handler))
        .with_state(state)
}

/// Handler for POST /parse.
///
/// Returns the sorted daily records for the submitted text.
async fn parse_handler(
    State(state): State<AppState>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing parse request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match state.engine().parse(&request.text) {
        Ok(records) => {
            info!(
                correlation_id = %correlation_id,
                records = records.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Parse completed successfully"
            );
            json_response(StatusCode::OK, ParseResponse { records })
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for POST /report.
///
/// Returns a full settlement report with per-person totals.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match state.engine().report(&request.text) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                report_id = %report.report_id,
                records = report.records.len(),
                grand_total = report.grand_total,
                duration_us = start_time.elapsed().as_micros(),
                "Report completed successfully"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => error_response(err, correlation_id),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: SettlementError, correlation_id: Uuid) -> Response {
    if err.is_no_data() {
        info!(correlation_id = %correlation_id, "No travel entries found");
    } else {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Settlement failed"
        );
    }
    ApiErrorResponse::from(err).into_response()
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
    };
    json_response(StatusCode::BAD_REQUEST, error)
}
