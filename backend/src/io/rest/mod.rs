//! # REST API Interface Layer
//!
//! HTTP endpoints for the courier ledger. This layer only translates
//! between DTOs and domain commands; no business logic lives here.
//!
//! Validation violations are an expected outcome and come back as 200
//! responses with `success: false`. 4xx is reserved for malformed input
//! (bad dates, unknown riders, rejected deletes) and 5xx for storage
//! failures.

pub mod auth_apis;
pub mod balance_apis;
pub mod entry_apis;
pub mod mappers;
pub mod stats_apis;
#[cfg(test)]
pub(crate) mod test_utils;

use axum::{http::StatusCode, response::Json, Router};
use chrono::NaiveDate;
use serde_json::Value;

use crate::AppState;

/// All API routes, to be nested under `/api`.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(auth_apis::router())
        .merge(entry_apis::router())
        .merge(stats_apis::router())
        .merge(balance_apis::router())
}

/// Parse a `YYYY-MM-DD` request date, rejecting anything else as 400.
pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, (StatusCode, Json<Value>)> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        let error_response = serde_json::json!({
            "error": format!("Invalid date '{}', expected YYYY-MM-DD", raw),
            "code": "INVALID_DATE"
        });
        (StatusCode::BAD_REQUEST, Json(error_response))
    })
}

pub(crate) fn internal_error(message: &str) -> (StatusCode, Json<Value>) {
    let error_response = serde_json::json!({
        "error": message,
        "code": "INTERNAL_ERROR"
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(error_response))
}
