use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use log::{error, info};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::commands::entries::{
    DeleteEntryCommand, ProcessMessageCommand, RecentEntriesQuery,
};
use crate::domain::models::entry::{DeleteEntryError, Rider};
use crate::io::rest::mappers::EntryMapper;
use crate::io::rest::{internal_error, parse_date};
use crate::AppState;
use shared::{
    DeleteEntryResponse, ProcessMessageRequest, ProcessMessageResponse, RecentEntriesResponse,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/entries", post(process_message))
        .route("/entries", get(recent_entries))
        .route("/entries/:position", delete(delete_entry))
}

/// POST /api/entries. Validation violations are a 200 with
/// `success: false`; the entry was not stored.
#[axum::debug_handler]
pub async fn process_message(
    State(app_state): State<AppState>,
    Json(request): Json<ProcessMessageRequest>,
) -> Result<Json<ProcessMessageResponse>, (StatusCode, Json<Value>)> {
    info!(
        "POST /api/entries - date: {}, rider: {}",
        request.date, request.rider
    );

    let date = parse_date(&request.date)?;
    let rider: Rider = request.rider.parse().map_err(|_| {
        let error_response = serde_json::json!({
            "error": format!("Unknown rider '{}'", request.rider),
            "code": "UNKNOWN_RIDER"
        });
        (StatusCode::BAD_REQUEST, Json(error_response))
    })?;

    let command = ProcessMessageCommand {
        date,
        message: request.message,
        rider,
        fare_paid_online: request.fare_paid_online,
    };

    match app_state.entry_service.process_message(command) {
        Ok(result) => {
            let success = result.is_accepted();
            Ok(Json(ProcessMessageResponse {
                success,
                violations: result.violations,
                entry: result.entry.map(EntryMapper::to_dto),
                message: result.success_message,
            }))
        }
        Err(e) => {
            error!("Failed to process message: {}", e);
            Err(internal_error("Internal server error processing message"))
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct RecentEntriesParams {
    pub date: String,
    pub limit: Option<usize>,
}

/// GET /api/entries?date=YYYY-MM-DD&limit=N. A date with no ledger is an
/// empty 200, never an error.
#[axum::debug_handler]
pub async fn recent_entries(
    State(app_state): State<AppState>,
    Query(params): Query<RecentEntriesParams>,
) -> Result<Json<RecentEntriesResponse>, (StatusCode, Json<Value>)> {
    info!("GET /api/entries - params: {:?}", params);

    let date = parse_date(&params.date)?;
    let query = RecentEntriesQuery {
        date,
        limit: params.limit,
    };

    match app_state.entry_service.recent_entries(query) {
        Ok(result) => Ok(Json(RecentEntriesResponse {
            entries: result.entries.into_iter().map(EntryMapper::to_dto).collect(),
            total_count: result.total_count,
        })),
        Err(e) => {
            error!("Failed to list entries: {}", e);
            Err(internal_error("Internal server error listing entries"))
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct DeleteEntryParams {
    pub date: String,
}

/// DELETE /api/entries/:position?date=YYYY-MM-DD. Positions outside the
/// ledger or older than the last-10 window are a 400 carrying the rule's
/// message; the file is untouched.
#[axum::debug_handler]
pub async fn delete_entry(
    State(app_state): State<AppState>,
    Path(position): Path<usize>,
    Query(params): Query<DeleteEntryParams>,
) -> Result<Json<DeleteEntryResponse>, (StatusCode, Json<Value>)> {
    info!(
        "DELETE /api/entries/{} - date: {}",
        position, params.date
    );

    let date = parse_date(&params.date)?;
    let command = DeleteEntryCommand { date, position };

    match app_state.entry_service.delete_entry(command) {
        Ok(result) => Ok(Json(DeleteEntryResponse {
            success: true,
            message: result.success_message,
        })),
        Err(e) => {
            if let Some(rule) = e.downcast_ref::<DeleteEntryError>() {
                let error_response = serde_json::json!({
                    "error": rule.to_string(),
                    "code": "DELETE_REJECTED"
                });
                return Err((StatusCode::BAD_REQUEST, Json(error_response)));
            }
            error!("Failed to delete entry: {}", e);
            Err(internal_error("Internal server error deleting entry"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::rest::test_utils::setup_test_app;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request},
    };
    use serde_json::json;
    use tower::util::ServiceExt;

    fn post_entry_request(date: &str, message: &str, rider: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/entries")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "date": date,
                    "message": message,
                    "rider": rider,
                    "fare_paid_online": false,
                })
                .to_string(),
            ))
            .unwrap()
    }

    fn cash_message(name: &str) -> String {
        format!("Name: {}\nPhone: 0300 1234567\nFare: 100\nCash: 450", name)
    }

    #[tokio::test]
    async fn valid_message_is_stored_and_listed() {
        let (app, _env) = setup_test_app();

        let response = app
            .clone()
            .oneshot(post_entry_request("2024-05-20", &cash_message("Ahmed"), "zubair"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: ProcessMessageResponse = serde_json::from_slice(&body).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.message, "Data added to spreadsheet.");
        assert_eq!(parsed.entry.unwrap().name, "ahmed");

        let list = Request::builder()
            .method(Method::GET)
            .uri("/api/entries?date=2024-05-20")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(list).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: RecentEntriesResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.total_count, 1);
        assert_eq!(parsed.entries[0].cash, 450.0);
    }

    #[tokio::test]
    async fn violations_come_back_as_ok_with_failure() {
        let (app, _env) = setup_test_app();

        let response = app
            .oneshot(post_entry_request(
                "2024-05-20",
                "Name: Sara\nCash: 50\nOnline: 20",
                "shazaib",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: ProcessMessageResponse = serde_json::from_slice(&body).unwrap();
        assert!(!parsed.success);
        assert_eq!(
            parsed.violations,
            vec!["Exactly one of Cash, Online, or Credit Card must be selected.".to_string()]
        );
        assert!(parsed.entry.is_none());
    }

    #[tokio::test]
    async fn bad_date_is_rejected() {
        let (app, _env) = setup_test_app();
        let response = app
            .oneshot(post_entry_request("20-05-2024", &cash_message("Ahmed"), "zubair"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_rider_is_rejected() {
        let (app, _env) = setup_test_app();
        let response = app
            .oneshot(post_entry_request("2024-05-20", &cash_message("Ahmed"), "someone"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_ledger_lists_empty() {
        let (app, _env) = setup_test_app();
        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/entries?date=2030-01-01")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: RecentEntriesResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.total_count, 0);
        assert!(parsed.entries.is_empty());
    }

    #[tokio::test]
    async fn delete_succeeds_inside_window() {
        let (app, _env) = setup_test_app();
        app.clone()
            .oneshot(post_entry_request("2024-05-20", &cash_message("Ahmed"), "zubair"))
            .await
            .unwrap();

        let request = Request::builder()
            .method(Method::DELETE)
            .uri("/api/entries/1?date=2024-05-20")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: DeleteEntryResponse = serde_json::from_slice(&body).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.message, "Record number 1 deleted.");
    }

    #[tokio::test]
    async fn delete_outside_window_is_bad_request() {
        let (app, _env) = setup_test_app();
        for i in 1..=15 {
            app.clone()
                .oneshot(post_entry_request(
                    "2024-05-20",
                    &cash_message(&format!("Customer {}", i)),
                    "zubair",
                ))
                .await
                .unwrap();
        }

        let request = Request::builder()
            .method(Method::DELETE)
            .uri("/api/entries/1?date=2024-05-20")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["error"], "Only the last 10 records can be deleted.");
    }

    #[tokio::test]
    async fn delete_out_of_range_is_bad_request() {
        let (app, _env) = setup_test_app();
        let request = Request::builder()
            .method(Method::DELETE)
            .uri("/api/entries/7?date=2024-05-20")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["error"], "Record number out of range.");
    }
}
