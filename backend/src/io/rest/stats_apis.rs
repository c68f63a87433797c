use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use log::{error, info};
use serde::Deserialize;
use serde_json::Value;

use crate::io::rest::mappers::StatsMapper;
use crate::io::rest::{internal_error, parse_date};
use crate::AppState;
use shared::DailyStatsResponse;

pub fn router() -> Router<AppState> {
    Router::new().route("/stats", get(daily_stats))
}

#[derive(Deserialize, Debug)]
pub struct StatsParams {
    pub date: String,
}

/// GET /api/stats?date=YYYY-MM-DD. A date with no ledger yields empty
/// views, never an error.
#[axum::debug_handler]
pub async fn daily_stats(
    State(app_state): State<AppState>,
    Query(params): Query<StatsParams>,
) -> Result<Json<DailyStatsResponse>, (StatusCode, Json<Value>)> {
    info!("GET /api/stats - date: {}", params.date);

    let date = parse_date(&params.date)?;

    match app_state.stats_service.daily_stats(date) {
        Ok(stats) => Ok(Json(StatsMapper::to_dto(stats))),
        Err(e) => {
            error!("Failed to aggregate stats: {}", e);
            Err(internal_error("Internal server error aggregating stats"))
        }
    }
}
