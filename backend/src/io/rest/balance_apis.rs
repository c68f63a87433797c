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

use crate::io::rest::mappers::BalanceMapper;
use crate::io::rest::{internal_error, parse_date};
use crate::AppState;
use shared::BalanceSheetResponse;

pub fn router() -> Router<AppState> {
    Router::new().route("/balance", get(daily_balance))
}

#[derive(Deserialize, Debug)]
pub struct BalanceParams {
    pub date: String,
}

/// GET /api/balance?date=YYYY-MM-DD. A date with no ledger yields a sheet
/// with only the opening row.
#[axum::debug_handler]
pub async fn daily_balance(
    State(app_state): State<AppState>,
    Query(params): Query<BalanceParams>,
) -> Result<Json<BalanceSheetResponse>, (StatusCode, Json<Value>)> {
    info!("GET /api/balance - date: {}", params.date);

    let date = parse_date(&params.date)?;

    match app_state.balance_service.daily_balance(date) {
        Ok(sheet) => Ok(Json(BalanceMapper::to_dto(sheet))),
        Err(e) => {
            error!("Failed to compute balance: {}", e);
            Err(internal_error("Internal server error computing balance"))
        }
    }
}
