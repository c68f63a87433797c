use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use log::{error, info};
use serde_json::Value;

use crate::domain::commands::auth::LoginCommand;
use crate::io::rest::internal_error;
use crate::AppState;
use shared::{LoginRequest, LoginResponse};

pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// POST /api/login. Bad credentials are a 200 with `success: false`.
#[axum::debug_handler]
pub async fn login(
    State(app_state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<Value>)> {
    info!("POST /api/login - user: '{}'", request.username);

    let command = LoginCommand {
        username: request.username,
        password: request.password,
    };

    match app_state.auth_service.login(command) {
        Ok(result) => Ok(Json(LoginResponse {
            success: result.success,
            message: result.message,
        })),
        Err(e) => {
            error!("Login check failed: {}", e);
            Err(internal_error("Internal server error during login"))
        }
    }
}
