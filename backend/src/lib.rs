//! Courier ledger backend: domain services, CSV storage and the REST
//! surface wired together.

use anyhow::Result;
use axum::{http::Method, Router};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use config::AppConfig;
use domain::{AuthService, BalanceService, EntryService, StatsService};
use storage::csv::CsvConnection;

/// Application state shared across REST handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub entry_service: EntryService<CsvConnection>,
    pub stats_service: StatsService<CsvConnection>,
    pub balance_service: BalanceService<CsvConnection>,
}

/// Build all services over the configured data directory.
pub fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!(
        "Initializing backend with data directory {}",
        config.data_dir.display()
    );
    let connection = Arc::new(CsvConnection::new(&config.data_dir)?);

    Ok(AppState {
        auth_service: AuthService::new(config.username.clone(), config.password.clone()),
        entry_service: EntryService::new(connection.clone()),
        stats_service: StatsService::new(connection.clone()),
        balance_service: BalanceService::new(connection, config.opening_balance),
    })
}

/// The full application router: API routes under `/api`, permissive CORS
/// so a locally served frontend can call it.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .nest("/api", io::rest::api_router())
        .layer(cors)
        .with_state(state)
}
