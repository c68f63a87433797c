//! Test infrastructure for the REST layer: a full router backed by a
//! temporary data directory.

use axum::Router;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::{AuthService, BalanceService, EntryService, StatsService};
use crate::storage::csv::test_utils::TestEnvironment;
use crate::{create_router, AppState};

/// Build the full app (routes nested under `/api`) over a fresh temp
/// directory. The returned environment must outlive the requests.
pub fn setup_test_app() -> (Router, TestEnvironment) {
    let env = TestEnvironment::new().expect("failed to create test environment");
    let connection = Arc::new(env.connection.clone());

    let config = AppConfig {
        data_dir: env.base_path.clone(),
        opening_balance: 7000.0,
        username: "admin".to_string(),
        password: "secret".to_string(),
    };

    let state = AppState {
        auth_service: AuthService::new(config.username.clone(), config.password.clone()),
        entry_service: EntryService::new(connection.clone()),
        stats_service: StatsService::new(connection.clone()),
        balance_service: BalanceService::new(connection, config.opening_balance),
    };

    (create_router(state), env)
}
