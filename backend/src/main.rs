use std::net::SocketAddr;

use anyhow::Result;
use log::info;

use courier_ledger_backend::config::AppConfig;
use courier_ledger_backend::{create_router, initialize_backend};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();
    let state = initialize_backend(&config)?;
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
