mod config;
mod error;
mod handlers;
mod models;
mod router;
mod state;

use std::sync::Arc;

use matching_engine::MatchingEngine;
use router::create_router;
use state::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();

    let config = config::Config::load()?;
    tracing::info!(?config, "starting gateway");

    let engine = Arc::new(MatchingEngine::new(config.engine()));
    let state = AppState::new(engine);

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
