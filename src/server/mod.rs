pub mod handlers;
pub mod types;

use crate::{Result, config::Config, gateway::Gateway};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub async fn run(config: Config) -> Result<()> {
    match &config.upstream.base_url {
        Some(url) => info!("Forwarding inference requests to {}", url),
        None => info!("No upstream endpoint configured; serving simulated responses"),
    }
    if config.upstream.force_simulation {
        info!("Simulation forced by configuration; upstream will not be called");
    }

    // Create the shared pipeline
    let gateway = Gateway::new(config.upstream.clone())?;
    let app_state = handlers::AppState {
        gateway: Arc::new(gateway),
    };

    let app = router(app_state);

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the gateway router; shared with the integration tests. The demo
/// front end runs in a browser, so CORS stays permissive.
pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/classify", post(handlers::classify))
        .route("/defend", post(handlers::defend))
        .route("/visualize", post(handlers::visualize))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
