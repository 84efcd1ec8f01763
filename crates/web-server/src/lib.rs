use axum::{
    routing::{get, post},
    Router,
};
use ledger::Ledger;
use market_data::PriceBoard;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};
use tracing;

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
pub struct AppState {
    pub ledger: Arc<Ledger>,
    pub board: Arc<PriceBoard>,
}

/// Builds the application router. Split out of `run_server` so tests can
/// drive it without binding a socket.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(tower_http::cors::Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    // --- DEFINE THE APPLICATION ROUTES ---
    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/cryptos", get(handlers::get_cryptos))
        .route("/api/trade", post(handlers::execute_trade))
        .route("/api/reset", post(handlers::reset_account))
        .route("/api/account", get(handlers::get_account))
        .route("/api/account/value", get(handlers::get_account_value))
        .with_state(state)
        .layer(cors)
        // This middleware logs information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server.
pub async fn run_server(addr: SocketAddr, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = app(state);

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
