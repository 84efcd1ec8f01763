use ledger::Ledger;
use market_data::{seed_catalog, PriceBoard, SimulatedFeed};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use web_server::AppState;

// This main function is the entry point when running `cargo run -p web-server`.
// It stands the server up with default settings and the simulated feed; the
// root binary is the configurable entry point.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let settings = configuration::Config::default();

    let catalog = seed_catalog();
    let board = Arc::new(PriceBoard::seeded(catalog.clone()));
    let feed = Arc::new(SimulatedFeed::new(&catalog));
    market_data::refresher::spawn(
        board.clone(),
        feed,
        Duration::from_secs(settings.market.refresh_interval_secs),
    );

    let ledger = Arc::new(Ledger::new(settings.account.initial_balance, board.clone()));
    let state = Arc::new(AppState { ledger, board });

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    web_server::run_server(addr, state).await
}
