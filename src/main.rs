use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use configuration::{Config, FeedKind};
use ledger::Ledger;
use market_data::{seed_catalog, BinanceFeed, MarketFeed, PriceBoard, SimulatedFeed};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use web_server::AppState;

/// The main entry point for the cryptosim trading simulator.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();
    let settings = configuration::load_settings(&cli.config)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Serve => handle_serve(settings).await,
        Commands::Prices => handle_prices(settings).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A session-scoped cryptocurrency trading simulator.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the price refresher and the HTTP API.
    Serve,
    /// Fetch one round of tickers and print them as a table.
    Prices,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Builds the configured ticker feed over the seed catalog.
fn build_feed(settings: &Config) -> Arc<dyn MarketFeed> {
    let catalog = seed_catalog();
    match settings.market.feed {
        FeedKind::Simulated => Arc::new(SimulatedFeed::new(&catalog)),
        FeedKind::Binance => Arc::new(BinanceFeed::new(
            catalog.iter().map(|c| c.symbol.clone()).collect(),
            settings.market.quote_asset.clone(),
        )),
    }
}

/// Stands up the board, the refresher task, the ledger, and the HTTP server.
async fn handle_serve(settings: Config) -> anyhow::Result<()> {
    let board = Arc::new(PriceBoard::seeded(seed_catalog()));
    let feed = build_feed(&settings);
    market_data::refresher::spawn(
        board.clone(),
        feed,
        Duration::from_secs(settings.market.refresh_interval_secs),
    );
    tracing::info!(
        interval_secs = settings.market.refresh_interval_secs,
        feed = ?settings.market.feed,
        "Price refresher started."
    );

    let ledger = Arc::new(Ledger::new(settings.account.initial_balance, board.clone()));
    let state = Arc::new(AppState { ledger, board });

    let host: IpAddr = settings
        .server
        .host
        .parse()
        .with_context(|| format!("invalid server.host: {}", settings.server.host))?;
    let addr = SocketAddr::new(host, settings.server.port);

    web_server::run_server(addr, state).await
}

/// Fetches a single ticker round and prints the resulting listing.
async fn handle_prices(settings: Config) -> anyhow::Result<()> {
    let catalog = seed_catalog();
    let feed = build_feed(&settings);
    let tickers = feed
        .fetch_tickers()
        .await
        .context("failed to fetch tickers")?;
    let listing = market_data::refresher::apply_tickers(&catalog, &tickers);

    let mut table = Table::new();
    table.set_header(vec!["Symbol", "Name", "Price", "24h Change"]);
    for crypto in &listing {
        table.add_row(vec![
            crypto.symbol.clone(),
            crypto.name.clone(),
            crypto.price.to_string(),
            format!("{}%", crypto.change24h),
        ]);
    }
    println!("{table}");

    Ok(())
}
