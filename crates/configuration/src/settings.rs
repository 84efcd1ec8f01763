use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: Server,
    #[serde(default)]
    pub account: Account,
    #[serde(default)]
    pub market: Market,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: Server::default(),
            account: Account::default(),
            market: Market::default(),
        }
    }
}

/// Bind address for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Parameters for the simulated trading account.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    /// The cash balance the account starts with, and returns to on reset.
    #[serde(default = "default_initial_balance")]
    pub initial_balance: Decimal,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            initial_balance: default_initial_balance(),
        }
    }
}

/// Which feed supplies ticker data to the price board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    /// A deterministic in-process random walk over the seed catalog.
    Simulated,
    /// The Binance public 24h ticker endpoint, polled over HTTPS.
    Binance,
}

/// Parameters for the market-data refresh loop.
#[derive(Debug, Clone, Deserialize)]
pub struct Market {
    #[serde(default = "default_feed")]
    pub feed: FeedKind,
    /// Seconds between ticker refreshes.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
    /// Quote asset appended to each symbol when building exchange pairs
    /// (e.g. "BTC" + "USDT" -> "BTCUSDT").
    #[serde(default = "default_quote_asset")]
    pub quote_asset: String,
}

impl Default for Market {
    fn default() -> Self {
        Self {
            feed: default_feed(),
            refresh_interval_secs: default_refresh_interval_secs(),
            quote_asset: default_quote_asset(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_initial_balance() -> Decimal {
    dec!(10000.00)
}

fn default_feed() -> FeedKind {
    FeedKind::Simulated
}

fn default_refresh_interval_secs() -> u64 {
    10
}

fn default_quote_asset() -> String {
    "USDT".to_string()
}
