//! # Market Data Crate
//!
//! This crate owns everything price-related: the `PriceBoard` that publishes
//! immutable snapshots of current prices, the seed catalog of tradable
//! symbols, the `MarketFeed` abstraction over ticker sources, and the
//! background refresher task that polls a feed on an interval.
//!
//! ## Architectural Principles
//!
//! - **Immutable snapshots:** a `PriceSnapshot` is constructed whole and
//!   never mutated. The board swaps an `Arc` to the latest one, so readers
//!   never observe a half-applied refresh and never block on one in
//!   progress.
//! - **Feed Abstraction:** the `MarketFeed` trait lets the refresher be
//!   agnostic about whether tickers come from a real exchange endpoint or
//!   the in-process simulation.
//!
//! ## Public API
//!
//! - `PriceBoard` / `PriceSnapshot`: the read side consumed by the ledger.
//! - `MarketFeed`: the trait all ticker sources implement.
//! - `BinanceFeed`: polls the public Binance 24h ticker endpoint.
//! - `SimulatedFeed`: a deterministic random walk over the seed catalog.
//! - `refresher::spawn`: the periodic fetch-and-publish task.

pub mod board;
pub mod catalog;
pub mod error;
pub mod feed;
pub mod refresher;
pub mod simulated;

// Re-export the key components to provide a clean, public-facing API.
pub use board::{PriceBoard, PriceSnapshot};
pub use catalog::seed_catalog;
pub use error::MarketDataError;
pub use feed::{BinanceFeed, MarketFeed, Ticker};
pub use simulated::SimulatedFeed;
