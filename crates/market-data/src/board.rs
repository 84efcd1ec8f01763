use crate::error::MarketDataError;
use chrono::{DateTime, Utc};
use core_types::Crypto;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// An immutable view of every tradable symbol's latest price.
///
/// Snapshots are built whole and shared behind an `Arc`; once published
/// they are never touched again. Listing order is the catalog order, which
/// is what the presentation layer renders.
#[derive(Debug)]
pub struct PriceSnapshot {
    cryptos: Vec<Crypto>,
    index: HashMap<String, usize>,
    pub published_at: DateTime<Utc>,
}

impl PriceSnapshot {
    pub fn new(cryptos: Vec<Crypto>) -> Self {
        let index = cryptos
            .iter()
            .enumerate()
            .map(|(i, c)| (c.symbol.clone(), i))
            .collect();
        Self {
            cryptos,
            index,
            published_at: Utc::now(),
        }
    }

    /// The current price for `symbol`, if the feed knows it.
    pub fn price(&self, symbol: &str) -> Option<Decimal> {
        self.get(symbol).map(|c| c.price)
    }

    pub fn get(&self, symbol: &str) -> Option<&Crypto> {
        self.index.get(symbol).map(|&i| &self.cryptos[i])
    }

    pub fn cryptos(&self) -> &[Crypto] {
        &self.cryptos
    }

    pub fn is_empty(&self) -> bool {
        self.cryptos.is_empty()
    }
}

/// Holds the most recently published `PriceSnapshot`.
///
/// The write path (the refresher) replaces the whole `Arc`; the read path
/// (ledger, handlers) clones it. The lock is held only for the pointer
/// swap, never across I/O.
#[derive(Debug)]
pub struct PriceBoard {
    latest: RwLock<Option<Arc<PriceSnapshot>>>,
}

impl PriceBoard {
    /// An empty board. `snapshot` returns `Unavailable` until the first
    /// publish.
    pub fn new() -> Self {
        Self {
            latest: RwLock::new(None),
        }
    }

    /// A board pre-populated with a snapshot, so the serving path never
    /// starts without prices.
    pub fn seeded(cryptos: Vec<Crypto>) -> Self {
        let board = Self::new();
        board.publish(PriceSnapshot::new(cryptos));
        board
    }

    /// Atomically replaces the current snapshot.
    pub fn publish(&self, snapshot: PriceSnapshot) {
        let mut guard = self.latest.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(Arc::new(snapshot));
    }

    /// The latest completed snapshot.
    pub fn snapshot(&self) -> Result<Arc<PriceSnapshot>, MarketDataError> {
        let guard = self.latest.read().unwrap_or_else(|e| e.into_inner());
        guard.clone().ok_or(MarketDataError::Unavailable)
    }
}

impl Default for PriceBoard {
    fn default() -> Self {
        Self::new()
    }
}
