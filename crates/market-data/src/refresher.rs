use crate::board::{PriceBoard, PriceSnapshot};
use crate::feed::{MarketFeed, Ticker};
use core_types::Crypto;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Merges one round of tickers into the previous listing.
///
/// Order and names come from the previous listing; a symbol the feed did not
/// quote this round keeps its last known price rather than disappearing.
pub fn apply_tickers(previous: &[Crypto], tickers: &[Ticker]) -> Vec<Crypto> {
    previous
        .iter()
        .map(|crypto| {
            match tickers.iter().find(|t| t.symbol == crypto.symbol) {
                Some(ticker) => Crypto {
                    name: crypto.name.clone(),
                    symbol: crypto.symbol.clone(),
                    price: ticker.price,
                    change24h: ticker.change24h,
                },
                None => crypto.clone(),
            }
        })
        .collect()
}

/// Spawns the background task that polls `feed` every `interval` and
/// publishes a fresh snapshot to `board`.
///
/// A failed fetch is logged and skipped; the board keeps serving the last
/// completed snapshot, so consumers see stale prices rather than none.
pub fn spawn(
    board: Arc<PriceBoard>,
    feed: Arc<dyn MarketFeed>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // A slow fetch should delay the next poll, not cause a burst.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            match feed.fetch_tickers().await {
                Ok(tickers) => {
                    let previous = match board.snapshot() {
                        Ok(snapshot) => snapshot.cryptos().to_vec(),
                        // Nothing seeded yet: the first round defines the listing.
                        Err(_) => tickers
                            .iter()
                            .map(|t| Crypto {
                                name: t.symbol.clone(),
                                symbol: t.symbol.clone(),
                                price: t.price,
                                change24h: t.change24h,
                            })
                            .collect(),
                    };
                    let updated = apply_tickers(&previous, &tickers);
                    board.publish(PriceSnapshot::new(updated));
                    tracing::debug!(count = tickers.len(), "Published price snapshot.");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Ticker refresh failed; keeping last snapshot.");
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarketDataError;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    struct FixedFeed {
        tickers: Vec<Ticker>,
    }

    #[async_trait]
    impl MarketFeed for FixedFeed {
        async fn fetch_tickers(&self) -> Result<Vec<Ticker>, MarketDataError> {
            Ok(self.tickers.clone())
        }
    }

    struct FailingFeed;

    #[async_trait]
    impl MarketFeed for FailingFeed {
        async fn fetch_tickers(&self) -> Result<Vec<Ticker>, MarketDataError> {
            Err(MarketDataError::Unavailable)
        }
    }

    fn crypto(symbol: &str, price: rust_decimal::Decimal) -> Crypto {
        Crypto {
            name: symbol.to_string(),
            symbol: symbol.to_string(),
            price,
            change24h: dec!(0),
        }
    }

    #[test]
    fn apply_tickers_updates_quoted_and_keeps_unquoted() {
        let previous = vec![crypto("BTC", dec!(50000)), crypto("ETH", dec!(2000))];
        let tickers = vec![Ticker {
            symbol: "BTC".to_string(),
            price: dec!(51000),
            change24h: dec!(2),
        }];

        let updated = apply_tickers(&previous, &tickers);

        assert_eq!(updated[0].price, dec!(51000));
        assert_eq!(updated[0].change24h, dec!(2));
        // ETH was not quoted this round; its last price survives.
        assert_eq!(updated[1].price, dec!(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn refresher_publishes_rounds() {
        let board = Arc::new(PriceBoard::seeded(vec![crypto("BTC", dec!(50000))]));
        let feed = Arc::new(FixedFeed {
            tickers: vec![Ticker {
                symbol: "BTC".to_string(),
                price: dec!(60000),
                change24h: dec!(5),
            }],
        });

        let handle = spawn(board.clone(), feed, Duration::from_secs(10));

        // The first interval tick fires immediately; give the task a few
        // scheduling turns to complete the round.
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        assert_eq!(board.snapshot().unwrap().price("BTC"), Some(dec!(60000)));
        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn failed_fetch_keeps_last_snapshot() {
        let board = Arc::new(PriceBoard::seeded(vec![crypto("BTC", dec!(50000))]));

        let handle = spawn(board.clone(), Arc::new(FailingFeed), Duration::from_secs(10));

        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        assert_eq!(board.snapshot().unwrap().price("BTC"), Some(dec!(50000)));
        handle.abort();
    }
}
