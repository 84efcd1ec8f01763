use crate::error::MarketDataError;
use crate::feed::{MarketFeed, Ticker};
use async_trait::async_trait;
use core_types::Crypto;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Mutex;

/// A `MarketFeed` that walks the catalog prices randomly instead of calling
/// out to an exchange. Each round moves every price by at most +/-2% and
/// drifts the 24h change within [-10, +10].
///
/// Useful for demos and offline runs, and with a fixed seed it makes the
/// refresh pipeline deterministic in tests.
pub struct SimulatedFeed {
    state: Mutex<WalkState>,
}

struct WalkState {
    rng: StdRng,
    tickers: Vec<Ticker>,
}

impl SimulatedFeed {
    pub fn new(catalog: &[Crypto]) -> Self {
        Self::with_rng(catalog, StdRng::from_entropy())
    }

    /// A feed whose walk is fully determined by `seed`.
    pub fn with_seed(catalog: &[Crypto], seed: u64) -> Self {
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    fn with_rng(catalog: &[Crypto], rng: StdRng) -> Self {
        let tickers = catalog
            .iter()
            .map(|c| Ticker {
                symbol: c.symbol.clone(),
                price: c.price,
                change24h: c.change24h,
            })
            .collect();
        Self {
            state: Mutex::new(WalkState { rng, tickers }),
        }
    }
}

#[async_trait]
impl MarketFeed for SimulatedFeed {
    async fn fetch_tickers(&self) -> Result<Vec<Ticker>, MarketDataError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        let WalkState { rng, tickers } = &mut *state;

        for ticker in tickers.iter_mut() {
            // Step in basis points so the whole walk stays in Decimal.
            let step_bp: i64 = rng.gen_range(-200..=200);
            let factor = Decimal::ONE + Decimal::new(step_bp, 4);
            ticker.price = (ticker.price * factor).round_dp(8);

            let drift = Decimal::new(rng.gen_range(-50..=50), 2);
            ticker.change24h = (ticker.change24h + drift).clamp(dec!(-10), dec!(10));
        }

        Ok(tickers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_catalog;

    #[tokio::test]
    async fn walk_stays_within_step_bounds() {
        let catalog = seed_catalog();
        let feed = SimulatedFeed::with_seed(&catalog, 7);

        let mut previous: Vec<Decimal> = catalog.iter().map(|c| c.price).collect();
        for _ in 0..50 {
            let tickers = feed.fetch_tickers().await.unwrap();
            // Allow for the 8-dp rounding applied after each step.
            let epsilon = dec!(0.00000001);
            for (ticker, prev) in tickers.iter().zip(&previous) {
                assert!(ticker.price > Decimal::ZERO);
                assert!(ticker.price >= prev * dec!(0.98) - epsilon);
                assert!(ticker.price <= prev * dec!(1.02) + epsilon);
                assert!(ticker.change24h >= dec!(-10) && ticker.change24h <= dec!(10));
            }
            previous = tickers.iter().map(|t| t.price).collect();
        }
    }

    #[tokio::test]
    async fn same_seed_produces_same_walk() {
        let catalog = seed_catalog();
        let a = SimulatedFeed::with_seed(&catalog, 42);
        let b = SimulatedFeed::with_seed(&catalog, 42);

        for _ in 0..10 {
            assert_eq!(
                a.fetch_tickers().await.unwrap(),
                b.fetch_tickers().await.unwrap()
            );
        }
    }
}
