use crate::error::MarketDataError;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// One symbol's latest quote as reported by a feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    pub symbol: String,
    pub price: Decimal,
    pub change24h: Decimal,
}

/// The generic, abstract interface for a ticker source.
///
/// This trait is the contract the refresher task polls against, allowing the
/// underlying implementation (exchange endpoint or simulation) to be swapped
/// out.
#[async_trait]
pub trait MarketFeed: Send + Sync {
    /// Fetches the latest quote for every symbol this feed was configured
    /// with. A symbol the feed cannot quote is simply absent from the
    /// result; the caller keeps serving its previous price.
    async fn fetch_tickers(&self) -> Result<Vec<Ticker>, MarketDataError>;
}

/// A concrete `MarketFeed` polling the public Binance 24h ticker endpoint.
pub struct BinanceFeed {
    client: reqwest::Client,
    base_url: String,
    symbols: Vec<String>,
    quote_asset: String,
}

impl BinanceFeed {
    pub fn new(symbols: Vec<String>, quote_asset: impl Into<String>) -> Self {
        Self::with_base_url("https://api.binance.com".to_string(), symbols, quote_asset)
    }

    pub fn with_base_url(
        base_url: String,
        symbols: Vec<String>,
        quote_asset: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            symbols,
            quote_asset: quote_asset.into(),
        }
    }

    /// "BTC" -> "BTCUSDT"
    fn pair(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self.quote_asset)
    }

    /// "BTCUSDT" -> "BTC", for pairs we asked for.
    fn symbol_for_pair<'a>(&self, pair: &'a str) -> Option<&'a str> {
        pair.strip_suffix(self.quote_asset.as_str())
            .filter(|base| self.symbols.iter().any(|s| s == base))
    }
}

// Intermediate struct for deserializing tickers from the Binance API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTicker24h {
    symbol: String,
    last_price: String,
    price_change_percent: String,
}

#[async_trait]
impl MarketFeed for BinanceFeed {
    async fn fetch_tickers(&self) -> Result<Vec<Ticker>, MarketDataError> {
        let url = format!("{}/api/v3/ticker/24hr", self.base_url);

        // The endpoint takes the pair list as a JSON array query parameter.
        let pairs: Vec<String> = self.symbols.iter().map(|s| self.pair(s)).collect();
        let symbols_param = serde_json::to_string(&pairs)
            .map_err(|e| MarketDataError::InvalidData(e.to_string()))?;

        let response = self
            .client
            .get(&url)
            .query(&[("symbols", symbols_param.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<RawTicker24h>>()
            .await?;

        let tickers = response
            .iter()
            .filter_map(|raw| {
                let symbol = self.symbol_for_pair(&raw.symbol)?;
                Some((symbol.to_string(), raw))
            })
            .map(|(symbol, raw)| {
                Ok(Ticker {
                    symbol,
                    price: Decimal::from_str(&raw.last_price)
                        .map_err(|e| MarketDataError::Deserialization(e.to_string()))?,
                    change24h: Decimal::from_str(&raw.price_change_percent)
                        .map_err(|e| MarketDataError::Deserialization(e.to_string()))?,
                })
            })
            .collect::<Result<Vec<Ticker>, MarketDataError>>()?;

        Ok(tickers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn raw_ticker_deserializes_binance_shape() {
        let json = r#"{"symbol":"BTCUSDT","lastPrice":"43256.78000000","priceChangePercent":"1.230"}"#;
        let raw: RawTicker24h = serde_json::from_str(json).unwrap();
        assert_eq!(raw.symbol, "BTCUSDT");
        assert_eq!(Decimal::from_str(&raw.last_price).unwrap(), dec!(43256.78));
    }

    #[test]
    fn pair_mapping_round_trips() {
        let feed = BinanceFeed::new(vec!["BTC".to_string(), "ETH".to_string()], "USDT");
        assert_eq!(feed.pair("BTC"), "BTCUSDT");
        assert_eq!(feed.symbol_for_pair("BTCUSDT"), Some("BTC"));
        // A pair we never asked for is ignored rather than mis-mapped.
        assert_eq!(feed.symbol_for_pair("DOGEUSDT"), None);
    }
}
