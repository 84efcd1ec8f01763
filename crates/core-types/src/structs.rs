use crate::enums::TradeSide;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A tradable cryptocurrency as published by the price board.
///
/// The core only ever reads these; prices are refreshed out-of-band by the
/// market-data feed and republished as whole snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crypto {
    pub name: String,
    pub symbol: String,
    pub price: Decimal,
    /// Percentage change over the last 24 hours.
    pub change24h: Decimal,
}

/// An executed trade, recorded at execution time and immutable afterwards.
///
/// `total` is always `amount * price` at the moment of execution.
/// `profit_loss` is present only for sells: the realized gain or loss
/// against the running average cost basis of the symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub side: TradeSide,
    pub symbol: String,
    pub amount: Decimal,
    pub price: Decimal,
    pub total: Decimal,
    pub profit_loss: Option<Decimal>,
}

impl Transaction {
    /// Creates a transaction record stamped with the current time.
    pub fn new(
        side: TradeSide,
        symbol: impl Into<String>,
        amount: Decimal,
        price: Decimal,
        profit_loss: Option<Decimal>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            side,
            symbol: symbol.into(),
            amount,
            price,
            total: amount * price,
            profit_loss,
        }
    }
}

/// A point-in-time copy of the account, safe to hand across the HTTP
/// boundary. Transactions are ordered newest-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub balance: Decimal,
    pub holdings: HashMap<String, Decimal>,
    pub transactions: Vec<Transaction>,
}

/// The account valued against the latest price snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountValue {
    pub balance: Decimal,
    pub holdings_value: Decimal,
    pub total_value: Decimal,
}

/// A trade intent submitted by the presentation layer.
///
/// Deliberately minimal: balance, holdings and the execution price are all
/// read server-side so a client can never trade against its own numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeRequest {
    #[serde(rename = "type")]
    pub side: TradeSide,
    pub symbol: String,
    pub amount: Decimal,
}

/// The outcome of a trade intent.
///
/// Rejections for normal user-input reasons (bad amount, unknown symbol,
/// not enough funds or holdings) come back as `success: false` with a
/// human-readable message and the untouched account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeResponse {
    pub success: bool,
    pub message: String,
    pub account: AccountSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn trade_side_round_trips_lowercase() {
        assert_eq!(serde_json::to_string(&TradeSide::Buy).unwrap(), "\"buy\"");
        assert_eq!(
            serde_json::from_str::<TradeSide>("\"sell\"").unwrap(),
            TradeSide::Sell
        );
    }

    #[test]
    fn transaction_computes_total() {
        let tx = Transaction::new(TradeSide::Buy, "BTC", dec!(0.1), dec!(50000), None);
        assert_eq!(tx.total, dec!(5000.0));
        assert_eq!(tx.profit_loss, None);
    }

    #[test]
    fn transaction_serializes_wire_field_names() {
        let tx = Transaction::new(TradeSide::Sell, "ETH", dec!(2), dec!(2500), Some(dec!(150)));
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "sell");
        assert_eq!(json["profitLoss"], serde_json::json!("150"));
        assert!(json.get("side").is_none());
    }

    #[test]
    fn buy_transaction_serializes_null_profit_loss() {
        let tx = Transaction::new(TradeSide::Buy, "BTC", dec!(1), dec!(100), None);
        let json = serde_json::to_value(&tx).unwrap();
        assert!(json["profitLoss"].is_null());
    }

    #[test]
    fn trade_request_accepts_wire_shape() {
        let req: TradeRequest =
            serde_json::from_str(r#"{"type":"buy","symbol":"BTC","amount":0.5}"#).unwrap();
        assert_eq!(req.side, TradeSide::Buy);
        assert_eq!(req.symbol, "BTC");
        assert_eq!(req.amount, dec!(0.5));
    }
}
