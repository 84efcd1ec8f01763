use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TradeError {
    #[error("Amount must be positive")]
    InvalidAmount(Decimal),

    #[error("Cryptocurrency not found: {0}")]
    UnknownSymbol(String),

    #[error("Insufficient funds. Required: {required}, Available: {available}")]
    InsufficientFunds {
        required: Decimal,
        available: Decimal,
    },

    #[error("Insufficient holdings of {symbol}. Requested: {requested}, Available: {available}")]
    InsufficientHoldings {
        symbol: String,
        requested: Decimal,
        available: Decimal,
    },

    #[error("Market data unavailable: {0}")]
    MarketUnavailable(String),
}

impl TradeError {
    /// True for the validation kinds that represent a normal, final user
    /// outcome. `MarketUnavailable` is the one retryable system failure and
    /// is surfaced differently at the transport boundary.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, TradeError::MarketUnavailable(_))
    }
}
