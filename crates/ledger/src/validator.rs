use crate::account::Account;
use crate::error::TradeError;
use core_types::TradeSide;
use market_data::PriceSnapshot;
use rust_decimal::Decimal;

/// The single gate every trade passes before any state is touched.
///
/// Checks the proposed trade against the account and the current price
/// snapshot and returns the quoted price on success. Pure: no side effects,
/// safe to call any number of times.
pub fn validate(
    account: &Account,
    snapshot: &PriceSnapshot,
    side: TradeSide,
    symbol: &str,
    amount: Decimal,
) -> Result<Decimal, TradeError> {
    if amount <= Decimal::ZERO {
        return Err(TradeError::InvalidAmount(amount));
    }

    let price = snapshot
        .price(symbol)
        .ok_or_else(|| TradeError::UnknownSymbol(symbol.to_string()))?;

    match side {
        TradeSide::Buy => {
            let required = price * amount;
            if required > account.balance() {
                return Err(TradeError::InsufficientFunds {
                    required,
                    available: account.balance(),
                });
            }
        }
        TradeSide::Sell => {
            let available = account.holding(symbol);
            if amount > available {
                return Err(TradeError::InsufficientHoldings {
                    symbol: symbol.to_string(),
                    requested: amount,
                    available,
                });
            }
        }
    }

    Ok(price)
}
