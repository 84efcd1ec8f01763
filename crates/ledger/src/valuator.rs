use market_data::PriceSnapshot;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// The market value of a holdings map against a price snapshot.
///
/// A symbol the snapshot cannot price contributes zero: the feed may lag
/// behind the holdings, and stale is not an error here.
pub fn holdings_value(holdings: &HashMap<String, Decimal>, snapshot: &PriceSnapshot) -> Decimal {
    holdings
        .iter()
        .filter_map(|(symbol, amount)| snapshot.price(symbol).map(|price| price * *amount))
        .sum()
}

/// Cash plus the market value of all holdings.
pub fn total_value(
    balance: Decimal,
    holdings: &HashMap<String, Decimal>,
    snapshot: &PriceSnapshot,
) -> Decimal {
    balance + holdings_value(holdings, snapshot)
}

/// Realized profit or loss for a sell: sale price against the average cost
/// basis, per unit, times the amount sold.
pub fn realized_pnl(sale_price: Decimal, cost_basis: Decimal, amount: Decimal) -> Decimal {
    (sale_price - cost_basis) * amount
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Crypto;
    use rust_decimal_macros::dec;

    fn snapshot(prices: &[(&str, Decimal)]) -> PriceSnapshot {
        PriceSnapshot::new(
            prices
                .iter()
                .map(|(symbol, price)| Crypto {
                    name: symbol.to_string(),
                    symbol: symbol.to_string(),
                    price: *price,
                    change24h: dec!(0),
                })
                .collect(),
        )
    }

    #[test]
    fn values_holdings_against_snapshot() {
        let snapshot = snapshot(&[("BTC", dec!(50000)), ("ETH", dec!(2000))]);
        let holdings = HashMap::from([
            ("BTC".to_string(), dec!(0.1)),
            ("ETH".to_string(), dec!(2)),
        ]);

        assert_eq!(holdings_value(&holdings, &snapshot), dec!(9000.0));
        assert_eq!(total_value(dec!(1000), &holdings, &snapshot), dec!(10000.0));
    }

    #[test]
    fn unpriced_symbol_contributes_zero() {
        let snapshot = snapshot(&[("BTC", dec!(50000))]);
        let holdings = HashMap::from([
            ("BTC".to_string(), dec!(0.1)),
            ("DELISTED".to_string(), dec!(100)),
        ]);

        assert_eq!(holdings_value(&holdings, &snapshot), dec!(5000.0));
    }

    #[test]
    fn empty_holdings_value_is_zero() {
        let snapshot = snapshot(&[("BTC", dec!(50000))]);
        assert_eq!(holdings_value(&HashMap::new(), &snapshot), Decimal::ZERO);
    }

    #[test]
    fn realized_pnl_is_price_minus_basis_times_amount() {
        assert_eq!(realized_pnl(dec!(60000), dec!(50000), dec!(0.1)), dec!(1000.0));
        assert_eq!(realized_pnl(dec!(40000), dec!(50000), dec!(0.1)), dec!(-1000.0));
        assert_eq!(realized_pnl(dec!(50000), dec!(50000), dec!(0.1)), dec!(0));
    }
}
