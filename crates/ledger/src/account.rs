use crate::error::TradeError;
use core_types::{AccountSnapshot, TradeSide, Transaction};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// The single trading account: cash, holdings, the running average cost
/// basis per symbol, and the append-only trade log.
///
/// State transitions assume the trade has already passed the validator;
/// they still re-check the two balance-affecting conditions so the account
/// can never be driven negative even by a buggy caller inside this crate.
#[derive(Debug, Clone)]
pub struct Account {
    balance: Decimal,
    holdings: HashMap<String, Decimal>,
    /// Average price paid per unit of each held symbol. Maintained on buys,
    /// consumed on sells, dropped when the holding reaches zero. Not part
    /// of the public snapshot.
    avg_costs: HashMap<String, Decimal>,
    transactions: Vec<Transaction>,
}

impl Account {
    /// Creates a fresh account with the given starting cash.
    pub fn new(initial_balance: Decimal) -> Self {
        Self {
            balance: initial_balance,
            holdings: HashMap::new(),
            avg_costs: HashMap::new(),
            transactions: Vec::new(),
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// The held amount for `symbol`; zero when there is no entry.
    pub fn holding(&self, symbol: &str) -> Decimal {
        self.holdings.get(symbol).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn holdings(&self) -> &HashMap<String, Decimal> {
        &self.holdings
    }

    pub fn avg_cost(&self, symbol: &str) -> Option<Decimal> {
        self.avg_costs.get(symbol).copied()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Applies a validated buy: debit cash, credit the holding, fold the
    /// purchase into the running average cost basis, record the trade.
    pub(crate) fn apply_buy(
        &mut self,
        symbol: &str,
        amount: Decimal,
        price: Decimal,
    ) -> Result<(), TradeError> {
        let cost = price * amount;
        if cost > self.balance {
            return Err(TradeError::InsufficientFunds {
                required: cost,
                available: self.balance,
            });
        }

        self.balance -= cost;

        let held = self.holding(symbol);
        let new_held = held + amount;
        let prior_cost = self.avg_cost(symbol).unwrap_or(Decimal::ZERO) * held;
        self.avg_costs
            .insert(symbol.to_string(), (prior_cost + cost) / new_held);
        self.holdings.insert(symbol.to_string(), new_held);

        self.transactions
            .push(Transaction::new(TradeSide::Buy, symbol, amount, price, None));

        Ok(())
    }

    /// Applies a validated sell: credit cash, debit the holding, realize
    /// profit/loss against the average cost basis, record the trade.
    ///
    /// A basis entry can only be missing if the holding itself appeared
    /// without a buy; defaulting it to the sale price makes the realized
    /// P/L zero in that case.
    pub(crate) fn apply_sell(
        &mut self,
        symbol: &str,
        amount: Decimal,
        price: Decimal,
    ) -> Result<Decimal, TradeError> {
        let held = self.holding(symbol);
        if amount > held {
            return Err(TradeError::InsufficientHoldings {
                symbol: symbol.to_string(),
                requested: amount,
                available: held,
            });
        }

        let basis = self.avg_cost(symbol).unwrap_or(price);
        let profit_loss = crate::valuator::realized_pnl(price, basis, amount);

        self.balance += price * amount;

        let remaining = held - amount;
        if remaining.is_zero() {
            self.holdings.remove(symbol);
            self.avg_costs.remove(symbol);
        } else {
            self.holdings.insert(symbol.to_string(), remaining);
        }

        self.transactions.push(Transaction::new(
            TradeSide::Sell,
            symbol,
            amount,
            price,
            Some(profit_loss),
        ));

        Ok(profit_loss)
    }

    /// A point-in-time copy for consumers, transactions newest-first.
    pub fn snapshot(&self) -> AccountSnapshot {
        let mut transactions: Vec<Transaction> =
            self.transactions.iter().rev().cloned().collect();
        transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        AccountSnapshot {
            balance: self.balance,
            holdings: self.holdings.clone(),
            transactions,
        }
    }
}
