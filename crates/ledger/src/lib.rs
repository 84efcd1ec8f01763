//! # Ledger Crate
//!
//! This crate owns the trading account: the cash balance, the holdings map,
//! the running average cost basis, and the append-only transaction log. It
//! is the only place account state is ever mutated.
//!
//! ## Architectural Principles
//!
//! - **State vs. Logic Decoupling:** `validator` and `valuator` are pure
//!   function layers; `Account` is the state machine they inform. The
//!   `Ledger` wraps the account in a mutex and is the single public
//!   mutation path, so validate-mutate-append is always one atomic unit.
//! - **Server-authoritative pricing:** a trade executes at whatever price
//!   the board shows when the ledger validates it. Callers submit intent
//!   (side, symbol, amount), never a price.
//!
//! ## Public API
//!
//! - `Ledger`: execute trades, reset, snapshot, value the account.
//! - `Account`: the in-memory state, exposed read-only.
//! - `validator` / `valuator`: the pure check and valuation layers.
//! - `TradeError`: the structured rejection and failure kinds.

pub mod account;
pub mod error;
pub mod validator;
pub mod valuator;

// Re-export the key components to provide a clean, public-facing API.
pub use account::Account;
pub use error::TradeError;

use core_types::{AccountSnapshot, AccountValue, TradeSide};
use market_data::PriceBoard;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The serialized mutation path around the single account.
///
/// `execute_trade` and `reset` hold the account lock across the whole
/// validate-mutate-append sequence, so two concurrent trades can never both
/// pass validation against the same stale balance.
pub struct Ledger {
    account: Mutex<Account>,
    board: Arc<PriceBoard>,
    initial_balance: Decimal,
}

impl Ledger {
    pub fn new(initial_balance: Decimal, board: Arc<PriceBoard>) -> Self {
        Self {
            account: Mutex::new(Account::new(initial_balance)),
            board,
            initial_balance,
        }
    }

    /// Validates and executes a trade at the latest published price,
    /// returning the updated account snapshot.
    ///
    /// On any error the account is untouched: validation runs before the
    /// first mutation, and the state transition itself is all-or-nothing.
    pub async fn execute_trade(
        &self,
        side: TradeSide,
        symbol: &str,
        amount: Decimal,
    ) -> Result<AccountSnapshot, TradeError> {
        let prices = self
            .board
            .snapshot()
            .map_err(|e| TradeError::MarketUnavailable(e.to_string()))?;

        let mut account = self.account.lock().await;
        let price = validator::validate(&account, &prices, side, symbol, amount)?;

        match side {
            TradeSide::Buy => {
                account.apply_buy(symbol, amount, price)?;
                tracing::info!(symbol, %amount, %price, "Executed buy.");
            }
            TradeSide::Sell => {
                let profit_loss = account.apply_sell(symbol, amount, price)?;
                tracing::info!(symbol, %amount, %price, %profit_loss, "Executed sell.");
            }
        }

        Ok(account.snapshot())
    }

    /// Restores the initial balance and discards holdings, basis state, and
    /// history. Always succeeds; calling it twice yields identical
    /// snapshots.
    pub async fn reset(&self) -> AccountSnapshot {
        let mut account = self.account.lock().await;
        *account = Account::new(self.initial_balance);
        tracing::info!(initial_balance = %self.initial_balance, "Account reset.");
        account.snapshot()
    }

    /// A read-only copy of the current account state.
    pub async fn snapshot(&self) -> AccountSnapshot {
        self.account.lock().await.snapshot()
    }

    /// The account valued against the latest price snapshot.
    pub async fn account_value(&self) -> Result<AccountValue, TradeError> {
        let prices = self
            .board
            .snapshot()
            .map_err(|e| TradeError::MarketUnavailable(e.to_string()))?;

        let account = self.account.lock().await;
        let holdings_value = valuator::holdings_value(account.holdings(), &prices);
        Ok(AccountValue {
            balance: account.balance(),
            holdings_value,
            total_value: account.balance() + holdings_value,
        })
    }
}
