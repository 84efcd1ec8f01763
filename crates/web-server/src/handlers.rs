use crate::{error::AppError, AppState};
use axum::{extract::State, Json};
use core_types::{AccountSnapshot, AccountValue, Crypto, TradeRequest, TradeResponse, TradeSide};
use std::sync::Arc;

/// # GET /api/cryptos
/// The latest published price listing, in catalog order.
pub async fn get_cryptos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Crypto>>, AppError> {
    let snapshot = state.board.snapshot()?;
    Ok(Json(snapshot.cryptos().to_vec()))
}

/// # POST /api/trade
/// Executes a trade intent against the ledger.
///
/// Validation rejections are a normal outcome for the user to remediate, so
/// they come back as HTTP 200 with `success: false` and the untouched
/// account; only upstream unavailability becomes an HTTP error.
pub async fn execute_trade(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TradeRequest>,
) -> Result<Json<TradeResponse>, AppError> {
    match state
        .ledger
        .execute_trade(request.side, &request.symbol, request.amount)
        .await
    {
        Ok(account) => {
            let message = match request.side {
                TradeSide::Buy => "Purchase successful",
                TradeSide::Sell => "Sale successful",
            };
            Ok(Json(TradeResponse {
                success: true,
                message: message.to_string(),
                account,
            }))
        }
        Err(err) if err.is_rejection() => {
            let account = state.ledger.snapshot().await;
            Ok(Json(TradeResponse {
                success: false,
                message: err.to_string(),
                account,
            }))
        }
        Err(err) => Err(AppError::Trade(err)),
    }
}

/// # POST /api/reset
/// Reinitializes the account and returns the fresh snapshot.
pub async fn reset_account(State(state): State<Arc<AppState>>) -> Json<AccountSnapshot> {
    Json(state.ledger.reset().await)
}

/// # GET /api/account
pub async fn get_account(State(state): State<Arc<AppState>>) -> Json<AccountSnapshot> {
    Json(state.ledger.snapshot().await)
}

/// # GET /api/account/value
/// The account valued against the latest prices.
pub async fn get_account_value(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AccountValue>, AppError> {
    Ok(Json(state.ledger.account_value().await?))
}
