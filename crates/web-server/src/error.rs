use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ledger::TradeError;
use serde_json::json;
use thiserror::Error;
use tracing;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Market data error: {0}")]
    MarketData(#[from] market_data::MarketDataError),
    #[error("Trade error: {0}")]
    Trade(#[from] TradeError),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Validation rejections never reach this point (the trade handler turns
/// them into soft `success: false` responses); what lands here is the
/// retryable upstream condition or a programming error.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::MarketData(err) => {
                tracing::error!(error = ?err, "Market data unavailable.");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Market data is currently unavailable".to_string(),
                )
            }
            AppError::Trade(TradeError::MarketUnavailable(msg)) => {
                tracing::error!(error = %msg, "Market data unavailable during trade.");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Market data is currently unavailable".to_string(),
                )
            }
            AppError::Trade(err) => {
                tracing::error!(error = ?err, "Unexpected trade rejection escalated.");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
