use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("No price snapshot has been published yet")]
    Unavailable,

    #[error("Failed to reach the ticker endpoint: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to deserialize the ticker response: {0}")]
    Deserialization(String),

    #[error("Invalid data format from feed: {0}")]
    InvalidData(String),
}
