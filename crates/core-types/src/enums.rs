use serde::{Deserialize, Serialize};

/// The direction of a trade. Serialized as lowercase `"buy"`/`"sell"`,
/// which is the form the presentation layer submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    /// Returns the opposite side of the trade
    pub fn opposite(&self) -> Self {
        match self {
            TradeSide::Buy => TradeSide::Sell,
            TradeSide::Sell => TradeSide::Buy,
        }
    }
}
