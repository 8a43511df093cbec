//! Wire types for trade responses.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// REST response for a single trade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeResponse {
    pub id: u64,
    pub units: u64,
    pub side: String,
    pub instrument: String,
    pub time: DateTime<Utc>,
    pub price: Decimal,
    #[serde(default)]
    pub take_profit: Decimal,
    #[serde(default)]
    pub stop_loss: Decimal,
    #[serde(default)]
    pub trailing_stop: Decimal,
    #[serde(default)]
    pub trailing_amount: Decimal,
}

/// REST response for trades list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradesResponse {
    pub trades: Vec<TradeResponse>,
}

/// `DELETE /v1/accounts/{account_id}/trades/{trade_id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeClosedResponse {
    pub id: u64,
    pub instrument: String,
    pub price: Decimal,
    #[serde(default)]
    pub profit: Decimal,
    pub side: String,
    pub time: DateTime<Utc>,
}
