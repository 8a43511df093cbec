//! Wire types for position responses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionResponse {
    pub instrument: String,
    pub units: u64,
    pub side: String,
    pub avg_price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionsResponse {
    pub positions: Vec<PositionResponse>,
}

/// `DELETE /v1/accounts/{account_id}/positions/{instrument}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionClosedResponse {
    #[serde(default)]
    pub ids: Vec<u64>,
    pub instrument: String,
    pub total_units: u64,
    pub price: Decimal,
}
