//! Wire types for transaction responses.
//!
//! The list arrives as raw JSON values; each entry is decoded into the
//! response struct its `type` selects. `side` and `reason` stay strings and
//! are parsed during conversion.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `GET /v1/accounts/{account_id}/transactions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<serde_json::Value>,
}

/// `tradeOpened` / `tradesClosed[]`. `{}` when nothing applies.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TradeRefResponse {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub units: u64,
}

/// `tradeReduced`. `{}` when nothing applies.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TradeReducedResponse {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub units: u64,
    #[serde(default)]
    pub pl: Decimal,
    #[serde(default)]
    pub interest: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketOrderCreateResponse {
    pub id: u64,
    pub account_id: u64,
    pub time: DateTime<Utc>,
    pub instrument: String,
    pub units: u64,
    pub side: String,
    pub price: Decimal,
    #[serde(default)]
    pub pl: Decimal,
    #[serde(default)]
    pub interest: Decimal,
    #[serde(default)]
    pub account_balance: Decimal,
    #[serde(default)]
    pub lower_bound: Option<Decimal>,
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    #[serde(default)]
    pub take_profit_price: Option<Decimal>,
    #[serde(default)]
    pub stop_loss_price: Option<Decimal>,
    #[serde(default)]
    pub trailing_stop_loss_distance: Option<Decimal>,
    #[serde(default)]
    pub trade_opened: Option<TradeRefResponse>,
    #[serde(default)]
    pub trade_reduced: Option<TradeReducedResponse>,
    #[serde(default)]
    pub trades_closed: Vec<TradeRefResponse>,
}

/// Shared body of the three pending-order-create types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PendingOrderCreateResponse {
    pub id: u64,
    pub account_id: u64,
    pub time: DateTime<Utc>,
    pub instrument: String,
    pub units: u64,
    pub side: String,
    pub price: Decimal,
    #[serde(deserialize_with = "crate::shared::serde_util::lenient_time::deserialize")]
    pub expiry: DateTime<Utc>,
    pub reason: String,
    #[serde(default)]
    pub lower_bound: Option<Decimal>,
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    #[serde(default)]
    pub take_profit_price: Option<Decimal>,
    #[serde(default)]
    pub stop_loss_price: Option<Decimal>,
    #[serde(default)]
    pub trailing_stop_loss_distance: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderCancelResponse {
    pub id: u64,
    pub account_id: u64,
    pub time: DateTime<Utc>,
    pub order_id: u64,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilledResponse {
    pub id: u64,
    pub account_id: u64,
    pub time: DateTime<Utc>,
    pub order_id: u64,
    pub instrument: String,
    pub units: u64,
    pub side: String,
    pub price: Decimal,
    #[serde(default)]
    pub pl: Decimal,
    #[serde(default)]
    pub interest: Decimal,
    #[serde(default)]
    pub account_balance: Decimal,
    #[serde(default)]
    pub trade_opened: Option<TradeRefResponse>,
    #[serde(default)]
    pub trade_reduced: Option<TradeReducedResponse>,
    #[serde(default)]
    pub trades_closed: Vec<TradeRefResponse>,
}

/// Shared body of `TRADE_CLOSE` and the stop fills.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeCloseResponse {
    pub id: u64,
    pub account_id: u64,
    pub time: DateTime<Utc>,
    pub trade_id: u64,
    pub instrument: String,
    pub units: u64,
    pub side: String,
    pub price: Decimal,
    #[serde(default)]
    pub pl: Decimal,
    #[serde(default)]
    pub interest: Decimal,
    #[serde(default)]
    pub account_balance: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyInterestResponse {
    pub id: u64,
    pub account_id: u64,
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub instrument: Option<String>,
    pub interest: Decimal,
    #[serde(default)]
    pub account_balance: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferFundsResponse {
    pub id: u64,
    pub account_id: u64,
    pub time: DateTime<Utc>,
    pub amount: Decimal,
    #[serde(default)]
    pub account_balance: Decimal,
}
