//! Wire types for order responses.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single order. `type` and `side` stay strings and are parsed in
/// `convert.rs`, so unknown values surface as `UnknownVariant`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: u64,
    pub instrument: String,
    pub units: u64,
    pub side: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub time: DateTime<Utc>,
    pub price: Decimal,
    #[serde(default)]
    pub take_profit: Decimal,
    #[serde(default)]
    pub stop_loss: Decimal,
    #[serde(default)]
    pub trailing_stop: Decimal,
    #[serde(default)]
    pub expiry: Option<DateTime<Utc>>,
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    #[serde(default)]
    pub lower_bound: Option<Decimal>,
}

/// `GET /v1/accounts/{account_id}/orders`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersResponse {
    pub orders: Vec<OrderResponse>,
}

/// `tradeOpened` / `orderOpened` / `tradesClosed[]` / `tradeReduced` object
/// inside a create response.
///
/// The API sends `{}` for an object that does not apply, so every field is
/// optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OpenedResponse {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub units: Option<u64>,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub take_profit: Decimal,
    #[serde(default)]
    pub stop_loss: Decimal,
    #[serde(default)]
    pub trailing_stop: Decimal,
    #[serde(default)]
    pub expiry: Option<DateTime<Utc>>,
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    #[serde(default)]
    pub lower_bound: Option<Decimal>,
}

impl OpenedResponse {
    /// Whether the server actually opened something.
    pub fn is_present(&self) -> bool {
        self.id.is_some()
    }
}

/// `POST /v1/accounts/{account_id}/orders`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub instrument: String,
    pub time: DateTime<Utc>,
    pub price: Decimal,
    #[serde(default)]
    pub trade_opened: Option<OpenedResponse>,
    #[serde(default)]
    pub order_opened: Option<OpenedResponse>,
    #[serde(default)]
    pub trades_closed: Vec<OpenedResponse>,
    #[serde(default)]
    pub trade_reduced: Option<OpenedResponse>,
}

/// `DELETE /v1/accounts/{account_id}/orders/{order_id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderClosedResponse {
    pub id: u64,
    pub instrument: String,
    #[serde(default)]
    pub units: u64,
    pub side: String,
    pub price: Decimal,
    pub time: DateTime<Utc>,
}
