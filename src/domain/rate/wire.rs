//! Wire types for instrument, price and candle responses.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One entry of `GET /v1/instruments`.
///
/// `pip` and `precision` arrive as strings, so they go through the lenient
/// decimal reader.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentResponse {
    pub instrument: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "crate::shared::serde_util::lenient_decimal::deserialize")]
    pub pip: Option<Decimal>,
    #[serde(default)]
    pub max_trade_units: Option<u64>,
    #[serde(default, deserialize_with = "crate::shared::serde_util::lenient_decimal::deserialize")]
    pub precision: Option<Decimal>,
    #[serde(default, deserialize_with = "crate::shared::serde_util::lenient_decimal::deserialize")]
    pub max_trailing_stop: Option<Decimal>,
    #[serde(default, deserialize_with = "crate::shared::serde_util::lenient_decimal::deserialize")]
    pub min_trailing_stop: Option<Decimal>,
    #[serde(default, deserialize_with = "crate::shared::serde_util::lenient_decimal::deserialize")]
    pub margin_rate: Option<Decimal>,
    #[serde(default)]
    pub halted: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstrumentsResponse {
    pub instruments: Vec<InstrumentResponse>,
}

/// One entry of `GET /v1/prices`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceResponse {
    pub instrument: String,
    pub time: DateTime<Utc>,
    pub bid: Decimal,
    pub ask: Decimal,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricesResponse {
    pub prices: Vec<PriceResponse>,
}

/// Midpoint candle as sent with `candleFormat=midpoint`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CandleMidResponse {
    pub time: DateTime<Utc>,
    pub open_mid: Decimal,
    pub high_mid: Decimal,
    pub low_mid: Decimal,
    pub close_mid: Decimal,
    pub volume: u64,
    pub complete: bool,
}

/// Bid/ask candle as sent with `candleFormat=bidask` (the server default).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CandleBidAskResponse {
    pub time: DateTime<Utc>,
    pub open_bid: Decimal,
    pub open_ask: Decimal,
    pub high_bid: Decimal,
    pub high_ask: Decimal,
    pub low_bid: Decimal,
    pub low_ask: Decimal,
    pub close_bid: Decimal,
    pub close_ask: Decimal,
    pub volume: u64,
    pub complete: bool,
}

/// `GET /v1/candles`. `granularity` is parsed during conversion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandlesResponse<W> {
    pub instrument: String,
    pub granularity: String,
    pub candles: Vec<W>,
}
