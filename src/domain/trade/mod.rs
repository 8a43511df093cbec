//! Trade domain: open trades and their closing confirmations.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::Side;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use client::{TradesQuery, UpdateTradeRequest};

/// An open trade.
///
/// Stop loss, take profit and trailing stop are zero when unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trade {
    pub id: u64,
    pub units: u64,
    pub side: Side,
    pub instrument: String,
    pub time: DateTime<Utc>,
    pub price: Decimal,
    pub take_profit: Decimal,
    pub stop_loss: Decimal,
    /// Trailing stop distance in pips.
    pub trailing_stop: Decimal,
    /// Current trailing stop price, when a trailing stop is set.
    pub trailing_amount: Decimal,
}

/// Result of closing a trade at market.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeClosed {
    pub id: u64,
    pub instrument: String,
    pub price: Decimal,
    /// Realized profit in account currency.
    pub profit: Decimal,
    pub side: Side,
    pub time: DateTime<Utc>,
}
