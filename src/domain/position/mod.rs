//! Position domain: net exposure per instrument.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net open position in one instrument.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub instrument: String,
    pub side: Side,
    pub units: u64,
    /// Volume-weighted average entry price.
    pub avg_price: Decimal,
}

/// Result of closing every trade in an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PositionClosed {
    /// Ids of the trades that were closed.
    pub ids: Vec<u64>,
    pub instrument: String,
    pub total_units: u64,
    pub price: Decimal,
}
