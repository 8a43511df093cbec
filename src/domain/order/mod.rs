//! Order domain: pending and filled orders.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::{OrderType, Side};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use client::{CreateOrderRequest, OrdersQuery, UpdateOrderRequest};

// ─── Order ───────────────────────────────────────────────────────────────────

/// An order as the API reports it.
///
/// `type == market` decodes to [`Order::Market`]. Every price-triggered type
/// (`limit`, `stop`, `marketIfTouched`) decodes to [`Order::MarketIfTouched`],
/// which keeps the exact [`OrderType`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Order {
    Market(MarketOrder),
    MarketIfTouched(MarketIfTouchedOrder),
}

/// An order executed immediately at the current price.
///
/// Stop loss, take profit and trailing stop are zero when unset. `id` is the
/// opened trade and is `None` when the fill only closed or reduced existing
/// trades; those are listed in `trades_closed` and `trade_reduced`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketOrder {
    pub id: Option<u64>,
    pub instrument: String,
    pub units: u64,
    pub side: Side,
    pub time: DateTime<Utc>,
    pub price: Decimal,
    pub take_profit: Decimal,
    pub stop_loss: Decimal,
    pub trailing_stop: Decimal,
    pub trades_closed: Vec<u64>,
    pub trade_reduced: Option<u64>,
}

/// A pending order that triggers at `price`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketIfTouchedOrder {
    pub id: u64,
    pub instrument: String,
    pub units: u64,
    pub side: Side,
    pub order_type: OrderType,
    pub time: DateTime<Utc>,
    pub price: Decimal,
    pub take_profit: Decimal,
    pub stop_loss: Decimal,
    pub trailing_stop: Decimal,
    pub expiry: DateTime<Utc>,
    pub upper_bound: Option<Decimal>,
    pub lower_bound: Option<Decimal>,
}

impl Order {
    /// `None` for a market fill that opened no new trade.
    pub fn id(&self) -> Option<u64> {
        match self {
            Order::Market(o) => o.id,
            Order::MarketIfTouched(o) => Some(o.id),
        }
    }

    pub fn instrument(&self) -> &str {
        match self {
            Order::Market(o) => &o.instrument,
            Order::MarketIfTouched(o) => &o.instrument,
        }
    }

    pub fn order_type(&self) -> OrderType {
        match self {
            Order::Market(_) => OrderType::Market,
            Order::MarketIfTouched(o) => o.order_type,
        }
    }

    pub fn side(&self) -> Side {
        match self {
            Order::Market(o) => o.side,
            Order::MarketIfTouched(o) => o.side,
        }
    }

    pub fn units(&self) -> u64 {
        match self {
            Order::Market(o) => o.units,
            Order::MarketIfTouched(o) => o.units,
        }
    }

    pub fn price(&self) -> Decimal {
        match self {
            Order::Market(o) => o.price,
            Order::MarketIfTouched(o) => o.price,
        }
    }

    pub fn time(&self) -> DateTime<Utc> {
        match self {
            Order::Market(o) => o.time,
            Order::MarketIfTouched(o) => o.time,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Order::MarketIfTouched(_))
    }
}

// ─── OrderClosed ─────────────────────────────────────────────────────────────

/// Confirmation of a cancelled pending order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderClosed {
    pub id: u64,
    pub instrument: String,
    pub units: u64,
    pub side: Side,
    pub price: Decimal,
    pub time: DateTime<Utc>,
}
