//! Transaction domain: the account's audit trail.
//!
//! Entries are decoded by their `type` discriminator. Every declared
//! [`TransactionType`] parses, but only some have a model; the rest surface as
//! [`SdkError::UnsupportedVariant`](crate::error::SdkError::UnsupportedVariant)
//! rather than being dropped.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::{Reason, Side, TransactionType};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use client::TransactionsQuery;

// ─── Transaction ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Transaction {
    MarketOrderCreate(MarketOrderCreate),
    /// `STOP_ORDER_CREATE`, `LIMIT_ORDER_CREATE` or `MARKET_IF_TOUCHED_ORDER_CREATE`.
    PendingOrderCreate(PendingOrderCreate),
    OrderCancel(OrderCancel),
    OrderFilled(OrderFilled),
    /// `TRADE_CLOSE` or one of the stop fills that close a trade.
    TradeClose(TradeClose),
    DailyInterest(DailyInterest),
    TransferFunds(TransferFunds),
}

impl Transaction {
    pub fn id(&self) -> u64 {
        match self {
            Transaction::MarketOrderCreate(t) => t.id,
            Transaction::PendingOrderCreate(t) => t.id,
            Transaction::OrderCancel(t) => t.id,
            Transaction::OrderFilled(t) => t.id,
            Transaction::TradeClose(t) => t.id,
            Transaction::DailyInterest(t) => t.id,
            Transaction::TransferFunds(t) => t.id,
        }
    }

    pub fn account_id(&self) -> u64 {
        match self {
            Transaction::MarketOrderCreate(t) => t.account_id,
            Transaction::PendingOrderCreate(t) => t.account_id,
            Transaction::OrderCancel(t) => t.account_id,
            Transaction::OrderFilled(t) => t.account_id,
            Transaction::TradeClose(t) => t.account_id,
            Transaction::DailyInterest(t) => t.account_id,
            Transaction::TransferFunds(t) => t.account_id,
        }
    }

    pub fn time(&self) -> DateTime<Utc> {
        match self {
            Transaction::MarketOrderCreate(t) => t.time,
            Transaction::PendingOrderCreate(t) => t.time,
            Transaction::OrderCancel(t) => t.time,
            Transaction::OrderFilled(t) => t.time,
            Transaction::TradeClose(t) => t.time,
            Transaction::DailyInterest(t) => t.time,
            Transaction::TransferFunds(t) => t.time,
        }
    }

    /// The wire discriminator this entry was decoded from.
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            Transaction::MarketOrderCreate(_) => TransactionType::MarketOrderCreate,
            Transaction::PendingOrderCreate(t) => t.transaction_type,
            Transaction::OrderCancel(_) => TransactionType::OrderCancel,
            Transaction::OrderFilled(_) => TransactionType::OrderFilled,
            Transaction::TradeClose(t) => t.transaction_type,
            Transaction::DailyInterest(_) => TransactionType::DailyInterest,
            Transaction::TransferFunds(_) => TransactionType::TransferFunds,
        }
    }
}

// ─── Trade references ────────────────────────────────────────────────────────

/// A trade opened or closed as part of a fill.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TradeRef {
    pub id: u64,
    pub units: u64,
}

/// A trade partially closed as part of a fill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeReduced {
    pub id: u64,
    pub units: u64,
    pub pl: Decimal,
    pub interest: Decimal,
}

// ─── Variants ────────────────────────────────────────────────────────────────

/// A market order was executed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketOrderCreate {
    pub id: u64,
    pub account_id: u64,
    pub time: DateTime<Utc>,
    pub instrument: String,
    pub units: u64,
    pub side: Side,
    pub price: Decimal,
    /// Realized profit/loss.
    pub pl: Decimal,
    pub interest: Decimal,
    pub account_balance: Decimal,
    pub lower_bound: Option<Decimal>,
    pub upper_bound: Option<Decimal>,
    pub take_profit_price: Option<Decimal>,
    pub stop_loss_price: Option<Decimal>,
    pub trailing_stop_loss_distance: Option<Decimal>,
    pub trade_opened: Option<TradeRef>,
    pub trade_reduced: Option<TradeReduced>,
    pub trades_closed: Vec<TradeRef>,
}

/// A limit, stop or market-if-touched order was placed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PendingOrderCreate {
    pub id: u64,
    pub account_id: u64,
    pub time: DateTime<Utc>,
    pub transaction_type: TransactionType,
    pub instrument: String,
    pub units: u64,
    pub side: Side,
    pub price: Decimal,
    pub expiry: DateTime<Utc>,
    pub reason: Reason,
    pub lower_bound: Option<Decimal>,
    pub upper_bound: Option<Decimal>,
    pub take_profit_price: Option<Decimal>,
    pub stop_loss_price: Option<Decimal>,
    pub trailing_stop_loss_distance: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderCancel {
    pub id: u64,
    pub account_id: u64,
    pub time: DateTime<Utc>,
    pub order_id: u64,
    pub reason: Reason,
}

/// A pending order was triggered and executed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderFilled {
    pub id: u64,
    pub account_id: u64,
    pub time: DateTime<Utc>,
    pub order_id: u64,
    pub instrument: String,
    pub units: u64,
    pub side: Side,
    pub price: Decimal,
    pub pl: Decimal,
    pub interest: Decimal,
    pub account_balance: Decimal,
    pub trade_opened: Option<TradeRef>,
    pub trade_reduced: Option<TradeReduced>,
    pub trades_closed: Vec<TradeRef>,
}

/// A trade was closed, by request or by one of its stops.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeClose {
    pub id: u64,
    pub account_id: u64,
    pub time: DateTime<Utc>,
    pub transaction_type: TransactionType,
    pub trade_id: u64,
    pub instrument: String,
    pub units: u64,
    pub side: Side,
    pub price: Decimal,
    pub pl: Decimal,
    pub interest: Decimal,
    pub account_balance: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyInterest {
    pub id: u64,
    pub account_id: u64,
    pub time: DateTime<Utc>,
    pub instrument: Option<String>,
    pub interest: Decimal,
    pub account_balance: Decimal,
}

/// Funds deposited (positive) or withdrawn (negative).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransferFunds {
    pub id: u64,
    pub account_id: u64,
    pub time: DateTime<Utc>,
    pub amount: Decimal,
    pub account_balance: Decimal,
}
