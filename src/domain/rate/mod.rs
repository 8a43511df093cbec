//! Rate domain: tradeable instruments, live quotes and historical candles.

pub mod client;
mod convert;
pub mod wire;

use crate::shared::Granularity;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use client::{CandlesQuery, InstrumentsQuery};

// ─── Instrument ──────────────────────────────────────────────────────────────

/// A tradeable instrument.
///
/// Only `instrument` is always present; the rest depend on the `fields`
/// selection of the request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Instrument {
    pub instrument: String,
    pub display_name: Option<String>,
    pub pip: Option<Decimal>,
    pub max_trade_units: Option<u64>,
    pub precision: Option<Decimal>,
    pub max_trailing_stop: Option<Decimal>,
    pub min_trailing_stop: Option<Decimal>,
    pub margin_rate: Option<Decimal>,
    pub halted: Option<bool>,
}

// ─── Price ───────────────────────────────────────────────────────────────────

/// Current quote for an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Price {
    pub instrument: String,
    pub time: DateTime<Utc>,
    pub bid: Decimal,
    pub ask: Decimal,
    /// `"halted"` while the instrument is not tradeable.
    pub status: Option<String>,
}

impl Price {
    pub fn spread(&self) -> Decimal {
        self.ask - self.bid
    }

    pub fn is_halted(&self) -> bool {
        self.status.as_deref() == Some("halted")
    }
}

// ─── Candles ─────────────────────────────────────────────────────────────────

/// Midpoint candle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandleMid {
    pub time: DateTime<Utc>,
    pub open_mid: Decimal,
    pub high_mid: Decimal,
    pub low_mid: Decimal,
    pub close_mid: Decimal,
    /// Number of ticks in the bucket.
    pub volume: u64,
    /// False for the bucket still being built.
    pub complete: bool,
}

/// Candle with separate bid and ask prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandleBidAsk {
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

/// Candles for one instrument at one granularity, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candles<C> {
    pub instrument: String,
    pub granularity: Granularity,
    pub candles: Vec<C>,
}

impl<C> Candles<C> {
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }
}

/// Candles in whichever format was requested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CandleSeries {
    Mid(Candles<CandleMid>),
    BidAsk(Candles<CandleBidAsk>),
}

impl CandleSeries {
    pub fn instrument(&self) -> &str {
        match self {
            CandleSeries::Mid(c) => &c.instrument,
            CandleSeries::BidAsk(c) => &c.instrument,
        }
    }

    pub fn granularity(&self) -> Granularity {
        match self {
            CandleSeries::Mid(c) => c.granularity,
            CandleSeries::BidAsk(c) => c.granularity,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CandleSeries::Mid(c) => c.len(),
            CandleSeries::BidAsk(c) => c.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
