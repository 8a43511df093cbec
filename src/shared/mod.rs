//! Shared enumerations used across all domain modules.
//!
//! Every enumeration travels over the wire as its exact string name. Each one
//! gets an explicit `as_str` / `FromStr` pair, and serde goes through that same
//! mapping, so an unknown string surfaces as a [`ParseEnumError`] naming the
//! enumeration instead of a generic conversion failure.

pub mod serde_util;
pub mod validate;

use crate::error::ParseEnumError;

/// Declares a string-mapped wire enumeration.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire name.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(ParseEnumError {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = ParseEnumError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

// ─── Side ────────────────────────────────────────────────────────────────────

wire_enum! {
    /// Direction of an order, trade or position.
    pub enum Side: "side" {
        Buy => "buy",
        Sell => "sell",
    }
}

// ─── OrderType ───────────────────────────────────────────────────────────────

wire_enum! {
    pub enum OrderType: "order type" {
        Limit => "limit",
        Stop => "stop",
        MarketIfTouched => "marketIfTouched",
        Market => "market",
    }
}

impl OrderType {
    /// Whether the order waits for a trigger price (and so needs price + expiry).
    pub fn is_pending(&self) -> bool {
        !matches!(self, OrderType::Market)
    }
}

// ─── Granularity ─────────────────────────────────────────────────────────────

wire_enum! {
    /// Candle bucket duration.
    pub enum Granularity: "granularity" {
        Second5 => "S5",
        Second10 => "S10",
        Second15 => "S15",
        Second30 => "S30",
        Minute1 => "M1",
        Minute2 => "M2",
        Minute3 => "M3",
        Minute5 => "M5",
        Minute10 => "M10",
        Minute15 => "M15",
        Minute30 => "M30",
        Hour1 => "H1",
        Hour2 => "H2",
        Hour3 => "H3",
        Hour4 => "H4",
        Hour6 => "H6",
        Hour8 => "H8",
        Hour12 => "H12",
        Day => "D",
        Week => "W",
        Month => "M",
    }
}

impl Default for Granularity {
    fn default() -> Self {
        Granularity::Second5
    }
}

impl Granularity {
    /// Duration of one candle in seconds. `None` for months, which vary.
    pub fn seconds(&self) -> Option<u64> {
        let secs = match self {
            Self::Second5 => 5,
            Self::Second10 => 10,
            Self::Second15 => 15,
            Self::Second30 => 30,
            Self::Minute1 => 60,
            Self::Minute2 => 120,
            Self::Minute3 => 180,
            Self::Minute5 => 300,
            Self::Minute10 => 600,
            Self::Minute15 => 900,
            Self::Minute30 => 1_800,
            Self::Hour1 => 3_600,
            Self::Hour2 => 7_200,
            Self::Hour3 => 10_800,
            Self::Hour4 => 14_400,
            Self::Hour6 => 21_600,
            Self::Hour8 => 28_800,
            Self::Hour12 => 43_200,
            Self::Day => 86_400,
            Self::Week => 604_800,
            Self::Month => return None,
        };
        Some(secs)
    }
}

// ─── CandleFormat ────────────────────────────────────────────────────────────

wire_enum! {
    pub enum CandleFormat: "candle format" {
        Midpoint => "midpoint",
        BidAsk => "bidask",
    }
}

// ─── WeeklyAlignment ─────────────────────────────────────────────────────────

wire_enum! {
    /// Day of week that weekly candles start on.
    pub enum WeeklyAlignment: "weekly alignment" {
        Monday => "Monday",
        Tuesday => "Tuesday",
        Wednesday => "Wednesday",
        Thursday => "Thursday",
        Friday => "Friday",
        Saturday => "Saturday",
        Sunday => "Sunday",
    }
}

impl Default for WeeklyAlignment {
    fn default() -> Self {
        WeeklyAlignment::Friday
    }
}

// ─── TransactionType ─────────────────────────────────────────────────────────

wire_enum! {
    pub enum TransactionType: "transaction type" {
        MarketOrderCreate => "MARKET_ORDER_CREATE",
        StopOrderCreate => "STOP_ORDER_CREATE",
        LimitOrderCreate => "LIMIT_ORDER_CREATE",
        MarketIfTouchedOrderCreate => "MARKET_IF_TOUCHED_ORDER_CREATE",
        OrderUpdate => "ORDER_UPDATE",
        OrderCancel => "ORDER_CANCEL",
        OrderFilled => "ORDER_FILLED",
        TradeUpdate => "TRADE_UPDATE",
        TradeClose => "TRADE_CLOSE",
        MigrateTradeOpen => "MIGRATE_TRADE_OPEN",
        MigrateTradeClose => "MIGRATE_TRADE_CLOSE",
        StopLossFilled => "STOP_LOSS_FILLED",
        TakeProfitFilled => "TAKE_PROFIT_FILLED",
        TrailingStopFilled => "TRAILING_STOP_FILLED",
        MarginCallEnter => "MARGIN_CALL_ENTER",
        MarginCallExit => "MARGIN_CALL_EXIT",
        MarginCloseout => "MARGIN_CLOSEOUT",
        SetMarginRate => "SET_MARGIN_RATE",
        TransferFunds => "TRANSFER_FUNDS",
        DailyInterest => "DAILY_INTEREST",
        Fee => "FEE",
    }
}

// ─── Reason ──────────────────────────────────────────────────────────────────

wire_enum! {
    /// Why a pending order was created or cancelled.
    pub enum Reason: "reason" {
        ClientRequest => "CLIENT_REQUEST",
        Migration => "MIGRATION",
        ReplacesOrder => "REPLACES_ORDER",
        TimeInForceExpired => "TIME_IN_FORCE_EXPIRED",
        OrderFilled => "ORDER_FILLED",
        InsufficientMargin => "INSUFFICIENT_MARGIN",
        BoundsViolation => "BOUNDS_VIOLATION",
        UnitsViolation => "UNITS_VIOLATION",
        StopLossViolation => "STOP_LOSS_VIOLATION",
        TakeProfitViolation => "TAKE_PROFIT_VIOLATION",
        TrailingStopViolation => "TRAILING_STOP_VIOLATION",
        MarketHalted => "MARKET_HALTED",
        AccountNonTradable => "ACCOUNT_NON_TRADABLE",
        NoNewPositionAllowed => "NO_NEW_POSITION_ALLOWED",
        InsufficientLiquidity => "INSUFFICIENT_LIQUIDITY",
    }
}
