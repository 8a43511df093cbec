//! # oanda-rest
//!
//! Typed async client for the OANDA fxTrade REST v1 API.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: shared enumerations, domain models, wire types and conversions
//! 2. **HTTP**: route templating, field assembly, the [`http::Transport`] seam and
//!    the `OandaHttp` endpoint base
//! 3. **High-Level Client**: `OandaClient` with one sub-client per endpoint group
//!
//! Every operation is a single request/response round trip. Nothing is cached
//! and nothing is retried.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use oanda_rest::prelude::*;
//!
//! let client = OandaClient::builder()
//!     .api_key("your-token")
//!     .account_type(AccountType::Practice)
//!     .build()?;
//!
//! let prices = client.rates().prices(&["EUR_USD", "USD_JPY"]).await?;
//! let order = client
//!     .orders()
//!     .create(5517316, &CreateOrderRequest::market("EUR_USD", 100, Side::Buy))
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared wire enumerations and serde helpers.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Base URLs and account types.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Endpoint base over a pluggable transport.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `OandaClient`, the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared enumerations
    pub use crate::shared::{
        CandleFormat, Granularity, OrderType, Reason, Side, TransactionType, WeeklyAlignment,
    };

    // Domain types: order
    pub use crate::domain::order::{
        CreateOrderRequest, MarketIfTouchedOrder, MarketOrder, Order, OrderClosed, OrdersQuery,
        UpdateOrderRequest,
    };

    // Domain types: trade, position
    pub use crate::domain::position::{Position, PositionClosed};
    pub use crate::domain::trade::{Trade, TradeClosed, TradesQuery, UpdateTradeRequest};

    // Domain types: rates
    pub use crate::domain::rate::{
        CandleBidAsk, CandleMid, CandleSeries, Candles, CandlesQuery, Instrument,
        InstrumentsQuery, Price,
    };

    // Domain types: transactions
    pub use crate::domain::transaction::{Transaction, TransactionsQuery};

    // Errors
    pub use crate::error::{ErrorResponse, HttpError, SdkError};

    // Network
    pub use crate::network::{AccountType, PRACTICE_API_URL, REAL_API_URL};

    // HTTP seam
    pub use crate::http::{HttpRequest, Method, RawResponse, ReqwestTransport, Transport};

    // Client + sub-clients
    pub use crate::client::{
        OandaClient, OandaClientBuilder, OrdersClient, PositionsClient, RatesClient,
        TradesClient, TransactionsClient,
    };
}
