//! Trades sub-client: open trade queries, stop adjustments and closing.

use super::wire::{TradeClosedResponse, TradeResponse, TradesResponse};
use super::{Trade, TradeClosed};
use crate::client::OandaClient;
use crate::error::SdkError;
use crate::http::{Fields, Transport};
use crate::shared::validate::list_filter_fields;

use rust_decimal::Decimal;

const TRADES_ROUTE: &str = "/v1/accounts/{account_id}/trades";
const TRADE_ROUTE: &str = "/v1/accounts/{account_id}/trades/{trade_id}";

/// Filters for `list`. Same rules as the order list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradesQuery {
    pub max_id: Option<u64>,
    /// Max results (1-500).
    pub count: Option<u32>,
    pub instrument: Option<String>,
    pub ids: Vec<u64>,
}

impl TradesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_id(mut self, max_id: u64) -> Self {
        self.max_id = Some(max_id);
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_instrument(mut self, instrument: impl Into<String>) -> Self {
        self.instrument = Some(instrument.into());
        self
    }

    pub fn with_ids(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.ids = ids.into_iter().collect();
        self
    }

    pub fn to_fields(&self) -> Result<Fields, SdkError> {
        list_filter_fields(
            self.max_id,
            None,
            self.count,
            self.instrument.as_deref(),
            &self.ids,
        )
    }
}

/// New stop levels for an open trade. At least one must be set; a zero value
/// removes that stop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateTradeRequest {
    pub stop_loss: Option<Decimal>,
    pub take_profit: Option<Decimal>,
    /// Trailing stop distance in pips.
    pub trailing_stop: Option<Decimal>,
}

impl UpdateTradeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stop_loss(mut self, stop_loss: Decimal) -> Self {
        self.stop_loss = Some(stop_loss);
        self
    }

    pub fn with_take_profit(mut self, take_profit: Decimal) -> Self {
        self.take_profit = Some(take_profit);
        self
    }

    pub fn with_trailing_stop(mut self, distance: Decimal) -> Self {
        self.trailing_stop = Some(distance);
        self
    }

    pub fn to_fields(&self) -> Result<Fields, SdkError> {
        let mut fields = Fields::new();
        fields
            .push_opt("stopLoss", self.stop_loss)
            .push_opt("takeProfit", self.take_profit)
            .push_opt("trailingStop", self.trailing_stop);
        if fields.is_empty() {
            return Err(SdkError::Validation(
                "trade update needs at least one of stopLoss, takeProfit, trailingStop".to_string(),
            ));
        }
        Ok(fields)
    }
}

pub struct Trades<'a, T> {
    pub(crate) client: &'a OandaClient<T>,
}

impl<'a, T: Transport> Trades<'a, T> {
    pub async fn list(&self, account_id: u64, query: &TradesQuery) -> Result<Vec<Trade>, SdkError> {
        let fields = query.to_fields()?;
        let account = account_id.to_string();
        let resp: TradesResponse = self
            .client
            .http
            .get(TRADES_ROUTE, &[("account_id", account.as_str())], fields)
            .await?;
        resp.trades.into_iter().map(Trade::try_from).collect()
    }

    pub async fn get(&self, account_id: u64, trade_id: u64) -> Result<Trade, SdkError> {
        let account = account_id.to_string();
        let trade = trade_id.to_string();
        let resp: TradeResponse = self
            .client
            .http
            .get(
                TRADE_ROUTE,
                &[("account_id", account.as_str()), ("trade_id", trade.as_str())],
                Fields::new(),
            )
            .await?;
        resp.try_into()
    }

    pub async fn update(
        &self,
        account_id: u64,
        trade_id: u64,
        request: &UpdateTradeRequest,
    ) -> Result<Trade, SdkError> {
        let fields = request.to_fields()?;
        let account = account_id.to_string();
        let trade = trade_id.to_string();
        let resp: TradeResponse = self
            .client
            .http
            .patch(
                TRADE_ROUTE,
                &[("account_id", account.as_str()), ("trade_id", trade.as_str())],
                fields,
            )
            .await?;
        resp.try_into()
    }

    /// Close a trade at the current market price.
    pub async fn close(&self, account_id: u64, trade_id: u64) -> Result<TradeClosed, SdkError> {
        let account = account_id.to_string();
        let trade = trade_id.to_string();
        let resp: TradeClosedResponse = self
            .client
            .http
            .delete(
                TRADE_ROUTE,
                &[("account_id", account.as_str()), ("trade_id", trade.as_str())],
                Fields::new(),
            )
            .await?;
        resp.try_into()
    }
}
