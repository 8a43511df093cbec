//! Orders sub-client: list, create, inspect, modify and cancel orders.

use super::convert::created_order;
use super::wire::{CreateOrderResponse, OrderClosedResponse, OrderResponse, OrdersResponse};
use super::{Order, OrderClosed};
use crate::client::OandaClient;
use crate::error::SdkError;
use crate::http::{Fields, Transport};
use crate::shared::validate::{list_filter_fields, validate_non_empty};
use crate::shared::{OrderType, Side};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

const ORDERS_ROUTE: &str = "/v1/accounts/{account_id}/orders";
const ORDER_ROUTE: &str = "/v1/accounts/{account_id}/orders/{order_id}";

// ─── Request parameters ──────────────────────────────────────────────────────

/// Filters for `list`. All optional; `ids` excludes the others.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrdersQuery {
    /// Only orders with an id at or below this one.
    pub max_id: Option<u64>,
    /// Max results (1-500).
    pub count: Option<u32>,
    pub instrument: Option<String>,
    pub ids: Vec<u64>,
}

impl OrdersQuery {
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

/// Parameters for `create`.
///
/// `expiry` and `price` are required for every type except `market`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrderRequest {
    pub instrument: String,
    pub units: u64,
    pub side: Side,
    pub order_type: OrderType,
    pub expiry: Option<DateTime<Utc>>,
    pub price: Option<Decimal>,
    pub lower_bound: Option<Decimal>,
    pub upper_bound: Option<Decimal>,
    pub stop_loss: Option<Decimal>,
    pub take_profit: Option<Decimal>,
    /// Trailing stop distance in pips.
    pub trailing_stop: Option<Decimal>,
}

impl CreateOrderRequest {
    pub fn new(instrument: impl Into<String>, units: u64, side: Side, order_type: OrderType) -> Self {
        Self {
            instrument: instrument.into(),
            units,
            side,
            order_type,
            expiry: None,
            price: None,
            lower_bound: None,
            upper_bound: None,
            stop_loss: None,
            take_profit: None,
            trailing_stop: None,
        }
    }

    /// A market order.
    pub fn market(instrument: impl Into<String>, units: u64, side: Side) -> Self {
        Self::new(instrument, units, side, OrderType::Market)
    }

    pub fn with_expiry(mut self, expiry: DateTime<Utc>) -> Self {
        self.expiry = Some(expiry);
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the acceptable fill range for a market order.
    pub fn with_bounds(mut self, lower: Decimal, upper: Decimal) -> Self {
        self.lower_bound = Some(lower);
        self.upper_bound = Some(upper);
        self
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
        validate_non_empty(&self.instrument, "instrument")?;
        if self.units == 0 {
            return Err(SdkError::Validation("units must be greater than 0".to_string()));
        }

        let mut fields = Fields::new();
        fields
            .push("instrument", &self.instrument)
            .push("units", self.units)
            .push("side", self.side)
            .push("type", self.order_type);

        if self.order_type.is_pending() {
            let expiry = self.expiry.as_ref().ok_or_else(|| {
                SdkError::Validation(format!("expiry is required for {} orders", self.order_type))
            })?;
            let price = self.price.ok_or_else(|| {
                SdkError::Validation(format!("price is required for {} orders", self.order_type))
            })?;
            fields.push_time("expiry", Some(expiry)).push("price", price);
        }

        fields
            .push_opt("lowerBound", self.lower_bound)
            .push_opt("upperBound", self.upper_bound)
            .push_opt("stopLoss", self.stop_loss)
            .push_opt("takeProfit", self.take_profit)
            .push_opt("trailingStop", self.trailing_stop);
        Ok(fields)
    }
}

/// Parameters for `update`. Only the supplied fields are sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateOrderRequest {
    pub units: Option<u64>,
    pub price: Option<Decimal>,
    pub expiry: Option<DateTime<Utc>>,
    pub lower_bound: Option<Decimal>,
    pub upper_bound: Option<Decimal>,
    pub stop_loss: Option<Decimal>,
    pub take_profit: Option<Decimal>,
    pub trailing_stop: Option<Decimal>,
}

impl UpdateOrderRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_units(mut self, units: u64) -> Self {
        self.units = Some(units);
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_expiry(mut self, expiry: DateTime<Utc>) -> Self {
        self.expiry = Some(expiry);
        self
    }

    pub fn with_bounds(mut self, lower: Decimal, upper: Decimal) -> Self {
        self.lower_bound = Some(lower);
        self.upper_bound = Some(upper);
        self
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
        if self.units == Some(0) {
            return Err(SdkError::Validation("units must be greater than 0".to_string()));
        }
        let mut fields = Fields::new();
        fields
            .push_opt("units", self.units)
            .push_opt("price", self.price)
            .push_time("expiry", self.expiry.as_ref())
            .push_opt("lowerBound", self.lower_bound)
            .push_opt("upperBound", self.upper_bound)
            .push_opt("stopLoss", self.stop_loss)
            .push_opt("takeProfit", self.take_profit)
            .push_opt("trailingStop", self.trailing_stop);
        if fields.is_empty() {
            return Err(SdkError::Validation(
                "order update needs at least one field".to_string(),
            ));
        }
        Ok(fields)
    }
}

// ─── Sub-client ──────────────────────────────────────────────────────────────

pub struct Orders<'a, T> {
    pub(crate) client: &'a OandaClient<T>,
}

impl<'a, T: Transport> Orders<'a, T> {
    /// List orders on an account. Empty when the account has none.
    pub async fn list(&self, account_id: u64, query: &OrdersQuery) -> Result<Vec<Order>, SdkError> {
        let fields = query.to_fields()?;
        let account = account_id.to_string();
        let resp: OrdersResponse = self
            .client
            .http
            .get(ORDERS_ROUTE, &[("account_id", account.as_str())], fields)
            .await?;
        resp.orders.into_iter().map(Order::try_from).collect()
    }

    /// Place an order.
    ///
    /// A market order that only reduces or closes existing trades still comes
    /// back as [`Order::Market`], with no `id`.
    pub async fn create(&self, account_id: u64, request: &CreateOrderRequest) -> Result<Order, SdkError> {
        let fields = request.to_fields()?;
        let account = account_id.to_string();
        let resp: CreateOrderResponse = self
            .client
            .http
            .post(ORDERS_ROUTE, &[("account_id", account.as_str())], fields)
            .await?;
        created_order(resp, request)
    }

    pub async fn get(&self, account_id: u64, order_id: u64) -> Result<Order, SdkError> {
        let account = account_id.to_string();
        let order = order_id.to_string();
        let resp: OrderResponse = self
            .client
            .http
            .get(
                ORDER_ROUTE,
                &[("account_id", account.as_str()), ("order_id", order.as_str())],
                Fields::new(),
            )
            .await?;
        Order::try_from(resp)
    }

    pub async fn update(
        &self,
        account_id: u64,
        order_id: u64,
        request: &UpdateOrderRequest,
    ) -> Result<Order, SdkError> {
        let fields = request.to_fields()?;
        let account = account_id.to_string();
        let order = order_id.to_string();
        let resp: OrderResponse = self
            .client
            .http
            .patch(
                ORDER_ROUTE,
                &[("account_id", account.as_str()), ("order_id", order.as_str())],
                fields,
            )
            .await?;
        Order::try_from(resp)
    }

    /// Cancel a pending order.
    pub async fn close(&self, account_id: u64, order_id: u64) -> Result<OrderClosed, SdkError> {
        let account = account_id.to_string();
        let order = order_id.to_string();
        let resp: OrderClosedResponse = self
            .client
            .http
            .delete(
                ORDER_ROUTE,
                &[("account_id", account.as_str()), ("order_id", order.as_str())],
                Fields::new(),
            )
            .await?;
        OrderClosed::try_from(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_market_order_fields_skip_expiry_and_price() {
        let fields = CreateOrderRequest::market("EUR_USD", 100, Side::Buy)
            .to_fields()
            .unwrap();
        assert_eq!(fields.get("instrument"), Some("EUR_USD"));
        assert_eq!(fields.get("units"), Some("100"));
        assert_eq!(fields.get("side"), Some("buy"));
        assert_eq!(fields.get("type"), Some("market"));
        assert!(!fields.contains("expiry"));
        assert!(!fields.contains("price"));
    }

    #[test]
    fn test_pending_order_requires_expiry() {
        let err = CreateOrderRequest::new("EUR_USD", 100, Side::Buy, OrderType::Limit)
            .with_price(dec("1.09"))
            .to_fields()
            .unwrap_err();
        match err {
            SdkError::Validation(msg) => assert!(msg.contains("expiry")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_pending_order_requires_price() {
        let expiry = Utc.timestamp_millis_opt(1447840660000).unwrap();
        let err = CreateOrderRequest::new("EUR_USD", 100, Side::Buy, OrderType::Stop)
            .with_expiry(expiry)
            .to_fields()
            .unwrap_err();
        assert!(matches!(err, SdkError::Validation(ref msg) if msg.contains("price")));
    }

    #[test]
    fn test_pending_order_fields() {
        let expiry = Utc.timestamp_millis_opt(1447840660000).unwrap();
        let fields = CreateOrderRequest::new("EUR_USD", 100, Side::Buy, OrderType::MarketIfTouched)
            .with_expiry(expiry)
            .with_price(dec("1.09"))
            .with_bounds(dec("1.06"), dec("1.08"))
            .to_fields()
            .unwrap();
        assert_eq!(fields.get("type"), Some("marketIfTouched"));
        assert_eq!(fields.get("expiry"), Some("2015-11-18T09:57:40Z"));
        assert_eq!(fields.get("price"), Some("1.09"));
        assert_eq!(fields.get("lowerBound"), Some("1.06"));
        assert_eq!(fields.get("upperBound"), Some("1.08"));
        assert!(!fields.contains("takeProfit"));
    }

    #[test]
    fn test_create_rejects_empty_instrument_and_zero_units() {
        assert!(CreateOrderRequest::market("", 1, Side::Buy).to_fields().is_err());
        assert!(CreateOrderRequest::market("EUR_USD", 0, Side::Buy).to_fields().is_err());
    }

    #[test]
    fn test_update_sends_only_supplied_fields() {
        let fields = UpdateOrderRequest::new()
            .with_units(200)
            .with_price(dec("1.12"))
            .to_fields()
            .unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("units"), Some("200"));
        assert_eq!(fields.get("price"), Some("1.12"));
    }

    #[test]
    fn test_empty_update_is_rejected() {
        let err = UpdateOrderRequest::new().to_fields().unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }

    #[test]
    fn test_orders_query_count_bounds() {
        assert!(OrdersQuery::new().with_count(500).to_fields().is_ok());
        assert!(OrdersQuery::new().with_count(501).to_fields().is_err());
        assert!(OrdersQuery::new().with_ids([1, 2]).with_instrument("EUR_USD").to_fields().is_err());
    }
}
