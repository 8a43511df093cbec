//! Conversions from wire types to domain types for orders.

use super::client::CreateOrderRequest;
use super::wire::{CreateOrderResponse, OpenedResponse, OrderClosedResponse, OrderResponse};
use super::{MarketIfTouchedOrder, MarketOrder, Order, OrderClosed};
use crate::error::SdkError;
use crate::shared::{OrderType, Side};

impl TryFrom<OrderResponse> for Order {
    type Error = SdkError;

    fn try_from(o: OrderResponse) -> Result<Self, Self::Error> {
        match o.order_type.parse::<OrderType>()? {
            OrderType::Market => market_order(o).map(Order::Market),
            pending => pending_order(o, pending).map(Order::MarketIfTouched),
        }
    }
}

fn market_order(o: OrderResponse) -> Result<MarketOrder, SdkError> {
    Ok(MarketOrder {
        id: Some(o.id),
        side: o.side.parse()?,
        instrument: o.instrument,
        units: o.units,
        time: o.time,
        price: o.price,
        take_profit: o.take_profit,
        stop_loss: o.stop_loss,
        trailing_stop: o.trailing_stop,
        trades_closed: Vec::new(),
        trade_reduced: None,
    })
}

fn pending_order(o: OrderResponse, order_type: OrderType) -> Result<MarketIfTouchedOrder, SdkError> {
    let expiry = o.expiry.ok_or_else(|| missing_field("expiry"))?;
    Ok(MarketIfTouchedOrder {
        id: o.id,
        side: o.side.parse()?,
        instrument: o.instrument,
        units: o.units,
        order_type,
        time: o.time,
        price: o.price,
        take_profit: o.take_profit,
        stop_loss: o.stop_loss,
        trailing_stop: o.trailing_stop,
        expiry,
        upper_bound: o.upper_bound,
        lower_bound: o.lower_bound,
    })
}

/// Side of an opened object, falling back to the requested side when the
/// object omits it.
fn opened_side(opened: &OpenedResponse, requested: Side) -> Result<Side, SdkError> {
    match &opened.side {
        Some(side) => Ok(side.parse()?),
        None => Ok(requested),
    }
}

/// Pick the variant of a create response.
///
/// A non-empty `orderOpened` is a pending order of the requested type. A
/// `tradeOpened` key is a market fill, even when it is `{}` because the fill
/// only closed or reduced existing trades.
pub(crate) fn created_order(
    resp: CreateOrderResponse,
    request: &CreateOrderRequest,
) -> Result<Order, SdkError> {
    if let Some(order) = resp.order_opened.filter(|o| o.is_present()) {
        let expiry = order
            .expiry
            .or(request.expiry)
            .ok_or_else(|| missing_field("expiry"))?;
        return Ok(Order::MarketIfTouched(MarketIfTouchedOrder {
            id: order.id.unwrap_or_default(),
            side: opened_side(&order, request.side)?,
            instrument: resp.instrument,
            units: order.units.unwrap_or(request.units),
            order_type: request.order_type,
            time: resp.time,
            price: resp.price,
            take_profit: order.take_profit,
            stop_loss: order.stop_loss,
            trailing_stop: order.trailing_stop,
            expiry,
            upper_bound: order.upper_bound,
            lower_bound: order.lower_bound,
        }));
    }

    if let Some(trade) = resp.trade_opened {
        return Ok(Order::Market(MarketOrder {
            id: trade.id,
            side: opened_side(&trade, request.side)?,
            instrument: resp.instrument,
            units: trade.units.unwrap_or(request.units),
            time: resp.time,
            price: resp.price,
            take_profit: trade.take_profit,
            stop_loss: trade.stop_loss,
            trailing_stop: trade.trailing_stop,
            trades_closed: resp.trades_closed.iter().filter_map(|t| t.id).collect(),
            trade_reduced: resp.trade_reduced.and_then(|t| t.id),
        }));
    }

    Err(SdkError::UnsupportedVariant {
        kind: "order create response",
        value: "neither tradeOpened nor orderOpened".to_string(),
    })
}

impl TryFrom<OrderClosedResponse> for OrderClosed {
    type Error = SdkError;

    fn try_from(o: OrderClosedResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            id: o.id,
            side: o.side.parse()?,
            instrument: o.instrument,
            units: o.units,
            price: o.price,
            time: o.time,
        })
    }
}

fn missing_field(field: &'static str) -> SdkError {
    SdkError::Serde(serde::de::Error::missing_field(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Side;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn pending_json(order_type: &str) -> String {
        format!(
            r#"{{
                "id": 175427743,
                "instrument": "EUR_USD",
                "units": 2,
                "side": "sell",
                "type": "{}",
                "time": "2014-02-11T16:22:07Z",
                "price": 1.0,
                "takeProfit": 0,
                "stopLoss": 0,
                "expiry": "2014-02-15T16:22:07Z",
                "upperBound": 0,
                "lowerBound": 0,
                "trailingStop": 0
            }}"#,
            order_type
        )
    }

    #[test]
    fn test_market_type_decodes_to_market_variant() {
        let json = r#"{
            "id": 10, "instrument": "USD_JPY", "units": 100, "side": "buy",
            "type": "market", "time": "2015-11-18T09:57:40Z", "price": 123.456
        }"#;
        let wire: OrderResponse = serde_json::from_str(json).unwrap();
        let order = Order::try_from(wire).unwrap();
        match order {
            Order::Market(o) => {
                assert_eq!(o.id, Some(10));
                assert_eq!(o.price, dec("123.456"));
                assert_eq!(o.stop_loss, Decimal::ZERO);
            }
            other => panic!("expected market order, got {other:?}"),
        }
    }

    #[test]
    fn test_pending_types_decode_to_market_if_touched_keeping_type() {
        for (wire_type, expected) in [
            ("limit", OrderType::Limit),
            ("stop", OrderType::Stop),
            ("marketIfTouched", OrderType::MarketIfTouched),
        ] {
            let wire: OrderResponse = serde_json::from_str(&pending_json(wire_type)).unwrap();
            let order = Order::try_from(wire).unwrap();
            assert!(order.is_pending());
            assert_eq!(order.order_type(), expected);
            assert_eq!(order.side(), Side::Sell);
        }
    }

    #[test]
    fn test_unknown_order_type_is_unknown_variant() {
        let wire: OrderResponse = serde_json::from_str(&pending_json("trailing")).unwrap();
        let err = Order::try_from(wire).unwrap_err();
        match err {
            SdkError::UnknownVariant { kind, value } => {
                assert_eq!(kind, "order type");
                assert_eq!(value, "trailing");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_pending_order_without_expiry_is_rejected() {
        let json = r#"{
            "id": 1, "instrument": "EUR_USD", "units": 2, "side": "buy",
            "type": "limit", "time": "2014-02-11T16:22:07Z", "price": 1.0
        }"#;
        let wire: OrderResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(Order::try_from(wire), Err(SdkError::Serde(_))));
    }

    #[test]
    fn test_created_order_from_order_opened() {
        let expiry = Utc.timestamp_millis_opt(1447840660000).unwrap();
        let request = CreateOrderRequest::new("EUR_USD", 100, Side::Buy, OrderType::MarketIfTouched)
            .with_expiry(expiry)
            .with_price(dec("1.09"));
        let json = r#"{
            "instrument": "EUR_USD",
            "time": "2015-11-11T10:00:00Z",
            "price": 1.09,
            "orderOpened": {
                "id": 1001, "units": 100, "side": "buy",
                "takeProfit": 0, "stopLoss": 0, "trailingStop": 0,
                "expiry": "2015-11-18T09:57:40Z",
                "upperBound": 1.08, "lowerBound": 1.06
            }
        }"#;
        let resp: CreateOrderResponse = serde_json::from_str(json).unwrap();
        match created_order(resp, &request).unwrap() {
            Order::MarketIfTouched(o) => {
                assert_eq!(o.id, 1001);
                assert_eq!(o.order_type, OrderType::MarketIfTouched);
                assert_eq!(o.expiry, expiry);
                assert_eq!(o.upper_bound, Some(dec("1.08")));
                assert_eq!(o.lower_bound, Some(dec("1.06")));
            }
            other => panic!("expected pending order, got {other:?}"),
        }
    }

    #[test]
    fn test_created_order_with_empty_trade_opened_is_market_fill() {
        let request = CreateOrderRequest::new("EUR_USD", 100, Side::Sell, OrderType::Market);
        let json = r#"{
            "instrument": "EUR_USD", "time": "2015-11-11T10:00:00Z", "price": 1.07,
            "tradeOpened": {},
            "tradesClosed": [{"id": 5, "units": 100, "side": "buy"}],
            "tradeReduced": {}
        }"#;
        let resp: CreateOrderResponse = serde_json::from_str(json).unwrap();
        match created_order(resp, &request).unwrap() {
            Order::Market(o) => {
                assert_eq!(o.id, None);
                assert_eq!(o.instrument, "EUR_USD");
                assert_eq!(o.units, 100);
                assert_eq!(o.side, Side::Sell);
                assert_eq!(o.price, dec("1.07"));
                assert_eq!(o.trades_closed, vec![5]);
                assert_eq!(o.trade_reduced, None);
            }
            other => panic!("expected market order, got {other:?}"),
        }
    }

    #[test]
    fn test_created_order_with_reduced_trade() {
        let request = CreateOrderRequest::market("EUR_USD", 40, Side::Sell);
        let json = r#"{
            "instrument": "EUR_USD", "time": "2015-11-11T10:00:00Z", "price": 1.07,
            "tradeOpened": {},
            "tradesClosed": [],
            "tradeReduced": {"id": 7, "units": 40, "pl": 0.1, "interest": 0}
        }"#;
        let resp: CreateOrderResponse = serde_json::from_str(json).unwrap();
        let order = created_order(resp, &request).unwrap();
        assert_eq!(order.id(), None);
        match order {
            Order::Market(o) => assert_eq!(o.trade_reduced, Some(7)),
            other => panic!("expected market order, got {other:?}"),
        }
    }

    #[test]
    fn test_created_order_without_opened_keys_is_unsupported() {
        let request = CreateOrderRequest::market("EUR_USD", 1, Side::Buy);
        let json = r#"{"instrument": "EUR_USD", "time": "2015-11-11T10:00:00Z", "price": 1.07}"#;
        let resp: CreateOrderResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            created_order(resp, &request),
            Err(SdkError::UnsupportedVariant { .. })
        ));
    }

    #[test]
    fn test_unknown_side_is_unknown_variant() {
        let json = pending_json("limit").replace("\"sell\"", "\"hold\"");
        let wire: OrderResponse = serde_json::from_str(&json).unwrap();
        match Order::try_from(wire).unwrap_err() {
            SdkError::UnknownVariant { kind, value } => {
                assert_eq!(kind, "side");
                assert_eq!(value, "hold");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_order_closed_conversion() {
        let json = r#"{"id": 42, "instrument": "EUR_USD", "units": 2, "side": "sell",
                       "price": 1.3, "time": "2013-01-01T00:00:00Z"}"#;
        let wire: OrderClosedResponse = serde_json::from_str(json).unwrap();
        let closed = OrderClosed::try_from(wire).unwrap();
        assert_eq!(closed.id, 42);
        assert_eq!(closed.side, Side::Sell);
        assert_eq!(closed.price, dec("1.3"));
    }
}
