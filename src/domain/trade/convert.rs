//! Conversions from wire types to domain types for trades.

use super::wire::{TradeClosedResponse, TradeResponse};
use super::{Trade, TradeClosed};
use crate::error::SdkError;

impl TryFrom<TradeResponse> for Trade {
    type Error = SdkError;

    fn try_from(t: TradeResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            id: t.id,
            units: t.units,
            side: t.side.parse()?,
            instrument: t.instrument,
            time: t.time,
            price: t.price,
            take_profit: t.take_profit,
            stop_loss: t.stop_loss,
            trailing_stop: t.trailing_stop,
            trailing_amount: t.trailing_amount,
        })
    }
}

impl TryFrom<TradeClosedResponse> for TradeClosed {
    type Error = SdkError;

    fn try_from(t: TradeClosedResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            id: t.id,
            instrument: t.instrument,
            price: t.price,
            profit: t.profit,
            side: t.side.parse()?,
            time: t.time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Side;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_trade_response_conversion() {
        let json = r#"{
            "id": 175427639,
            "units": 25,
            "side": "buy",
            "instrument": "EUR_USD",
            "time": "2014-02-13T17:47:52Z",
            "price": 1.36687,
            "takeProfit": 0,
            "stopLoss": 1.3,
            "trailingStop": 50,
            "trailingAmount": 1.36187
        }"#;
        let wire: TradeResponse = serde_json::from_str(json).unwrap();
        let trade = Trade::try_from(wire).unwrap();
        assert_eq!(trade.id, 175427639);
        assert_eq!(trade.units, 25);
        assert_eq!(trade.side, Side::Buy);
        assert_eq!(trade.price, Decimal::from_str("1.36687").unwrap());
        assert_eq!(trade.take_profit, Decimal::ZERO);
        assert_eq!(trade.trailing_stop, Decimal::from(50));
    }

    #[test]
    fn test_trade_closed_conversion() {
        let json = r#"{
            "id": 54332,
            "price": 1.30231,
            "instrument": "EUR_USD",
            "profit": -0.0226,
            "side": "sell",
            "time": "2013-01-01T00:00:00Z"
        }"#;
        let wire: TradeClosedResponse = serde_json::from_str(json).unwrap();
        let closed = TradeClosed::try_from(wire).unwrap();
        assert_eq!(closed.id, 54332);
        assert_eq!(closed.profit, Decimal::from_str("-0.0226").unwrap());
        assert_eq!(closed.side, Side::Sell);
    }

    #[test]
    fn test_unknown_side_is_unknown_variant() {
        let json = r#"{"id": 1, "units": 1, "side": "hold", "instrument": "EUR_USD",
                       "time": "2014-02-13T17:47:52Z", "price": 1.36}"#;
        let wire: TradeResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            Trade::try_from(wire),
            Err(SdkError::UnknownVariant { kind: "side", .. })
        ));
    }
}
