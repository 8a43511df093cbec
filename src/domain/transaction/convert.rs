//! Discriminator-based decoding of transactions.

use super::wire::{
    DailyInterestResponse, MarketOrderCreateResponse, OrderCancelResponse, OrderFilledResponse,
    PendingOrderCreateResponse, TradeCloseResponse, TradeRefResponse, TradeReducedResponse,
    TransferFundsResponse,
};
use super::{
    DailyInterest, MarketOrderCreate, OrderCancel, OrderFilled, PendingOrderCreate, TradeClose,
    TradeRef, TradeReduced, Transaction, TransferFunds,
};
use crate::error::SdkError;
use crate::shared::TransactionType;

use serde_json::Value;

/// Decode one transaction by its `type`.
///
/// Unknown type strings fail with `UnknownVariant`; declared types without a
/// model fail with `UnsupportedVariant`.
pub(crate) fn decode_transaction(value: Value) -> Result<Transaction, SdkError> {
    let transaction_type: TransactionType = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| SdkError::Serde(serde::de::Error::missing_field("type")))?
        .parse()?;

    match transaction_type {
        TransactionType::MarketOrderCreate => {
            let t: MarketOrderCreateResponse = serde_json::from_value(value)?;
            Ok(Transaction::MarketOrderCreate(t.try_into()?))
        }
        TransactionType::StopOrderCreate
        | TransactionType::LimitOrderCreate
        | TransactionType::MarketIfTouchedOrderCreate => {
            let t: PendingOrderCreateResponse = serde_json::from_value(value)?;
            Ok(Transaction::PendingOrderCreate(pending_order_create(t, transaction_type)?))
        }
        TransactionType::OrderCancel => {
            let t: OrderCancelResponse = serde_json::from_value(value)?;
            Ok(Transaction::OrderCancel(t.try_into()?))
        }
        TransactionType::OrderFilled => {
            let t: OrderFilledResponse = serde_json::from_value(value)?;
            Ok(Transaction::OrderFilled(t.try_into()?))
        }
        TransactionType::TradeClose
        | TransactionType::StopLossFilled
        | TransactionType::TakeProfitFilled
        | TransactionType::TrailingStopFilled => {
            let t: TradeCloseResponse = serde_json::from_value(value)?;
            Ok(Transaction::TradeClose(trade_close(t, transaction_type)?))
        }
        TransactionType::DailyInterest => {
            let t: DailyInterestResponse = serde_json::from_value(value)?;
            Ok(Transaction::DailyInterest(t.into()))
        }
        TransactionType::TransferFunds => {
            let t: TransferFundsResponse = serde_json::from_value(value)?;
            Ok(Transaction::TransferFunds(t.into()))
        }
        unmapped => Err(SdkError::UnsupportedVariant {
            kind: "transaction type",
            value: unmapped.as_str().to_string(),
        }),
    }
}

fn trade_ref(t: TradeRefResponse) -> Option<TradeRef> {
    t.id.map(|id| TradeRef { id, units: t.units })
}

fn trade_reduced(t: TradeReducedResponse) -> Option<TradeReduced> {
    t.id.map(|id| TradeReduced {
        id,
        units: t.units,
        pl: t.pl,
        interest: t.interest,
    })
}

impl TryFrom<MarketOrderCreateResponse> for MarketOrderCreate {
    type Error = SdkError;

    fn try_from(t: MarketOrderCreateResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            id: t.id,
            account_id: t.account_id,
            time: t.time,
            instrument: t.instrument,
            units: t.units,
            side: t.side.parse()?,
            price: t.price,
            pl: t.pl,
            interest: t.interest,
            account_balance: t.account_balance,
            lower_bound: t.lower_bound,
            upper_bound: t.upper_bound,
            take_profit_price: t.take_profit_price,
            stop_loss_price: t.stop_loss_price,
            trailing_stop_loss_distance: t.trailing_stop_loss_distance,
            trade_opened: t.trade_opened.and_then(trade_ref),
            trade_reduced: t.trade_reduced.and_then(trade_reduced),
            trades_closed: t.trades_closed.into_iter().filter_map(trade_ref).collect(),
        })
    }
}

fn pending_order_create(
    t: PendingOrderCreateResponse,
    transaction_type: TransactionType,
) -> Result<PendingOrderCreate, SdkError> {
    Ok(PendingOrderCreate {
        id: t.id,
        account_id: t.account_id,
        time: t.time,
        transaction_type,
        instrument: t.instrument,
        units: t.units,
        side: t.side.parse()?,
        price: t.price,
        expiry: t.expiry,
        reason: t.reason.parse()?,
        lower_bound: t.lower_bound,
        upper_bound: t.upper_bound,
        take_profit_price: t.take_profit_price,
        stop_loss_price: t.stop_loss_price,
        trailing_stop_loss_distance: t.trailing_stop_loss_distance,
    })
}

impl TryFrom<OrderCancelResponse> for OrderCancel {
    type Error = SdkError;

    fn try_from(t: OrderCancelResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            id: t.id,
            account_id: t.account_id,
            time: t.time,
            order_id: t.order_id,
            reason: t.reason.parse()?,
        })
    }
}

impl TryFrom<OrderFilledResponse> for OrderFilled {
    type Error = SdkError;

    fn try_from(t: OrderFilledResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            id: t.id,
            account_id: t.account_id,
            time: t.time,
            order_id: t.order_id,
            instrument: t.instrument,
            units: t.units,
            side: t.side.parse()?,
            price: t.price,
            pl: t.pl,
            interest: t.interest,
            account_balance: t.account_balance,
            trade_opened: t.trade_opened.and_then(trade_ref),
            trade_reduced: t.trade_reduced.and_then(trade_reduced),
            trades_closed: t.trades_closed.into_iter().filter_map(trade_ref).collect(),
        })
    }
}

fn trade_close(
    t: TradeCloseResponse,
    transaction_type: TransactionType,
) -> Result<TradeClose, SdkError> {
    Ok(TradeClose {
        id: t.id,
        account_id: t.account_id,
        time: t.time,
        transaction_type,
        trade_id: t.trade_id,
        instrument: t.instrument,
        units: t.units,
        side: t.side.parse()?,
        price: t.price,
        pl: t.pl,
        interest: t.interest,
        account_balance: t.account_balance,
    })
}

impl From<DailyInterestResponse> for DailyInterest {
    fn from(t: DailyInterestResponse) -> Self {
        Self {
            id: t.id,
            account_id: t.account_id,
            time: t.time,
            instrument: t.instrument,
            interest: t.interest,
            account_balance: t.account_balance,
        }
    }
}

impl From<TransferFundsResponse> for TransferFunds {
    fn from(t: TransferFundsResponse) -> Self {
        Self {
            id: t.id,
            account_id: t.account_id,
            time: t.time,
            amount: t.amount,
            account_balance: t.account_balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{Reason, Side};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_market_order_create() {
        let value = json!({
            "id": 1789536248,
            "accountId": 5517316,
            "time": "2014-04-07T18:31:05Z",
            "type": "MARKET_ORDER_CREATE",
            "instrument": "EUR_USD",
            "units": 2,
            "side": "sell",
            "price": 1.25325,
            "pl": 0,
            "interest": 0,
            "accountBalance": 100000,
            "tradeOpened": {"id": 1789536248, "units": 2},
            "tradeReduced": {}
        });
        match decode_transaction(value).unwrap() {
            Transaction::MarketOrderCreate(t) => {
                assert_eq!(t.account_id, 5517316);
                assert_eq!(t.side, Side::Sell);
                assert_eq!(t.price, dec("1.25325"));
                assert_eq!(t.trade_opened, Some(TradeRef { id: 1789536248, units: 2 }));
                assert_eq!(t.trade_reduced, None);
                assert!(t.trades_closed.is_empty());
            }
            other => panic!("unexpected transaction: {other:?}"),
        }
    }

    #[test]
    fn test_pending_order_create_keeps_type_and_unix_expiry() {
        let value = json!({
            "id": 175427743,
            "accountId": 2610411,
            "time": "2014-04-07T18:31:05Z",
            "type": "LIMIT_ORDER_CREATE",
            "instrument": "EUR_USD",
            "units": 2,
            "side": "buy",
            "price": 1.0,
            "expiry": 1397410800,
            "reason": "CLIENT_REQUEST",
            "upperBound": 1.1
        });
        let tx = decode_transaction(value).unwrap();
        assert_eq!(tx.transaction_type(), TransactionType::LimitOrderCreate);
        match tx {
            Transaction::PendingOrderCreate(t) => {
                assert_eq!(t.expiry, Utc.timestamp_opt(1397410800, 0).unwrap());
                assert_eq!(t.reason, Reason::ClientRequest);
                assert_eq!(t.upper_bound, Some(dec("1.1")));
                assert_eq!(t.lower_bound, None);
            }
            other => panic!("unexpected transaction: {other:?}"),
        }
    }

    #[test]
    fn test_stop_loss_filled_uses_trade_close_body() {
        let value = json!({
            "id": 1782812741,
            "accountId": 1234567,
            "time": "2014-04-07T18:31:05Z",
            "type": "STOP_LOSS_FILLED",
            "tradeId": 1782812740,
            "instrument": "EUR_USD",
            "units": 10,
            "side": "sell",
            "price": 1.3,
            "pl": -1.5,
            "interest": 0,
            "accountBalance": 99998.5
        });
        let tx = decode_transaction(value).unwrap();
        assert_eq!(tx.id(), 1782812741);
        assert_eq!(tx.transaction_type(), TransactionType::StopLossFilled);
        match tx {
            Transaction::TradeClose(t) => {
                assert_eq!(t.trade_id, 1782812740);
                assert_eq!(t.pl, dec("-1.5"));
            }
            other => panic!("unexpected transaction: {other:?}"),
        }
    }

    #[test]
    fn test_order_cancel_and_transfer_funds() {
        let cancel = json!({
            "id": 10, "accountId": 1, "time": "2014-04-07T18:31:05Z",
            "type": "ORDER_CANCEL", "orderId": 9, "reason": "TIME_IN_FORCE_EXPIRED"
        });
        let transfer = json!({
            "id": 11, "accountId": 1, "time": "2014-04-07T18:31:05Z",
            "type": "TRANSFER_FUNDS", "amount": -250, "accountBalance": 750
        });
        assert!(matches!(
            decode_transaction(cancel).unwrap(),
            Transaction::OrderCancel(OrderCancel { order_id: 9, reason: Reason::TimeInForceExpired, .. })
        ));
        match decode_transaction(transfer).unwrap() {
            Transaction::TransferFunds(t) => assert_eq!(t.amount, Decimal::from(-250)),
            other => panic!("unexpected transaction: {other:?}"),
        }
    }

    #[test]
    fn test_declared_but_unmapped_type_is_unsupported() {
        let value = json!({
            "id": 12, "accountId": 1, "time": "2014-04-07T18:31:05Z",
            "type": "MARGIN_CALL_ENTER"
        });
        match decode_transaction(value).unwrap_err() {
            SdkError::UnsupportedVariant { kind, value } => {
                assert_eq!(kind, "transaction type");
                assert_eq!(value, "MARGIN_CALL_ENTER");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_type_is_unknown_variant() {
        let value = json!({"id": 13, "type": "BONUS"});
        assert!(matches!(
            decode_transaction(value),
            Err(SdkError::UnknownVariant { kind: "transaction type", .. })
        ));
    }

    #[test]
    fn test_missing_type_is_serde_error() {
        assert!(matches!(
            decode_transaction(json!({"id": 14})),
            Err(SdkError::Serde(_))
        ));
    }

    #[test]
    fn test_unknown_reason_is_unknown_variant() {
        let value = json!({
            "id": 1,
            "accountId": 5517316,
            "time": "2014-04-07T18:31:05Z",
            "type": "ORDER_CANCEL",
            "orderId": 175427743,
            "reason": "SOMETHING_NEW"
        });
        match decode_transaction(value).unwrap_err() {
            SdkError::UnknownVariant { kind, value } => {
                assert_eq!(kind, "reason");
                assert_eq!(value, "SOMETHING_NEW");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
