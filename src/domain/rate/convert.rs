//! Conversions from wire types to domain types for rates.

use super::wire::{
    CandleBidAskResponse, CandleMidResponse, CandlesResponse, InstrumentResponse, PriceResponse,
};
use super::{CandleBidAsk, CandleMid, Candles, Instrument, Price};
use crate::error::SdkError;
use crate::shared::Granularity;

impl From<InstrumentResponse> for Instrument {
    fn from(i: InstrumentResponse) -> Self {
        Self {
            instrument: i.instrument,
            display_name: i.display_name,
            pip: i.pip,
            max_trade_units: i.max_trade_units,
            precision: i.precision,
            max_trailing_stop: i.max_trailing_stop,
            min_trailing_stop: i.min_trailing_stop,
            margin_rate: i.margin_rate,
            halted: i.halted,
        }
    }
}

impl From<PriceResponse> for Price {
    fn from(p: PriceResponse) -> Self {
        Self {
            instrument: p.instrument,
            time: p.time,
            bid: p.bid,
            ask: p.ask,
            status: p.status,
        }
    }
}

impl From<CandleMidResponse> for CandleMid {
    fn from(c: CandleMidResponse) -> Self {
        Self {
            time: c.time,
            open_mid: c.open_mid,
            high_mid: c.high_mid,
            low_mid: c.low_mid,
            close_mid: c.close_mid,
            volume: c.volume,
            complete: c.complete,
        }
    }
}

impl From<CandleBidAskResponse> for CandleBidAsk {
    fn from(c: CandleBidAskResponse) -> Self {
        Self {
            time: c.time,
            open_bid: c.open_bid,
            open_ask: c.open_ask,
            high_bid: c.high_bid,
            high_ask: c.high_ask,
            low_bid: c.low_bid,
            low_ask: c.low_ask,
            close_bid: c.close_bid,
            close_ask: c.close_ask,
            volume: c.volume,
            complete: c.complete,
        }
    }
}

/// Convert a candle response, parsing its granularity and keeping candle order.
pub(crate) fn into_candles<W, C: From<W>>(resp: CandlesResponse<W>) -> Result<Candles<C>, SdkError> {
    let granularity: Granularity = resp.granularity.parse()?;
    Ok(Candles {
        instrument: resp.instrument,
        granularity,
        candles: resp.candles.into_iter().map(C::from).collect(),
    })
}
