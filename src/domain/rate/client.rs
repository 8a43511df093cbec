//! Rates sub-client: instruments, current prices and candles.

use super::convert::into_candles;
use super::wire::{
    CandleBidAskResponse, CandleMidResponse, CandlesResponse, InstrumentsResponse, PricesResponse,
};
use super::{CandleBidAsk, CandleMid, CandleSeries, Candles, Instrument, Price};
use crate::client::OandaClient;
use crate::error::SdkError;
use crate::http::{Fields, Transport};
use crate::shared::validate::{validate_limit, validate_non_empty};
use crate::shared::{CandleFormat, Granularity, WeeklyAlignment};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

const INSTRUMENTS_ROUTE: &str = "/v1/instruments";
const PRICES_ROUTE: &str = "/v1/prices";
const CANDLES_ROUTE: &str = "/v1/candles";

/// Candle count sent when none is given.
pub const DEFAULT_CANDLE_COUNT: u32 = 500;
/// Largest candle count the API serves in one response.
pub const MAX_CANDLE_COUNT: u32 = 5000;
/// Hour (in the alignment timezone) daily candles start at when none is given.
pub const DEFAULT_DAILY_ALIGNMENT: u8 = 22;

// ─── Request parameters ──────────────────────────────────────────────────────

/// Selection for `instruments`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstrumentsQuery {
    /// Response fields to include, e.g. `["instrument", "pip", "halted"]`.
    /// Empty means the server default set.
    pub fields: Vec<String>,
    /// Instruments to describe. Empty means all.
    pub instruments: Vec<String>,
}

impl InstrumentsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields<S: Into<String>>(mut self, fields: impl IntoIterator<Item = S>) -> Self {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_instruments<S: Into<String>>(
        mut self,
        instruments: impl IntoIterator<Item = S>,
    ) -> Self {
        self.instruments = instruments.into_iter().map(Into::into).collect();
        self
    }

    pub fn to_fields(&self, account_id: u64) -> Result<Fields, SdkError> {
        let mut fields = Fields::new();
        fields
            .push("accountId", account_id)
            .push_list("fields", &self.fields)
            .push_list("instruments", &self.instruments);
        Ok(fields)
    }
}

/// Parameters for the candle endpoints.
///
/// Unset values fall back to S5 granularity, 500 candles, daily alignment 22
/// and weekly alignment Friday. `start` together with `end` selects a range,
/// in which case no count is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct CandlesQuery {
    pub instrument: String,
    pub granularity: Option<Granularity>,
    /// 1-5000. Must stay unset when both `start` and `end` are set.
    pub count: Option<u32>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    /// Unset lets the server pick, which is bid/ask.
    pub format: Option<CandleFormat>,
    /// Whether the candle at `start` is included. Only sent with `start`.
    pub include_first: Option<bool>,
    /// 0-23.
    pub daily_alignment: Option<u8>,
    pub weekly_alignment: Option<WeeklyAlignment>,
}

impl CandlesQuery {
    pub fn new(instrument: impl Into<String>) -> Self {
        Self {
            instrument: instrument.into(),
            granularity: None,
            count: None,
            start: None,
            end: None,
            format: None,
            include_first: None,
            daily_alignment: None,
            weekly_alignment: None,
        }
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = Some(granularity);
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    /// Set both ends of a time range.
    pub fn with_range(self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.with_start(start).with_end(end)
    }

    pub fn with_format(mut self, format: CandleFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_include_first(mut self, include_first: bool) -> Self {
        self.include_first = Some(include_first);
        self
    }

    pub fn with_daily_alignment(mut self, hour: u8) -> Self {
        self.daily_alignment = Some(hour);
        self
    }

    pub fn with_weekly_alignment(mut self, day: WeeklyAlignment) -> Self {
        self.weekly_alignment = Some(day);
        self
    }

    pub fn to_fields(&self) -> Result<Fields, SdkError> {
        validate_non_empty(&self.instrument, "instrument")?;

        let ranged = self.start.is_some() && self.end.is_some();
        let count = match (ranged, self.count) {
            (true, Some(_)) => {
                return Err(SdkError::Validation(
                    "count cannot be combined with both start and end".to_string(),
                ))
            }
            (true, None) => None,
            (false, count) => Some(count.unwrap_or(DEFAULT_CANDLE_COUNT)),
        };
        if let Some(c) = count {
            validate_limit(c, MAX_CANDLE_COUNT, "count")?;
        }

        let daily_alignment = self.daily_alignment.unwrap_or(DEFAULT_DAILY_ALIGNMENT);
        if daily_alignment > 23 {
            return Err(SdkError::Validation(format!(
                "dailyAlignment must be 0-23, got {}",
                daily_alignment
            )));
        }

        let mut fields = Fields::new();
        fields
            .push("instrument", &self.instrument)
            .push("granularity", self.granularity.unwrap_or_default())
            .push_opt("count", count)
            .push_time("start", self.start.as_ref())
            .push_time("end", self.end.as_ref())
            .push_opt("candleFormat", self.format);
        if self.start.is_some() {
            fields.push("includeFirst", self.include_first.unwrap_or(true));
        }
        fields
            .push("dailyAlignment", daily_alignment)
            .push("weeklyAlignment", self.weekly_alignment.unwrap_or_default());
        Ok(fields)
    }
}

// ─── Sub-client ──────────────────────────────────────────────────────────────

pub struct Rates<'a, T> {
    pub(crate) client: &'a OandaClient<T>,
}

impl<'a, T: Transport> Rates<'a, T> {
    /// Instruments tradeable on an account.
    pub async fn instruments(
        &self,
        account_id: u64,
        query: &InstrumentsQuery,
    ) -> Result<Vec<Instrument>, SdkError> {
        let fields = query.to_fields(account_id)?;
        let resp: InstrumentsResponse = self.client.http.get(INSTRUMENTS_ROUTE, &[], fields).await?;
        Ok(resp.instruments.into_iter().map(Instrument::from).collect())
    }

    /// Current bid/ask for each instrument.
    pub async fn prices<S: AsRef<str>>(&self, instruments: &[S]) -> Result<Vec<Price>, SdkError> {
        if instruments.is_empty() {
            return Err(SdkError::Validation("instruments cannot be empty".to_string()));
        }
        let names = instruments
            .iter()
            .map(|i| {
                validate_non_empty(i.as_ref(), "instrument")?;
                Ok(i.as_ref())
            })
            .collect::<Result<Vec<&str>, SdkError>>()?;

        let mut fields = Fields::new();
        fields.push_list("instruments", &names);
        let resp: PricesResponse = self.client.http.get(PRICES_ROUTE, &[], fields).await?;
        Ok(resp.prices.into_iter().map(Price::from).collect())
    }

    /// Candles in the requested format. No format means bid/ask.
    pub async fn candles(&self, query: &CandlesQuery) -> Result<CandleSeries, SdkError> {
        let fields = query.to_fields()?;
        match query.format {
            Some(CandleFormat::Midpoint) => Ok(CandleSeries::Mid(
                self.fetch_candles::<CandleMidResponse, CandleMid>(fields).await?,
            )),
            Some(CandleFormat::BidAsk) | None => Ok(CandleSeries::BidAsk(
                self.fetch_candles::<CandleBidAskResponse, CandleBidAsk>(fields).await?,
            )),
        }
    }

    /// Midpoint candles, whatever `query.format` says.
    pub async fn candles_mid(&self, query: &CandlesQuery) -> Result<Candles<CandleMid>, SdkError> {
        let query = query.clone().with_format(CandleFormat::Midpoint);
        self.fetch_candles::<CandleMidResponse, _>(query.to_fields()?).await
    }

    /// Bid/ask candles, whatever `query.format` says.
    pub async fn candles_bid_ask(
        &self,
        query: &CandlesQuery,
    ) -> Result<Candles<CandleBidAsk>, SdkError> {
        let query = query.clone().with_format(CandleFormat::BidAsk);
        self.fetch_candles::<CandleBidAskResponse, _>(query.to_fields()?).await
    }

    async fn fetch_candles<W, C>(&self, fields: Fields) -> Result<Candles<C>, SdkError>
    where
        W: DeserializeOwned,
        C: From<W>,
    {
        let resp: CandlesResponse<W> = self.client.http.get(CANDLES_ROUTE, &[], fields).await?;
        into_candles(resp)
    }
}
