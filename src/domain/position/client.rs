//! Positions sub-client: per-instrument exposure queries and closing.

use super::wire::{PositionClosedResponse, PositionResponse, PositionsResponse};
use super::{Position, PositionClosed};
use crate::client::OandaClient;
use crate::error::SdkError;
use crate::http::{Fields, Transport};
use crate::shared::validate::validate_non_empty;

const POSITIONS_ROUTE: &str = "/v1/accounts/{account_id}/positions";
const POSITION_ROUTE: &str = "/v1/accounts/{account_id}/positions/{instrument}";

pub struct Positions<'a, T> {
    pub(crate) client: &'a OandaClient<T>,
}

impl<'a, T: Transport> Positions<'a, T> {
    /// All open positions on an account.
    pub async fn list(&self, account_id: u64) -> Result<Vec<Position>, SdkError> {
        let account = account_id.to_string();
        let resp: PositionsResponse = self
            .client
            .http
            .get(POSITIONS_ROUTE, &[("account_id", account.as_str())], Fields::new())
            .await?;
        resp.positions.into_iter().map(Position::try_from).collect()
    }

    pub async fn get(&self, account_id: u64, instrument: &str) -> Result<Position, SdkError> {
        validate_non_empty(instrument, "instrument")?;
        let account = account_id.to_string();
        let resp: PositionResponse = self
            .client
            .http
            .get(
                POSITION_ROUTE,
                &[("account_id", account.as_str()), ("instrument", instrument)],
                Fields::new(),
            )
            .await?;
        resp.try_into()
    }

    /// Close every open trade in `instrument` at market.
    pub async fn close(&self, account_id: u64, instrument: &str) -> Result<PositionClosed, SdkError> {
        validate_non_empty(instrument, "instrument")?;
        let account = account_id.to_string();
        let resp: PositionClosedResponse = self
            .client
            .http
            .delete(
                POSITION_ROUTE,
                &[("account_id", account.as_str()), ("instrument", instrument)],
                Fields::new(),
            )
            .await?;
        Ok(resp.into())
    }
}
