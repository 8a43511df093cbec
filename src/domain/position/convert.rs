//! Conversions from wire types to domain types for positions.

use super::wire::{PositionClosedResponse, PositionResponse};
use super::{Position, PositionClosed};
use crate::error::SdkError;

impl TryFrom<PositionResponse> for Position {
    type Error = SdkError;

    fn try_from(p: PositionResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            side: p.side.parse()?,
            instrument: p.instrument,
            units: p.units,
            avg_price: p.avg_price,
        })
    }
}

impl From<PositionClosedResponse> for PositionClosed {
    fn from(p: PositionClosedResponse) -> Self {
        Self {
            ids: p.ids,
            instrument: p.instrument,
            total_units: p.total_units,
            price: p.price,
        }
    }
}
