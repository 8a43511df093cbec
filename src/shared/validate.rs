//! Local precondition checks run before any request leaves the process.

use crate::error::SdkError;
use crate::http::fields::Fields;

/// Largest `count` the list endpoints (orders, trades, transactions) accept.
pub const MAX_LIST_COUNT: u32 = 500;

/// Validate that a limit is within `1..=max`.
pub fn validate_limit(count: u32, max: u32, field: &str) -> Result<(), SdkError> {
    if count == 0 || count > max {
        return Err(SdkError::Validation(format!(
            "{} must be 1-{}, got {}",
            field, max, count
        )));
    }
    Ok(())
}

/// Validate that a required string is present.
pub fn validate_non_empty(value: &str, field: &str) -> Result<(), SdkError> {
    if value.trim().is_empty() {
        return Err(SdkError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(())
}

/// Filters shared by the paged list endpoints.
///
/// `ids` selects records directly and the API rejects it alongside any other
/// filter, so the combination fails here instead.
pub(crate) fn list_filter_fields(
    max_id: Option<u64>,
    min_id: Option<u64>,
    count: Option<u32>,
    instrument: Option<&str>,
    ids: &[u64],
) -> Result<Fields, SdkError> {
    if let Some(c) = count {
        validate_limit(c, MAX_LIST_COUNT, "count")?;
    }
    if let Some(i) = instrument {
        validate_non_empty(i, "instrument")?;
    }

    let filtered = max_id.is_some() || min_id.is_some() || count.is_some() || instrument.is_some();
    if !ids.is_empty() && filtered {
        return Err(SdkError::Validation(
            "ids cannot be combined with other filters".to_string(),
        ));
    }

    let mut fields = Fields::new();
    fields
        .push_opt("maxId", max_id)
        .push_opt("minId", min_id)
        .push_opt("count", count)
        .push_opt("instrument", instrument)
        .push_list("ids", ids);
    Ok(fields)
}
