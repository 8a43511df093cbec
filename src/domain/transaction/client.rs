//! Transactions sub-client: account history.

use super::convert::decode_transaction;
use super::wire::TransactionsResponse;
use super::Transaction;
use crate::client::OandaClient;
use crate::error::SdkError;
use crate::http::{Fields, Transport};
use crate::shared::validate::list_filter_fields;

const TRANSACTIONS_ROUTE: &str = "/v1/accounts/{account_id}/transactions";

/// Filters for `list`. All optional; `ids` excludes the others.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionsQuery {
    pub max_id: Option<u64>,
    pub min_id: Option<u64>,
    /// Max results (1-500).
    pub count: Option<u32>,
    pub instrument: Option<String>,
    pub ids: Vec<u64>,
}

impl TransactionsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_id(mut self, max_id: u64) -> Self {
        self.max_id = Some(max_id);
        self
    }

    pub fn with_min_id(mut self, min_id: u64) -> Self {
        self.min_id = Some(min_id);
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
        if let (Some(min), Some(max)) = (self.min_id, self.max_id) {
            if min > max {
                return Err(SdkError::Validation(format!(
                    "minId {} is greater than maxId {}",
                    min, max
                )));
            }
        }
        list_filter_fields(
            self.max_id,
            self.min_id,
            self.count,
            self.instrument.as_deref(),
            &self.ids,
        )
    }
}

pub struct Transactions<'a, T> {
    pub(crate) client: &'a OandaClient<T>,
}

impl<'a, T: Transport> Transactions<'a, T> {
    /// List transactions, newest first.
    ///
    /// Fails on the first entry whose type has no model instead of skipping it.
    pub async fn list(
        &self,
        account_id: u64,
        query: &TransactionsQuery,
    ) -> Result<Vec<Transaction>, SdkError> {
        let fields = query.to_fields()?;
        let account = account_id.to_string();
        let resp: TransactionsResponse = self
            .client
            .http
            .get(TRANSACTIONS_ROUTE, &[("account_id", account.as_str())], fields)
            .await?;
        resp.transactions.into_iter().map(decode_transaction).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transactions_query_fields() {
        let fields = TransactionsQuery::new()
            .with_min_id(100)
            .with_max_id(200)
            .with_count(50)
            .to_fields()
            .unwrap();
        assert_eq!(fields.get("minId"), Some("100"));
        assert_eq!(fields.get("maxId"), Some("200"));
        assert_eq!(fields.get("count"), Some("50"));
    }

    #[test]
    fn test_transactions_query_validation() {
        assert!(TransactionsQuery::new().with_count(501).to_fields().is_err());
        assert!(TransactionsQuery::new().with_min_id(5).with_max_id(4).to_fields().is_err());
        assert!(TransactionsQuery::new().with_ids([1]).with_min_id(1).to_fields().is_err());
    }
}
