//! High-level client: `OandaClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::order::client::Orders;
use crate::domain::position::client::Positions;
use crate::domain::rate::client::Rates;
use crate::domain::trade::client::Trades;
use crate::domain::transaction::client::Transactions;
use crate::error::SdkError;
use crate::http::transport::DEFAULT_TIMEOUT_SECS;
use crate::http::{OandaHttp, ReqwestTransport, Transport};
use crate::network::AccountType;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::order::client::Orders as OrdersClient;
pub use crate::domain::position::client::Positions as PositionsClient;
pub use crate::domain::rate::client::Rates as RatesClient;
pub use crate::domain::trade::client::Trades as TradesClient;
pub use crate::domain::transaction::client::Transactions as TransactionsClient;

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "OANDA_API_KEY";
/// Environment variable holding the account type (`practice` or `real`).
pub const ENV_ACCOUNT_TYPE: &str = "OANDA_ACCOUNT_TYPE";

/// The primary entry point for the OANDA REST client.
///
/// Provides nested sub-client accessors for each endpoint group:
/// `client.orders()`, `client.rates()`, etc. Holds only immutable
/// configuration, so one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct OandaClient<T = ReqwestTransport> {
    pub(crate) http: OandaHttp<T>,
    account_type: AccountType,
}

impl OandaClient {
    pub fn builder() -> OandaClientBuilder {
        OandaClientBuilder::default()
    }
}

impl<T: Transport> OandaClient<T> {
    /// Build a client over a caller-supplied transport.
    pub fn with_transport(api_key: &str, account_type: AccountType, transport: T) -> Self {
        Self {
            http: OandaHttp::new(account_type.base_url(), api_key, transport),
            account_type,
        }
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Low-level endpoint base, for routes without a typed wrapper.
    pub fn http(&self) -> &OandaHttp<T> {
        &self.http
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn orders(&self) -> Orders<'_, T> {
        Orders { client: self }
    }

    pub fn trades(&self) -> Trades<'_, T> {
        Trades { client: self }
    }

    pub fn positions(&self) -> Positions<'_, T> {
        Positions { client: self }
    }

    pub fn rates(&self) -> Rates<'_, T> {
        Rates { client: self }
    }

    pub fn transactions(&self) -> Transactions<'_, T> {
        Transactions { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct OandaClientBuilder {
    api_key: Option<String>,
    account_type: AccountType,
    /// Deferred parse failure from `account_type_str`, reported by `build`.
    account_type_error: Option<String>,
    base_url: Option<String>,
    timeout: Duration,
}

impl Default for OandaClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            account_type: AccountType::default(),
            account_type_error: None,
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl std::fmt::Debug for OandaClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OandaClientBuilder")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("account_type", &self.account_type)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl OandaClientBuilder {
    /// Seed a builder from `OANDA_API_KEY` and `OANDA_ACCOUNT_TYPE`.
    ///
    /// Unset variables leave the defaults in place; `build` still requires a key.
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        if let Ok(key) = std::env::var(ENV_API_KEY) {
            builder = builder.api_key(&key);
        }
        if let Ok(account_type) = std::env::var(ENV_ACCOUNT_TYPE) {
            builder = builder.account_type_str(&account_type);
        }
        builder
    }

    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    pub fn account_type(mut self, account_type: AccountType) -> Self {
        self.account_type = account_type;
        self.account_type_error = None;
        self
    }

    /// Set the account type from its name. An unknown name fails at `build`.
    pub fn account_type_str(mut self, name: &str) -> Self {
        match name.parse::<AccountType>() {
            Ok(account_type) => {
                self.account_type = account_type;
                self.account_type_error = None;
            }
            Err(e) => self.account_type_error = Some(e.to_string()),
        }
        self
    }

    /// Override the base URL the account type would resolve to (e.g. a proxy).
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<OandaClient, SdkError> {
        if let Some(e) = self.account_type_error {
            return Err(SdkError::Config(e));
        }
        let api_key = match self.api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(SdkError::Config("API key is required".to_string())),
        };

        let transport =
            ReqwestTransport::new(self.timeout).map_err(|e| SdkError::Config(e.to_string()))?;
        let base_url = self
            .base_url
            .unwrap_or_else(|| self.account_type.base_url().to_string());

        Ok(OandaClient {
            http: OandaHttp::new(&base_url, &api_key, transport),
            account_type: self.account_type,
        })
    }
}
