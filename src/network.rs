//! Network URL constants and account-type resolution.

use crate::error::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// REST base URL for practice (simulated) accounts.
pub const PRACTICE_API_URL: &str = "https://api-fxpractice.oanda.com";

/// REST base URL for real (live) accounts.
pub const REAL_API_URL: &str = "https://api-fxtrade.oanda.com";

/// Trading environment an API key belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Practice,
    Real,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Practice => "practice",
            AccountType::Real => "real",
        }
    }

    /// Base URL every route of this environment is resolved against.
    pub fn base_url(&self) -> &'static str {
        match self {
            AccountType::Practice => PRACTICE_API_URL,
            AccountType::Real => REAL_API_URL,
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "practice" => Ok(AccountType::Practice),
            "real" => Ok(AccountType::Real),
            other => Err(ParseEnumError {
                kind: "account type",
                value: other.to_string(),
            }),
        }
    }
}
