//! Request field assembly. Ordered key/value pairs sent as a query string
//! (GET/DELETE) or form body (POST/PATCH).

use crate::error::SdkError;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Display;

/// Ordered request fields. Absent optional values are never inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields(Vec<(String, String)>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing an earlier value for the same key.
    pub fn push(&mut self, key: &str, value: impl Display) -> &mut Self {
        let value = value.to_string();
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key.to_string(), value)),
        }
        self
    }

    /// Insert a field only when a value is present.
    pub fn push_opt(&mut self, key: &str, value: Option<impl Display>) -> &mut Self {
        if let Some(v) = value {
            self.push(key, v);
        }
        self
    }

    /// Insert a UTC timestamp as RFC3339 with a `Z` suffix.
    pub fn push_time(&mut self, key: &str, value: Option<&DateTime<Utc>>) -> &mut Self {
        if let Some(t) = value {
            self.push(key, t.to_rfc3339_opts(SecondsFormat::AutoSi, true));
        }
        self
    }

    /// Insert a comma-separated list; empty lists are skipped.
    pub fn push_list<T: Display>(&mut self, key: &str, values: &[T]) -> &mut Self {
        if !values.is_empty() {
            self.push(key, join_comma(values));
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `application/x-www-form-urlencoded` rendering.
    pub fn to_urlencoded(&self) -> Result<String, SdkError> {
        serde_urlencoded::to_string(&self.0)
            .map_err(|e| SdkError::Validation(format!("Unencodable request fields: {}", e)))
    }
}

/// Join values with commas, the list format every OANDA list parameter uses.
pub fn join_comma<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_push_opt_skips_none() {
        let mut fields = Fields::new();
        fields
            .push("instrument", "EUR_USD")
            .push_opt("count", None::<u32>)
            .push_opt("maxId", Some(10u64));
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("maxId"), Some("10"));
        assert!(!fields.contains("count"));
    }

    #[test]
    fn test_push_replaces_existing_key() {
        let mut fields = Fields::new();
        fields.push("count", 1).push("count", 2);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("count"), Some("2"));
    }

    #[test]
    fn test_push_time_is_rfc3339_utc() {
        let t = Utc.timestamp_millis_opt(1447840660000).unwrap();
        let mut fields = Fields::new();
        fields.push_time("expiry", Some(&t));
        assert_eq!(fields.get("expiry"), Some("2015-11-18T09:57:40Z"));
    }

    #[test]
    fn test_push_list_joins_and_skips_empty() {
        let mut fields = Fields::new();
        fields
            .push_list("ids", &[1u64, 2, 3])
            .push_list::<&str>("instruments", &[]);
        assert_eq!(fields.get("ids"), Some("1,2,3"));
        assert!(!fields.contains("instruments"));
    }

    #[test]
    fn test_to_urlencoded_preserves_order_and_escapes() {
        let mut fields = Fields::new();
        fields.push("instruments", "EUR_USD,USD_JPY").push("count", 5);
        assert_eq!(
            fields.to_urlencoded().unwrap(),
            "instruments=EUR_USD%2CUSD_JPY&count=5"
        );
    }
}
