//! Custom serde helpers for backend wire formats.

/// Deserializes an optional decimal sent either as a JSON number or as a string.
///
/// The instruments endpoint sends `pip` and `precision` as strings, sometimes
/// in scientific notation (`"1.0E-4"`), while every other price is a number.
pub mod lenient_decimal {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(Decimal),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Number(d)) => Ok(Some(d)),
            Some(Raw::Text(s)) => Decimal::from_str(&s)
                .or_else(|_| Decimal::from_scientific(&s))
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("Invalid decimal: {}", s))),
        }
    }
}

/// Deserializes a timestamp sent either as RFC3339 text or as unix seconds.
///
/// Transaction `expiry` values use unix seconds while every other time on the
/// wire is RFC3339.
pub mod lenient_time {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Seconds(i64),
        Text(String),
    }

    fn from_seconds<E: serde::de::Error>(secs: i64) -> Result<DateTime<Utc>, E> {
        Utc.timestamp_opt(secs, 0)
            .single()
            .ok_or_else(|| E::custom(format!("Timestamp out of range: {}", secs)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Seconds(secs) => from_seconds(secs),
            Raw::Text(s) => match s.parse::<i64>() {
                Ok(secs) => from_seconds(secs),
                Err(_) => DateTime::parse_from_rfc3339(&s)
                    .map(|t| t.with_timezone(&Utc))
                    .map_err(|_| serde::de::Error::custom(format!("Invalid timestamp: {}", s))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use rust_decimal::Decimal;
    use serde::Deserialize;
    use std::str::FromStr;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "super::lenient_decimal::deserialize")]
        pip: Option<Decimal>,
    }

    #[derive(Deserialize)]
    struct Expiring {
        #[serde(deserialize_with = "super::lenient_time::deserialize")]
        expiry: DateTime<Utc>,
    }

    #[test]
    fn test_lenient_time_accepts_seconds_and_rfc3339() {
        let expected = Utc.timestamp_opt(1397410800, 0).unwrap();
        let secs: Expiring = serde_json::from_str(r#"{"expiry": 1397410800}"#).unwrap();
        let text_secs: Expiring = serde_json::from_str(r#"{"expiry": "1397410800"}"#).unwrap();
        let rfc: Expiring = serde_json::from_str(r#"{"expiry": "2014-04-13T17:40:00Z"}"#).unwrap();
        assert_eq!(secs.expiry, expected);
        assert_eq!(text_secs.expiry, expected);
        assert_eq!(rfc.expiry, expected);
    }

    #[test]
    fn test_lenient_time_rejects_garbage() {
        assert!(serde_json::from_str::<Expiring>(r#"{"expiry": "tomorrow"}"#).is_err());
    }

    #[test]
    fn test_lenient_decimal_accepts_number_string_and_scientific() {
        let n: Holder = serde_json::from_str(r#"{"pip": 0.0001}"#).unwrap();
        let s: Holder = serde_json::from_str(r#"{"pip": "0.0001"}"#).unwrap();
        let e: Holder = serde_json::from_str(r#"{"pip": "1.0E-4"}"#).unwrap();
        let expected = Decimal::from_str("0.0001").unwrap();
        assert_eq!(n.pip, Some(expected));
        assert_eq!(s.pip, Some(expected));
        assert_eq!(e.pip.map(|d| d.normalize()), Some(expected));
    }

    #[test]
    fn test_lenient_decimal_missing_and_null() {
        let missing: Holder = serde_json::from_str("{}").unwrap();
        let null: Holder = serde_json::from_str(r#"{"pip": null}"#).unwrap();
        assert_eq!(missing.pip, None);
        assert_eq!(null.pip, None);
    }

    #[test]
    fn test_lenient_decimal_rejects_garbage() {
        assert!(serde_json::from_str::<Holder>(r#"{"pip": "pips"}"#).is_err());
    }
}
