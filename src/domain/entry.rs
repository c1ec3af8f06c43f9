//! Study-log entry model and numeric coercion

use crate::error::{Result, StudyLogError};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::sync::OnceLock;

/// Largest integer an f64 holds exactly; integral counters below it serialize as JSON integers.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

fn iso_date_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap())
}

/// One study-log record. `date` is the primary key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub date: String,
    #[serde(
        default,
        deserialize_with = "deserialize_amount",
        serialize_with = "serialize_amount"
    )]
    pub physics: f64,
    #[serde(
        default,
        deserialize_with = "deserialize_amount",
        serialize_with = "serialize_amount"
    )]
    pub chemistry: f64,
    #[serde(
        default,
        deserialize_with = "deserialize_amount",
        serialize_with = "serialize_amount"
    )]
    pub maths: f64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub mocks: u32,
}

impl Entry {
    pub fn new(
        date: impl Into<String>,
        physics: f64,
        chemistry: f64,
        maths: f64,
        mocks: u32,
    ) -> Self {
        Entry {
            date: date.into(),
            physics: coerce_amount(physics),
            chemistry: coerce_amount(chemistry),
            maths: coerce_amount(maths),
            mocks,
        }
    }

    /// Entry with every counter at zero
    pub fn empty(date: impl Into<String>) -> Self {
        Entry::new(date, 0.0, 0.0, 0.0, 0)
    }
}

/// Validate a `YYYY-MM-DD` calendar date, returning it unchanged.
pub fn validate_date(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if !iso_date_regex().is_match(trimmed) {
        return Err(StudyLogError::InvalidDate(input.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|_| trimmed.to_string())
        .map_err(|_| StudyLogError::InvalidDate(input.to_string()))
}

/// Format a local date the way entries store it
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Coerce an amount: non-finite or negative becomes 0.
pub fn coerce_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parse free-form text as an amount; blank or non-numeric is 0.
pub fn amount_from_str(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .map(coerce_amount)
        .unwrap_or(0.0)
}

/// Parse free-form text as a count; fractions truncate toward zero.
pub fn count_from_str(input: &str) -> u32 {
    count_from_amount(amount_from_str(input))
}

/// Coerce an arbitrary JSON value to an amount.
pub fn amount_from_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().map(coerce_amount).unwrap_or(0.0),
        Value::String(s) => amount_from_str(s),
        _ => 0.0,
    }
}

/// Coerce an arbitrary JSON value to a count.
pub fn count_from_value(value: &Value) -> u32 {
    count_from_amount(amount_from_value(value))
}

fn count_from_amount(amount: f64) -> u32 {
    if amount >= u32::MAX as f64 {
        u32::MAX
    } else {
        amount.trunc() as u32
    }
}

fn deserialize_amount<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(amount_from_value(&value))
}

fn deserialize_count<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(count_from_value(&value))
}

fn serialize_amount<S>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_date_accepts_iso() {
        assert_eq!(validate_date("2024-01-02").unwrap(), "2024-01-02");
        assert_eq!(validate_date(" 2024-02-29 ").unwrap(), "2024-02-29");
    }

    #[test]
    fn test_validate_date_rejects_other_shapes() {
        assert!(validate_date("2024-1-2").is_err());
        assert!(validate_date("02-01-2024").is_err());
        assert!(validate_date("2023-02-29").is_err());
        assert!(validate_date("").is_err());
    }

    #[test]
    fn test_amount_from_str() {
        assert_eq!(amount_from_str("3"), 3.0);
        assert_eq!(amount_from_str(" 2.5 "), 2.5);
        assert_eq!(amount_from_str(""), 0.0);
        assert_eq!(amount_from_str("abc"), 0.0);
        assert_eq!(amount_from_str("-4"), 0.0);
        assert_eq!(amount_from_str("inf"), 0.0);
        assert_eq!(amount_from_str("NaN"), 0.0);
    }

    #[test]
    fn test_count_truncates() {
        assert_eq!(count_from_str("2.9"), 2);
        assert_eq!(count_from_str("x"), 0);
        assert_eq!(count_from_value(&json!(4)), 4);
        assert_eq!(count_from_value(&json!("1")), 1);
        assert_eq!(count_from_value(&json!(null)), 0);
    }

    #[test]
    fn test_deserialize_coerces_missing_and_bad_fields() {
        let entry: Entry = serde_json::from_value(json!({
            "date": "2024-01-01",
            "physics": "2",
            "chemistry": null,
            "maths": true
        }))
        .unwrap();

        assert_eq!(entry, Entry::new("2024-01-01", 2.0, 0.0, 0.0, 0));
    }

    #[test]
    fn test_deserialize_requires_date() {
        let result: std::result::Result<Entry, _> = serde_json::from_value(json!({"physics": 1}));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_integral_amounts_as_integers() {
        let entry = Entry::new("2024-01-01", 2.0, 1.5, 0.0, 3);
        let text = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            text,
            r#"{"date":"2024-01-01","physics":2,"chemistry":1.5,"maths":0,"mocks":3}"#
        );
    }

    #[test]
    fn test_new_coerces_negative_amounts() {
        let entry = Entry::new("2024-01-01", -1.0, f64::NAN, 1.0, 0);
        assert_eq!(entry.physics, 0.0);
        assert_eq!(entry.chemistry, 0.0);
        assert_eq!(entry.maths, 1.0);
    }
}
