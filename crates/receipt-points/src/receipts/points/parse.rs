use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

/// A receipt field that could not be parsed as the type a points rule needs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field} '{value}': {reason}")]
pub struct ParseError {
    pub field: String,
    pub value: String,
    pub reason: String,
}

impl ParseError {
    pub(crate) fn new(field: &str, value: &str, reason: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Parse a non-negative amount with at most two fractional digits, e.g. `"6.49"`.
pub(crate) fn parse_amount(field: &str, raw: &str) -> Result<Decimal, ParseError> {
    let (whole, fraction) = match raw.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (raw, None),
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::new(
            field,
            raw,
            "expected a non-negative decimal amount",
        ));
    }

    if let Some(fraction) = fraction {
        if fraction.is_empty()
            || fraction.len() > 2
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ParseError::new(
                field,
                raw,
                "expected one or two digits after the decimal point",
            ));
        }
    }

    Decimal::from_str(raw).map_err(|err| ParseError::new(field, raw, err.to_string()))
}

/// Parse a zero-padded `YYYY-MM-DD` calendar date.
pub(crate) fn parse_purchase_date(raw: &str) -> Result<NaiveDate, ParseError> {
    if !matches_layout(raw, "dddd-dd-dd") {
        return Err(ParseError::new(
            "purchaseDate",
            raw,
            "expected a zero-padded YYYY-MM-DD date",
        ));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|err| ParseError::new("purchaseDate", raw, err.to_string()))
}

/// Parse a zero-padded 24-hour `HH:MM` time.
pub(crate) fn parse_purchase_time(raw: &str) -> Result<NaiveTime, ParseError> {
    if !matches_layout(raw, "dd:dd") {
        return Err(ParseError::new(
            "purchaseTime",
            raw,
            "expected a zero-padded 24-hour HH:MM time",
        ));
    }

    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|err| ParseError::new("purchaseTime", raw, err.to_string()))
}

// 'd' in the layout matches one ASCII digit; anything else matches itself.
fn matches_layout(raw: &str, layout: &str) -> bool {
    raw.len() == layout.len()
        && raw.bytes().zip(layout.bytes()).all(|(actual, expected)| {
            if expected == b'd' {
                actual.is_ascii_digit()
            } else {
                actual == expected
            }
        })
}
