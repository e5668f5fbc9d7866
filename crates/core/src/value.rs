//! Unified value enum over the five field kinds.
//!
//! `FieldValue` pairs each kind with its literal syntax: parsing consumes
//! the delimited wire form, `Display` reproduces it verbatim, so a value
//! that parses round-trips through `select` output unchanged.
//!
//! There is no escape mechanism: a double-quote or comma inside a quoted
//! literal corrupts tokenization upstream. This is a known protocol
//! limitation, kept as-is.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::limits::MAX_TEXT_LEN;
use crate::schema::FieldType;
use crate::types::{Date, Plate, Status};

/// A single typed field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Signed 32-bit integer.
    Int(i32),
    /// Bounded non-empty text (model, mechanic, driver).
    Text(String),
    /// Vehicle plate code.
    Plate(Plate),
    /// Calendar date.
    Date(Date),
    /// Inspection status.
    Status(Status),
}

impl FieldValue {
    /// Parse a delimited wire literal as a value of the given kind.
    pub fn parse(field_type: FieldType, raw: &str) -> Result<FieldValue> {
        match field_type {
            FieldType::Int => parse_int(raw).map(FieldValue::Int),
            FieldType::Text => parse_text(raw).map(FieldValue::Text),
            FieldType::Plate => {
                Plate::parse(unquote(raw, '\'').ok_or_else(|| Error::InvalidPlate {
                    text: raw.to_string(),
                })?)
                .map(FieldValue::Plate)
            }
            FieldType::Date => {
                Date::parse(unquote(raw, '\'').ok_or_else(|| Error::InvalidDate {
                    text: raw.to_string(),
                })?)
                .map(FieldValue::Date)
            }
            FieldType::Status => {
                Status::from_literal(unquote(raw, '\'').ok_or_else(|| Error::InvalidStatus {
                    text: raw.to_string(),
                })?)
                .map(FieldValue::Status)
            }
        }
    }

    /// The kind of this value.
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Int(_) => FieldType::Int,
            FieldValue::Text(_) => FieldType::Text,
            FieldValue::Plate(_) => FieldType::Plate,
            FieldValue::Date(_) => FieldType::Date,
            FieldValue::Status(_) => FieldType::Status,
        }
    }

    /// Get the status if this is a status value.
    pub fn as_status(&self) -> Option<Status> {
        match self {
            FieldValue::Status(s) => Some(*s),
            _ => None,
        }
    }

    /// Ordering used by relational conditions and sort keys.
    ///
    /// Returns `None` for mismatched kinds; callers always compare values
    /// parsed against the same field, so `None` means a caller bug and is
    /// treated as "no match" rather than a panic.
    pub fn compare(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Int(a), FieldValue::Int(b)) => Some(a.cmp(b)),
            (FieldValue::Text(a), FieldValue::Text(b)) => Some(a.as_bytes().cmp(b.as_bytes())),
            (FieldValue::Plate(a), FieldValue::Plate(b)) => Some(a.cmp_order(b)),
            (FieldValue::Date(a), FieldValue::Date(b)) => Some(a.cmp(b)),
            (FieldValue::Status(a), FieldValue::Status(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Equality used by the `uniq` dedup key. Identical to `==` except for
    /// plates, which compare their region digits numerically.
    pub fn dedup_eq(&self, other: &FieldValue) -> bool {
        match (self, other) {
            (FieldValue::Plate(a), FieldValue::Plate(b)) => a.dedup_eq(b),
            _ => self == other,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(i) => write!(f, "{i}"),
            FieldValue::Text(s) => write!(f, "\"{s}\""),
            FieldValue::Plate(p) => write!(f, "'{p}'"),
            FieldValue::Date(d) => write!(f, "'{d}'"),
            FieldValue::Status(s) => write!(f, "'{s}'"),
        }
    }
}

/// Optional sign then decimal digits only; no leading or trailing garbage.
fn parse_int(raw: &str) -> Result<i32> {
    let bad = || Error::InvalidInt {
        text: raw.to_string(),
    };
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    raw.parse().map_err(|_| bad())
}

/// Mandatory double-quote delimiters, stripped; content non-empty, bounded,
/// and free of inner quotes.
fn parse_text(raw: &str) -> Result<String> {
    let bad = |reason: &str| Error::InvalidText {
        reason: format!("{reason}: {raw:?}"),
    };
    let body = unquote(raw, '"').ok_or_else(|| bad("missing quotes"))?;
    if body.is_empty() {
        return Err(bad("empty"));
    }
    if body.len() > MAX_TEXT_LEN {
        return Err(bad("too long"));
    }
    if body.contains('"') {
        return Err(bad("inner quote"));
    }
    Ok(body.to_string())
}

/// Strip a matching pair of delimiter characters, or `None`.
fn unquote(raw: &str, delim: char) -> Option<&str> {
    raw.strip_prefix(delim)?.strip_suffix(delim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(
            FieldValue::parse(FieldType::Int, "42"),
            Ok(FieldValue::Int(42))
        );
        assert_eq!(
            FieldValue::parse(FieldType::Int, "-7"),
            Ok(FieldValue::Int(-7))
        );
        assert_eq!(
            FieldValue::parse(FieldType::Int, "+7"),
            Ok(FieldValue::Int(7))
        );
        for text in ["", "-", "+", "1 ", " 1", "1x", "0x1", "1.5", "99999999999"] {
            assert!(
                FieldValue::parse(FieldType::Int, text).is_err(),
                "accepted {text:?}"
            );
        }
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(
            FieldValue::parse(FieldType::Text, "\"Kamaz 5320\""),
            Ok(FieldValue::Text("Kamaz 5320".to_string()))
        );
        for text in ["", "\"\"", "bare", "\"open", "close\"", "'single'"] {
            assert!(
                FieldValue::parse(FieldType::Text, text).is_err(),
                "accepted {text:?}"
            );
        }
    }

    #[test]
    fn test_parse_text_length_bound() {
        let max = format!("\"{}\"", "a".repeat(MAX_TEXT_LEN));
        assert!(FieldValue::parse(FieldType::Text, &max).is_ok());
        let over = format!("\"{}\"", "a".repeat(MAX_TEXT_LEN + 1));
        assert!(FieldValue::parse(FieldType::Text, &over).is_err());
    }

    #[test]
    fn test_parse_quoted_kinds_need_single_quotes() {
        assert!(FieldValue::parse(FieldType::Plate, "A123BC45").is_err());
        assert!(FieldValue::parse(FieldType::Plate, "\"A123BC45\"").is_err());
        assert!(FieldValue::parse(FieldType::Plate, "'A123BC45'").is_ok());
        assert!(FieldValue::parse(FieldType::Date, "01.02.2020").is_err());
        assert!(FieldValue::parse(FieldType::Status, "well").is_err());
        assert!(FieldValue::parse(FieldType::Status, "'well'").is_ok());
    }

    #[test]
    fn test_display_roundtrips_literals() {
        for (ft, raw) in [
            (FieldType::Int, "7"),
            (FieldType::Text, "\"M1\""),
            (FieldType::Plate, "'A123BC77'"),
            (FieldType::Date, "'01.02.2020'"),
            (FieldType::Status, "'well'"),
        ] {
            let value = FieldValue::parse(ft, raw).unwrap();
            assert_eq!(value.to_string(), raw);
        }
    }

    #[test]
    fn test_compare_mismatched_kinds_is_none() {
        let a = FieldValue::Int(1);
        let b = FieldValue::Text("1".to_string());
        assert_eq!(a.compare(&b), None);
    }

    #[test]
    fn test_serde_roundtrip() {
        let value = FieldValue::parse(FieldType::Plate, "'A123BC45'").unwrap();
        let json = serde_json::to_string(&value).unwrap();
        let back: FieldValue = serde_json::from_str(&json).unwrap();
        assert_eq!(value, back);
    }

    proptest! {
        #[test]
        fn prop_int_roundtrip(n in any::<i32>()) {
            let value = FieldValue::parse(FieldType::Int, &n.to_string()).unwrap();
            prop_assert_eq!(value, FieldValue::Int(n));
        }

        #[test]
        fn prop_text_roundtrip(s in "[a-zA-Z0-9 .]{1,64}") {
            let raw = format!("\"{s}\"");
            let value = FieldValue::parse(FieldType::Text, &raw).unwrap();
            prop_assert_eq!(value.to_string(), raw);
        }

        #[test]
        fn prop_date_roundtrip(y in 1000u16..=2026, m in 1u8..=12, d in 1u8..=28) {
            let raw = format!("'{d:02}.{m:02}.{y}'");
            let value = FieldValue::parse(FieldType::Date, &raw).unwrap();
            prop_assert_eq!(value.to_string(), raw);
        }
    }
}
