//! Domain-specific field types: Status, Date, Plate.
//!
//! These types own the unquoted literal bodies; quote delimiters are the
//! business of [`crate::value::FieldValue`]. Each parser rejects the whole
//! body on any deviation from the exact charset/range rule.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::limits::{MAX_YEAR, MIN_YEAR, PLATE_LETTERS};

// ============================================================================
// Status
// ============================================================================

/// Inspection outcome of a unit.
///
/// Declaration order defines the ordinal used by relational conditions:
/// `Well < WearLow < WearHigh < Broken < NotChecked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Unit passed inspection.
    Well,
    /// Minor wear detected.
    WearLow,
    /// Significant wear detected.
    WearHigh,
    /// Unit is out of service.
    Broken,
    /// Inspection has not happened yet.
    NotChecked,
}

impl Status {
    /// All statuses in ordinal order.
    pub const ALL: [Status; 5] = [
        Status::Well,
        Status::WearLow,
        Status::WearHigh,
        Status::Broken,
        Status::NotChecked,
    ];

    /// Parse an unquoted literal body. Case-sensitive, exact match only.
    pub fn from_literal(body: &str) -> Result<Status> {
        match body {
            "well" => Ok(Status::Well),
            "wearlow" => Ok(Status::WearLow),
            "wearhigh" => Ok(Status::WearHigh),
            "broken" => Ok(Status::Broken),
            "notcheck" => Ok(Status::NotChecked),
            _ => Err(Error::InvalidStatus {
                text: body.to_string(),
            }),
        }
    }

    /// The wire literal for this status.
    pub fn literal(&self) -> &'static str {
        match self {
            Status::Well => "well",
            Status::WearLow => "wearlow",
            Status::WearHigh => "wearhigh",
            Status::Broken => "broken",
            Status::NotChecked => "notcheck",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

// ============================================================================
// Date
// ============================================================================

/// A validated calendar date.
///
/// Field order (year, month, day) makes the derived `Ord` equivalent to
/// comparing `year*10000 + month*100 + day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Date {
    year: u16,
    month: u8,
    day: u8,
}

impl Date {
    /// Build a date, validating calendar rules and the year window.
    pub fn new(day: u8, month: u8, year: u16) -> Result<Date> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year)
            || !(1..=12).contains(&month)
            || day == 0
            || day > days_in_month(month, year)
        {
            return Err(Error::InvalidDate {
                text: format!("{day}.{month}.{year}"),
            });
        }
        Ok(Date { year, month, day })
    }

    /// Parse an unquoted `D.M.Y` body. Numeric parts may have any width but
    /// must be non-empty and digits only.
    pub fn parse(body: &str) -> Result<Date> {
        let bad = || Error::InvalidDate {
            text: body.to_string(),
        };
        let mut parts = body.split('.');
        let (day, month, year) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(d), Some(m), Some(y), None) => (d, m, y),
            _ => return Err(bad()),
        };
        let day: u8 = parse_digits(day).ok_or_else(bad)?;
        let month: u8 = parse_digits(month).ok_or_else(bad)?;
        let year: u16 = parse_digits(year).ok_or_else(bad)?;
        Date::new(day, month, year)
    }

    /// Day of month, 1-based.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Month, 1-based.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Four-digit year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Ordinal used by relational comparison.
    pub fn ordinal(&self) -> u32 {
        self.year as u32 * 10_000 + self.month as u32 * 100 + self.day as u32
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}.{}", self.day, self.month, self.year)
    }
}

/// Gregorian leap rule: divisible by 4 and not by 100, or divisible by 400.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(month: u8, year: u16) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Parse a string of decimal digits only; rejects empty input, signs and
/// overflow.
fn parse_digits<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// ============================================================================
// Plate
// ============================================================================

/// A structurally validated vehicle plate code.
///
/// The unquoted body is exactly 8 or 9 characters: a series letter, three
/// digits, two series letters, then a 2- or 3-digit region code. Series
/// letters come from the restricted set in [`PLATE_LETTERS`].
///
/// Two distinct comparison rules exist and are intentionally not unified:
/// - [`Plate::cmp_order`] for relational conditions and sort keys
///   (number, then letters, then region numerically);
/// - [`Plate::dedup_eq`] for the `uniq` equality key (first 6 characters
///   literally, region numerically, so `'A123BC45'` equals `'A123BC045'`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Plate {
    code: String,
}

impl Plate {
    /// Parse an unquoted plate body.
    pub fn parse(body: &str) -> Result<Plate> {
        let bad = || Error::InvalidPlate {
            text: body.to_string(),
        };
        let bytes = body.as_bytes();
        if !(bytes.len() == 8 || bytes.len() == 9) {
            return Err(bad());
        }
        let is_series_letter = |b: u8| PLATE_LETTERS.contains(&b);
        if !is_series_letter(bytes[0])
            || !bytes[1..4].iter().all(u8::is_ascii_digit)
            || !is_series_letter(bytes[4])
            || !is_series_letter(bytes[5])
            || !bytes[6..].iter().all(u8::is_ascii_digit)
        {
            return Err(bad());
        }
        Ok(Plate {
            code: body.to_string(),
        })
    }

    /// The raw 8- or 9-character code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Middle three digits as a number.
    pub fn number(&self) -> u16 {
        self.code[1..4].parse().unwrap_or(0)
    }

    /// Series letters at positions 0, 4 and 5, concatenated.
    pub fn series(&self) -> [u8; 3] {
        let b = self.code.as_bytes();
        [b[0], b[4], b[5]]
    }

    /// Trailing region digits as a number.
    pub fn region(&self) -> u16 {
        self.code[6..].parse().unwrap_or(0)
    }

    /// Three-level ordering for relational conditions and sort keys:
    /// middle number numerically, then series letters lexicographically,
    /// then region numerically.
    pub fn cmp_order(&self, other: &Plate) -> Ordering {
        self.number()
            .cmp(&other.number())
            .then_with(|| self.series().cmp(&other.series()))
            .then_with(|| self.region().cmp(&other.region()))
    }

    /// Equality key for `uniq`: first 6 characters literally, region
    /// digits numerically.
    pub fn dedup_eq(&self, other: &Plate) -> bool {
        self.code[..6] == other.code[..6] && self.region() == other.region()
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
