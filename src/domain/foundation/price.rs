//! Monetary amounts in integer minor units.
//!
//! The booking backend exchanges prices as two-decimal strings
//! (`"2000.00"`). Keeping the value in minor units makes the
//! nights-times-rate total exact with no floating point involved.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A non-negative amount of money in minor currency units (kopecks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(i64);

/// Error parsing a decimal price string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price: {0}")]
pub struct PriceParseError(String);

impl Price {
    /// Creates a price from minor units.
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Creates a price from whole currency units.
    pub const fn from_major(major: i64) -> Self {
        Self(major * 100)
    }

    /// Returns the amount in minor units.
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Multiplies the price by a count, failing on overflow.
    pub fn checked_mul(&self, count: i64) -> Option<Price> {
        self.0.checked_mul(count).map(Price)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, (self.0 % 100).abs())
    }
}

impl FromStr for Price {
    type Err = PriceParseError;

    /// Parses `"2000"`, `"2000.5"` or `"2000.00"`. Anything else —
    /// signs, exponents, more than two decimals — is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || PriceParseError(s.to_string());

        let (whole, frac) = match s.split_once('.') {
            Some((_, "")) => return Err(invalid()),
            Some((w, f)) => (w, f),
            None => (s, ""),
        };

        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let major: i64 = whole.parse().map_err(|_| invalid())?;
        let minor: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        major
            .checked_mul(100)
            .and_then(|m| m.checked_add(minor))
            .map(Price)
            .ok_or_else(invalid)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

struct PriceVisitor;

impl<'de> Visitor<'de> for PriceVisitor {
    type Value = Price;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal price string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
        v.parse().map_err(de::Error::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
        i64::try_from(v)
            .ok()
            .and_then(|major| major.checked_mul(100))
            .map(Price)
            .ok_or_else(|| de::Error::custom("price out of range"))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
        if v < 0 {
            return Err(de::Error::custom("price must be non-negative"));
        }
        v.checked_mul(100)
            .map(Price)
            .ok_or_else(|| de::Error::custom("price out of range"))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
        if !v.is_finite() || v < 0.0 {
            return Err(de::Error::custom("price must be a non-negative number"));
        }
        Ok(Price((v * 100.0).round() as i64))
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PriceVisitor)
    }
}
