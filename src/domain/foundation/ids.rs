//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Opaque chat identity assigned by the messenger dispatch layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(String);

impl ChatId {
    /// Creates a ChatId from the dispatch layer's identity string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ChatId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Unique identifier for a hotel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HotelId(i64);

impl HotelId {
    /// Wraps a backend-assigned hotel id.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner numeric id.
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for HotelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HotelId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Unique identifier for a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(i64);

impl RoomId {
    /// Wraps a backend-assigned room id.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner numeric id.
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RoomId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Unique identifier for a created booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(i64);

impl BookingId {
    /// Wraps a backend-assigned booking id.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner numeric id.
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookingId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_id_preserves_identity_string() {
        let id = ChatId::new("384920157");
        assert_eq!(id.as_str(), "384920157");
        assert_eq!(id.to_string(), "384920157");
    }

    #[test]
    fn hotel_id_parses_from_str() {
        let id: HotelId = "42".parse().unwrap();
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn hotel_id_rejects_non_numeric() {
        assert!("abc".parse::<HotelId>().is_err());
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&RoomId::new(5)).unwrap();
        assert_eq!(json, "5");

        let id: RoomId = serde_json::from_str("5").unwrap();
        assert_eq!(id, RoomId::new(5));
    }

    #[test]
    fn booking_id_displays_inner_value() {
        assert_eq!(BookingId::new(17).to_string(), "17");
    }
}
