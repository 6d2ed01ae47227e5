//! Room read model and listing filter.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{HotelId, Price, RoomId};

/// A room as served by the booking backend.
///
/// The wire field for the owning hotel is named `hotel`, matching the
/// backend serializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    #[serde(rename = "hotel")]
    pub hotel_id: HotelId,
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: Price,
    pub is_available: bool,
}

/// Filter for room listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoomFilter {
    pub hotel: Option<HotelId>,
    pub available: Option<bool>,
}

impl RoomFilter {
    /// An unrestricted filter.
    pub fn any() -> Self {
        Self::default()
    }

    /// Restricts the listing to one hotel.
    pub fn for_hotel(mut self, hotel: HotelId) -> Self {
        self.hotel = Some(hotel);
        self
    }

    /// Restricts the listing to rooms currently available.
    pub fn available_only(mut self) -> Self {
        self.available = Some(true);
        self
    }

    /// Whether a room passes this filter.
    pub fn matches(&self, room: &Room) -> bool {
        if let Some(hotel) = self.hotel {
            if room.hotel_id != hotel {
                return false;
            }
        }
        if let Some(available) = self.available {
            if room.is_available != available {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: i64, hotel: i64, available: bool) -> Room {
        Room {
            id: RoomId::new(id),
            hotel_id: HotelId::new(hotel),
            room_number: "101".to_string(),
            room_type: "Standard".to_string(),
            price_per_night: Price::from_major(2000),
            is_available: available,
        }
    }

    #[test]
    fn filter_by_hotel_and_availability() {
        let filter = RoomFilter::any()
            .for_hotel(HotelId::new(1))
            .available_only();

        assert!(filter.matches(&room(5, 1, true)));
        assert!(!filter.matches(&room(6, 1, false)));
        assert!(!filter.matches(&room(7, 2, true)));
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(RoomFilter::any().matches(&room(5, 1, false)));
    }

    #[test]
    fn deserializes_backend_payload() {
        let json = r#"{"id":5,"hotel":1,"room_number":"101","room_type":"Standard","price_per_night":"2000.00","is_available":true}"#;
        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.hotel_id, HotelId::new(1));
        assert_eq!(room.price_per_night, Price::from_major(2000));
    }

    #[test]
    fn serializes_hotel_field_under_wire_name() {
        let json = serde_json::to_value(room(5, 1, true)).unwrap();
        assert_eq!(json["hotel"], 1);
        assert!(json.get("hotel_id").is_none());
    }
}
