//! Wire types for the catalog endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Hotel, Room};
use crate::domain::foundation::Price;

/// Hotel as returned by `GET /api/hotels/`.
#[derive(Debug, Clone, Serialize)]
pub struct HotelResponse {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub address: String,
    pub description: String,
}

impl From<Hotel> for HotelResponse {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id.value(),
            name: hotel.name,
            slug: hotel.slug,
            address: hotel.address,
            description: hotel.description,
        }
    }
}

/// Room as returned by the rooms endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct RoomResponse {
    pub id: i64,
    pub hotel: i64,
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: Price,
    pub is_available: bool,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.value(),
            hotel: room.hotel_id.value(),
            room_number: room.room_number,
            room_type: room.room_type,
            price_per_night: room.price_per_night,
            is_available: room.is_available,
        }
    }
}

/// Query parameters of `GET /api/rooms/`.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RoomsQuery {
    pub hotel: Option<i64>,
    pub available: Option<bool>,
}
