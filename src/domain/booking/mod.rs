//! Booking write model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{BookingId, HotelId, Price, RoomId, StayDates};

/// Contact details collected from the guest during the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// A booking to be submitted to the backend.
///
/// Wire field names for the hotel and room follow the backend serializer.
/// `is_confirmed` is always submitted as `false`; confirmation happens on
/// the operator side, outside this system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    #[serde(rename = "hotel")]
    pub hotel_id: HotelId,
    #[serde(rename = "room")]
    pub room_id: RoomId,
    pub guest_name: String,
    pub guest_phone: String,
    pub guest_email: String,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub total_price: Price,
    pub is_confirmed: bool,
}

impl NewBooking {
    /// Assembles an unconfirmed booking from accumulated conversation data.
    pub fn unconfirmed(
        hotel_id: HotelId,
        room_id: RoomId,
        guest: GuestDetails,
        stay: StayDates,
        total_price: Price,
    ) -> Self {
        Self {
            hotel_id,
            room_id,
            guest_name: guest.name,
            guest_phone: guest.phone,
            guest_email: guest.email,
            date_from: stay.date_from(),
            date_to: stay.date_to(),
            total_price,
            is_confirmed: false,
        }
    }
}

/// A booking record as returned by the backend after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    #[serde(rename = "hotel")]
    pub hotel_id: HotelId,
    #[serde(rename = "room")]
    pub room_id: RoomId,
    pub guest_name: String,
    pub guest_phone: String,
    pub guest_email: String,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub total_price: Price,
    pub is_confirmed: bool,
}
