//! Wire types for the booking endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::booking::{Booking, NewBooking};
use crate::domain::foundation::{HotelId, Price, RoomId};

/// Body of `POST /api/booking/`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookingRequest {
    pub hotel: i64,
    pub room: i64,
    pub guest_name: String,
    pub guest_phone: String,
    #[serde(default)]
    pub guest_email: String,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub total_price: Price,
    #[serde(default)]
    pub is_confirmed: bool,
}

impl From<CreateBookingRequest> for NewBooking {
    fn from(req: CreateBookingRequest) -> Self {
        NewBooking {
            hotel_id: HotelId::new(req.hotel),
            room_id: RoomId::new(req.room),
            guest_name: req.guest_name,
            guest_phone: req.guest_phone,
            guest_email: req.guest_email,
            date_from: req.date_from,
            date_to: req.date_to,
            total_price: req.total_price,
            is_confirmed: req.is_confirmed,
        }
    }
}

/// Created booking as returned to the client.
#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    pub id: i64,
    pub hotel: i64,
    pub room: i64,
    pub guest_name: String,
    pub guest_phone: String,
    pub guest_email: String,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub total_price: Price,
    pub is_confirmed: bool,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id.value(),
            hotel: booking.hotel_id.value(),
            room: booking.room_id.value(),
            guest_name: booking.guest_name,
            guest_phone: booking.guest_phone,
            guest_email: booking.guest_email,
            date_from: booking.date_from,
            date_to: booking.date_to,
            total_price: booking.total_price,
            is_confirmed: booking.is_confirmed,
        }
    }
}
