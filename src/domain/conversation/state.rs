//! Conversation state for one chat identity.
//!
//! Each state variant carries exactly the booking fields accumulated so
//! far, so reaching a date-entry state is impossible without a chosen
//! room (and therefore a known price per night) — there is no untyped
//! field bag to probe at runtime.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::booking::GuestDetails;
use crate::domain::catalog::{Hotel, Room};
use crate::domain::foundation::{HotelId, Price, RoomId, StayDates};

/// The hotel picked earlier in the flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelRef {
    pub id: HotelId,
    pub name: String,
}

impl From<&Hotel> for HotelRef {
    fn from(hotel: &Hotel) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name.clone(),
        }
    }
}

/// The room picked earlier in the flow, with the price locked in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRef {
    pub id: RoomId,
    pub number: String,
    pub room_type: String,
    pub price_per_night: Price,
}

impl From<&Room> for RoomRef {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id,
            number: room.room_number.clone(),
            room_type: room.room_type.clone(),
            price_per_night: room.price_per_night,
        }
    }
}

/// Hotel and room chosen together; entry ticket for the date states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSelection {
    pub hotel: HotelRef,
    pub room: RoomRef,
}

/// Everything needed to render the confirmation and submit the booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub selection: RoomSelection,
    pub stay: StayDates,
    pub guest: GuestDetails,
    pub nights: i64,
    pub total_price: Price,
}

impl BookingSummary {
    /// Computes nights and the exact total (nights × price per night).
    ///
    /// Returns `None` only on arithmetic overflow.
    pub fn compute(
        selection: RoomSelection,
        stay: StayDates,
        guest: GuestDetails,
    ) -> Option<Self> {
        let nights = stay.nights();
        let total_price = selection.room.price_per_night.checked_mul(nights)?;
        Some(Self {
            selection,
            stay,
            guest,
            nights,
            total_price,
        })
    }
}

/// Where a chat currently is in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No flow in progress.
    Idle,
    /// Assistant mode; remembers the hotel the guest last talked about.
    FreeForm { hotel_context: Option<String> },
    /// Hotel option list has been shown.
    ChoosingHotel,
    /// Room option list for `hotel` has been shown.
    ChoosingRoom { hotel: HotelRef },
    EnteringDateFrom {
        selection: RoomSelection,
    },
    EnteringDateTo {
        selection: RoomSelection,
        date_from: NaiveDate,
    },
    EnteringGuestName {
        selection: RoomSelection,
        stay: StayDates,
    },
    EnteringPhone {
        selection: RoomSelection,
        stay: StayDates,
        guest_name: String,
    },
    EnteringEmail {
        selection: RoomSelection,
        stay: StayDates,
        guest_name: String,
        guest_phone: String,
    },
    /// Summary shown; waiting for confirm / cancel.
    Confirming { summary: BookingSummary },
}

impl SessionState {
    /// True when no flow is in progress.
    pub fn is_idle(&self) -> bool {
        matches!(self, SessionState::Idle)
    }

    /// Short state name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::FreeForm { .. } => "free_form",
            SessionState::ChoosingHotel => "choosing_hotel",
            SessionState::ChoosingRoom { .. } => "choosing_room",
            SessionState::EnteringDateFrom { .. } => "entering_date_from",
            SessionState::EnteringDateTo { .. } => "entering_date_to",
            SessionState::EnteringGuestName { .. } => "entering_guest_name",
            SessionState::EnteringPhone { .. } => "entering_phone",
            SessionState::EnteringEmail { .. } => "entering_email",
            SessionState::Confirming { .. } => "confirming",
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Idle
    }
}
