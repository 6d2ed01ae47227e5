//! Booking API Port - read/write access to the hotel backend.
//!
//! The conversation engine consumes the backend only through this
//! interface; implementations may call a remote HTTP service or serve
//! the same contract straight from local repositories.

use async_trait::async_trait;

use crate::domain::booking::{Booking, NewBooking};
use crate::domain::catalog::{Hotel, Room, RoomFilter};
use crate::domain::foundation::RoomId;

/// Booking backend errors.
///
/// No call through this port is ever retried; an error surfaces to the
/// guest immediately.
#[derive(Debug, thiserror::Error)]
pub enum BookingApiError {
    /// The backend is down or returned a server error.
    #[error("booking service unavailable: {0}")]
    Unavailable(String),

    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// The backend rejected the request.
    #[error("request rejected: {0}")]
    Rejected(String),

    /// The backend answered with something unparseable.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl BookingApiError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a rejected error.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// Creates an invalid-response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }
}

/// Port for the hotel booking backend.
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// Lists all hotels.
    async fn list_hotels(&self) -> Result<Vec<Hotel>, BookingApiError>;

    /// Lists rooms matching the filter.
    async fn list_rooms(&self, filter: RoomFilter) -> Result<Vec<Room>, BookingApiError>;

    /// Fetches a single room, `None` when it does not exist.
    async fn get_room(&self, id: RoomId) -> Result<Option<Room>, BookingApiError>;

    /// Creates a booking. Non-idempotent; never retried.
    async fn create_booking(&self, booking: &NewBooking) -> Result<Booking, BookingApiError>;
}
