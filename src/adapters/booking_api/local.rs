//! Local Booking API adapter.
//!
//! Serves the booking API contract straight from the repository ports,
//! for deployments where the backend and the concierge run in one
//! process.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::booking::{Booking, NewBooking};
use crate::domain::catalog::{Hotel, Room, RoomFilter};
use crate::domain::foundation::{RepositoryError, RoomId};
use crate::ports::{
    BookingApi, BookingApiError, BookingRepository, HotelRepository, RoomRepository,
};

/// Booking API backed by local repositories.
pub struct LocalBookingApi {
    hotels: Arc<dyn HotelRepository>,
    rooms: Arc<dyn RoomRepository>,
    bookings: Arc<dyn BookingRepository>,
}

impl LocalBookingApi {
    pub fn new(
        hotels: Arc<dyn HotelRepository>,
        rooms: Arc<dyn RoomRepository>,
        bookings: Arc<dyn BookingRepository>,
    ) -> Self {
        Self {
            hotels,
            rooms,
            bookings,
        }
    }
}

fn map_repository_error(error: RepositoryError) -> BookingApiError {
    BookingApiError::unavailable(error.to_string())
}

#[async_trait]
impl BookingApi for LocalBookingApi {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, BookingApiError> {
        self.hotels.list().await.map_err(map_repository_error)
    }

    async fn list_rooms(&self, filter: RoomFilter) -> Result<Vec<Room>, BookingApiError> {
        self.rooms
            .list(filter)
            .await
            .map_err(map_repository_error)
    }

    async fn get_room(&self, id: RoomId) -> Result<Option<Room>, BookingApiError> {
        self.rooms
            .find_by_id(id)
            .await
            .map_err(map_repository_error)
    }

    async fn create_booking(&self, booking: &NewBooking) -> Result<Booking, BookingApiError> {
        self.bookings
            .insert(booking)
            .await
            .map_err(map_repository_error)
    }
}
