//! CreateBookingHandler - command handler for booking creation.

use std::sync::Arc;

use tracing::info;

use crate::domain::booking::{Booking, NewBooking};
use crate::domain::foundation::RepositoryError;
use crate::ports::BookingRepository;

/// Handler persisting a new booking.
pub struct CreateBookingHandler {
    bookings: Arc<dyn BookingRepository>,
}

impl CreateBookingHandler {
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }

    pub async fn handle(&self, booking: NewBooking) -> Result<Booking, RepositoryError> {
        let created = self.bookings.insert(&booking).await?;
        info!(booking_id = %created.id, hotel_id = %created.hotel_id, "booking stored");
        Ok(created)
    }
}
