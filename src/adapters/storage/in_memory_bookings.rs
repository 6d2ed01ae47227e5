//! In-memory booking repository with auto-incrementing ids.

use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::booking::{Booking, NewBooking};
use crate::domain::foundation::{BookingId, RepositoryError};
use crate::ports::BookingRepository;

/// In-memory booking storage.
#[derive(Debug)]
pub struct InMemoryBookingRepository {
    bookings: Arc<RwLock<Vec<Booking>>>,
    next_id: AtomicI64,
}

impl InMemoryBookingRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            bookings: Arc::new(RwLock::new(Vec::new())),
            next_id: AtomicI64::new(1),
        }
    }

    /// All stored bookings, in insertion order.
    pub async fn all(&self) -> Vec<Booking> {
        self.bookings.read().await.clone()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn insert(&self, booking: &NewBooking) -> Result<Booking, RepositoryError> {
        let id = BookingId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let stored = Booking {
            id,
            hotel_id: booking.hotel_id,
            room_id: booking.room_id,
            guest_name: booking.guest_name.clone(),
            guest_phone: booking.guest_phone.clone(),
            guest_email: booking.guest_email.clone(),
            date_from: booking.date_from,
            date_to: booking.date_to,
            total_price: booking.total_price,
            is_confirmed: booking.is_confirmed,
        };
        self.bookings.write().await.push(stored.clone());
        Ok(stored)
    }
}
