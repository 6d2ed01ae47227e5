//! Booking Repository Port - server-side booking storage.

use async_trait::async_trait;

use crate::domain::booking::{Booking, NewBooking};
use crate::domain::foundation::RepositoryError;

/// Port for booking storage.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts a booking and returns the stored record with its id.
    async fn insert(&self, booking: &NewBooking) -> Result<Booking, RepositoryError>;
}
