//! Postgres booking repository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::booking::{Booking, NewBooking};
use crate::domain::foundation::{BookingId, RepositoryError};
use crate::ports::BookingRepository;

/// Booking storage backed by Postgres.
#[derive(Debug, Clone)]
pub struct PostgresBookingRepository {
    pool: PgPool,
}

impl PostgresBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepository {
    async fn insert(&self, booking: &NewBooking) -> Result<Booking, RepositoryError> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO bookings_booking
                 (hotel_id, room_id, guest_name, guest_phone, guest_email,
                  date_from, date_to, total_price, is_confirmed, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8::numeric, $9, now())
             RETURNING id",
        )
        .bind(booking.hotel_id.value())
        .bind(booking.room_id.value())
        .bind(&booking.guest_name)
        .bind(&booking.guest_phone)
        .bind(&booking.guest_email)
        .bind(booking.date_from)
        .bind(booking.date_to)
        .bind(booking.total_price.to_string())
        .bind(booking.is_confirmed)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::database(e.to_string()))?;

        Ok(Booking {
            id: BookingId::new(id),
            hotel_id: booking.hotel_id,
            room_id: booking.room_id,
            guest_name: booking.guest_name.clone(),
            guest_phone: booking.guest_phone.clone(),
            guest_email: booking.guest_email.clone(),
            date_from: booking.date_from,
            date_to: booking.date_to,
            total_price: booking.total_price,
            is_confirmed: booking.is_confirmed,
        })
    }
}
