//! Booking command handlers.

mod create_booking;

pub use create_booking::CreateBookingHandler;
