//! Postgres repository adapters.

mod booking_repository;
mod catalog_repository;

pub use booking_repository::PostgresBookingRepository;
pub use catalog_repository::PostgresCatalog;
