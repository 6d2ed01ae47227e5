//! Catalog HTTP endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::CatalogHandlers;
pub use routes::{hotel_routes, room_routes};
