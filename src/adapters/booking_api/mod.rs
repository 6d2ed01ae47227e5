//! Booking API adapters: remote HTTP client and local repository-backed
//! implementation.

mod http;
mod local;

pub use http::{HttpBookingApi, HttpBookingApiConfig};
pub use local::LocalBookingApi;
