//! HTTP routes for the booking endpoint.

use axum::{routing::post, Router};

use super::handlers::{create_booking, BookingHandlers};

/// Creates the booking router.
pub fn booking_routes(handlers: BookingHandlers) -> Router {
    Router::new()
        .route("/", post(create_booking))
        .with_state(handlers)
}
