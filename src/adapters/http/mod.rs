//! HTTP server adapters: per-resource routers and their assembly.

pub mod booking;
pub mod catalog;
pub mod chat;
pub mod error;

use std::time::Duration;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

pub use booking::{booking_routes, BookingHandlers};
pub use catalog::{hotel_routes, room_routes, CatalogHandlers};
pub use chat::{chat_routes, ChatHandlers};

/// Assembles the full API router.
pub fn api_router(
    catalog: CatalogHandlers,
    booking: BookingHandlers,
    chat: ChatHandlers,
    request_timeout: Duration,
) -> Router {
    Router::new()
        .nest("/api/hotels/", hotel_routes(catalog.clone()))
        .nest("/api/rooms/", room_routes(catalog))
        .nest("/api/booking/", booking_routes(booking))
        .nest("/api/chat", chat_routes(chat))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(TimeoutLayer::new(request_timeout)),
        )
}
