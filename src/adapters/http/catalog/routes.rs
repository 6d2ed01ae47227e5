//! HTTP routes for the catalog endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_room, list_hotels, list_rooms, CatalogHandlers};

/// Creates the hotels router.
pub fn hotel_routes(handlers: CatalogHandlers) -> Router {
    Router::new()
        .route("/", get(list_hotels))
        .with_state(handlers)
}

/// Creates the rooms router.
pub fn room_routes(handlers: CatalogHandlers) -> Router {
    Router::new()
        .route("/", get(list_rooms))
        .route("/:id", get(get_room))
        .with_state(handlers)
}
