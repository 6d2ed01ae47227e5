//! HTTP handlers for the catalog endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::catalog::{
    GetRoomHandler, ListHotelsHandler, ListRoomsHandler, ListRoomsQuery,
};
use crate::domain::foundation::{HotelId, RepositoryError, RoomId};

use super::dto::{HotelResponse, RoomResponse, RoomsQuery};

/// Shared state for the catalog routes.
#[derive(Clone)]
pub struct CatalogHandlers {
    list_hotels: Arc<ListHotelsHandler>,
    list_rooms: Arc<ListRoomsHandler>,
    get_room: Arc<GetRoomHandler>,
}

impl CatalogHandlers {
    pub fn new(
        list_hotels: Arc<ListHotelsHandler>,
        list_rooms: Arc<ListRoomsHandler>,
        get_room: Arc<GetRoomHandler>,
    ) -> Self {
        Self {
            list_hotels,
            list_rooms,
            get_room,
        }
    }
}

/// GET /api/hotels/ - list all hotels
pub async fn list_hotels(State(handlers): State<CatalogHandlers>) -> Response {
    match handlers.list_hotels.handle().await {
        Ok(hotels) => {
            let body: Vec<HotelResponse> = hotels.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => handle_repository_error(e),
    }
}

/// GET /api/rooms/ - list rooms, available-only by default
pub async fn list_rooms(
    State(handlers): State<CatalogHandlers>,
    Query(query): Query<RoomsQuery>,
) -> Response {
    let query = ListRoomsQuery {
        hotel: query.hotel.map(HotelId::new),
        available: query.available,
    };

    match handlers.list_rooms.handle(query).await {
        Ok(rooms) => {
            let body: Vec<RoomResponse> = rooms.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => handle_repository_error(e),
    }
}

/// GET /api/rooms/:id - fetch one room
pub async fn get_room(
    State(handlers): State<CatalogHandlers>,
    Path(id): Path<i64>,
) -> Response {
    match handlers.get_room.handle(RoomId::new(id)).await {
        Ok(Some(room)) => (StatusCode::OK, Json(RoomResponse::from(room))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Room", &id.to_string())),
        )
            .into_response(),
        Err(e) => handle_repository_error(e),
    }
}

fn handle_repository_error(error: RepositoryError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal(error.to_string())),
    )
        .into_response()
}
