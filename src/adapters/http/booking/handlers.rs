//! HTTP handlers for the booking endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::booking::CreateBookingHandler;
use crate::domain::booking::NewBooking;

use super::dto::{BookingResponse, CreateBookingRequest};

/// Shared state for the booking routes.
#[derive(Clone)]
pub struct BookingHandlers {
    create: Arc<CreateBookingHandler>,
}

impl BookingHandlers {
    pub fn new(create: Arc<CreateBookingHandler>) -> Self {
        Self { create }
    }
}

/// POST /api/booking/ - create a booking
pub async fn create_booking(
    State(handlers): State<BookingHandlers>,
    Json(request): Json<CreateBookingRequest>,
) -> Response {
    let booking = NewBooking::from(request);

    match handlers.create.handle(booking).await {
        Ok(created) => {
            (StatusCode::CREATED, Json(BookingResponse::from(created))).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(e.to_string())),
        )
            .into_response(),
    }
}
