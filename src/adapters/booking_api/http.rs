//! HTTP Booking API adapter.
//!
//! Talks to a remote hotel backend over its JSON API. Every call is a
//! single shot: failures surface immediately and are never retried, so
//! the non-idempotent booking write cannot be duplicated.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

use crate::domain::booking::{Booking, NewBooking};
use crate::domain::catalog::{Hotel, Room, RoomFilter};
use crate::domain::foundation::RoomId;
use crate::ports::{BookingApi, BookingApiError};

/// Configuration for the HTTP booking API client.
#[derive(Debug, Clone)]
pub struct HttpBookingApiConfig {
    /// Base URL of the backend API, e.g. `http://127.0.0.1:8000/api`.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpBookingApiConfig {
    /// Creates a configuration with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Booking API served by a remote backend.
pub struct HttpBookingApi {
    config: HttpBookingApiConfig,
    client: Client,
}

impl HttpBookingApi {
    /// Creates a new client.
    pub fn new(config: HttpBookingApiConfig) -> Result<Self, BookingApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BookingApiError::network(e.to_string()))?;
        Ok(Self { config, client })
    }

    fn hotels_url(&self) -> String {
        format!("{}/hotels/", self.config.base_url)
    }

    fn rooms_url(&self) -> String {
        format!("{}/rooms/", self.config.base_url)
    }

    fn room_url(&self, id: RoomId) -> String {
        format!("{}/rooms/{}/", self.config.base_url, id)
    }

    fn booking_url(&self) -> String {
        format!("{}/booking/", self.config.base_url)
    }

    fn map_send_error(error: reqwest::Error) -> BookingApiError {
        if error.is_timeout() {
            BookingApiError::network("request timed out")
        } else if error.is_connect() {
            BookingApiError::network(format!("connection failed: {error}"))
        } else {
            BookingApiError::network(error.to_string())
        }
    }

    async fn check_status(response: Response) -> Result<Response, BookingApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        if status.is_server_error() {
            Err(BookingApiError::unavailable(format!("{status}: {body}")))
        } else {
            Err(BookingApiError::rejected(format!("{status}: {body}")))
        }
    }

    async fn parse_json<T: serde::de::DeserializeOwned>(
        response: Response,
    ) -> Result<T, BookingApiError> {
        response
            .json()
            .await
            .map_err(|e| BookingApiError::invalid_response(e.to_string()))
    }
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, BookingApiError> {
        let response = self
            .client
            .get(self.hotels_url())
            .send()
            .await
            .map_err(Self::map_send_error)?;
        let response = Self::check_status(response).await?;
        Self::parse_json(response).await
    }

    async fn list_rooms(&self, filter: RoomFilter) -> Result<Vec<Room>, BookingApiError> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(hotel) = filter.hotel {
            params.push(("hotel", hotel.to_string()));
        }
        if let Some(available) = filter.available {
            params.push(("available", available.to_string()));
        }

        let response = self
            .client
            .get(self.rooms_url())
            .query(&params)
            .send()
            .await
            .map_err(Self::map_send_error)?;
        let response = Self::check_status(response).await?;
        Self::parse_json(response).await
    }

    async fn get_room(&self, id: RoomId) -> Result<Option<Room>, BookingApiError> {
        let response = self
            .client
            .get(self.room_url(id))
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::check_status(response).await?;
        Ok(Some(Self::parse_json(response).await?))
    }

    async fn create_booking(&self, booking: &NewBooking) -> Result<Booking, BookingApiError> {
        let response = self
            .client
            .post(self.booking_url())
            .json(booking)
            .send()
            .await
            .map_err(Self::map_send_error)?;
        let response = Self::check_status(response).await?;
        Self::parse_json(response).await
    }
}
