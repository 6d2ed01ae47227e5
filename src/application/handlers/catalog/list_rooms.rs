//! ListRoomsHandler - query handler for room listings.

use std::sync::Arc;

use crate::domain::catalog::{Room, RoomFilter};
use crate::domain::foundation::{HotelId, RepositoryError};
use crate::ports::RoomRepository;

/// Room listing query. Availability defaults to available-only, the
/// public contract of the rooms endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListRoomsQuery {
    pub hotel: Option<HotelId>,
    pub available: Option<bool>,
}

/// Handler returning rooms matching a query.
pub struct ListRoomsHandler {
    rooms: Arc<dyn RoomRepository>,
}

impl ListRoomsHandler {
    pub fn new(rooms: Arc<dyn RoomRepository>) -> Self {
        Self { rooms }
    }

    pub async fn handle(&self, query: ListRoomsQuery) -> Result<Vec<Room>, RepositoryError> {
        let filter = RoomFilter {
            hotel: query.hotel,
            available: Some(query.available.unwrap_or(true)),
        };
        self.rooms.list(filter).await
    }
}
