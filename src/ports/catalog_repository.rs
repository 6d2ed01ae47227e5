//! Catalog Repository Ports - server-side hotel and room storage.

use async_trait::async_trait;

use crate::domain::catalog::{Hotel, Room, RoomFilter};
use crate::domain::foundation::{RepositoryError, RoomId};

/// Port for hotel storage.
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Lists all hotels in id order.
    async fn list(&self) -> Result<Vec<Hotel>, RepositoryError>;
}

/// Port for room storage.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Lists rooms matching the filter, in id order.
    async fn list(&self, filter: RoomFilter) -> Result<Vec<Room>, RepositoryError>;

    /// Finds a room by id.
    async fn find_by_id(&self, id: RoomId) -> Result<Option<Room>, RepositoryError>;
}
