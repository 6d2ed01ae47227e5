//! In-memory hotel and room repositories.
//!
//! Backs tests, demos and the local booking API without a database.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::catalog::{Hotel, Room, RoomFilter};
use crate::domain::foundation::{RepositoryError, RoomId};
use crate::ports::{HotelRepository, RoomRepository};

/// In-memory catalog of hotels and rooms.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    hotels: Arc<RwLock<Vec<Hotel>>>,
    rooms: Arc<RwLock<Vec<Room>>>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog pre-populated with data.
    pub fn with_data(hotels: Vec<Hotel>, rooms: Vec<Room>) -> Self {
        Self {
            hotels: Arc::new(RwLock::new(hotels)),
            rooms: Arc::new(RwLock::new(rooms)),
        }
    }

    /// Adds a hotel.
    pub async fn add_hotel(&self, hotel: Hotel) {
        self.hotels.write().await.push(hotel);
    }

    /// Adds a room.
    pub async fn add_room(&self, room: Room) {
        self.rooms.write().await.push(room);
    }
}

#[async_trait]
impl HotelRepository for InMemoryCatalog {
    async fn list(&self) -> Result<Vec<Hotel>, RepositoryError> {
        Ok(self.hotels.read().await.clone())
    }
}

#[async_trait]
impl RoomRepository for InMemoryCatalog {
    async fn list(&self, filter: RoomFilter) -> Result<Vec<Room>, RepositoryError> {
        Ok(self
            .rooms
            .read()
            .await
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: RoomId) -> Result<Option<Room>, RepositoryError> {
        Ok(self.rooms.read().await.iter().find(|r| r.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{HotelId, Price};

    fn room(id: i64, hotel: i64, available: bool) -> Room {
        Room {
            id: RoomId::new(id),
            hotel_id: HotelId::new(hotel),
            room_number: format!("{id}"),
            room_type: "Standard".to_string(),
            price_per_night: Price::from_major(2000),
            is_available: available,
        }
    }

    #[tokio::test]
    async fn filters_rooms_by_hotel_and_availability() {
        let catalog = InMemoryCatalog::with_data(
            Vec::new(),
            vec![room(1, 1, true), room(2, 1, false), room(3, 2, true)],
        );

        let rooms = RoomRepository::list(
            &catalog,
            RoomFilter::any().for_hotel(HotelId::new(1)).available_only(),
        )
        .await
        .unwrap();

        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].id, RoomId::new(1));
    }

    #[tokio::test]
    async fn finds_room_by_id() {
        let catalog = InMemoryCatalog::new();
        catalog.add_room(room(5, 1, true)).await;

        assert!(catalog.find_by_id(RoomId::new(5)).await.unwrap().is_some());
        assert!(catalog.find_by_id(RoomId::new(6)).await.unwrap().is_none());
    }
}
