//! Postgres hotel and room repositories.
//!
//! Queries assume the backend's existing `hotels_hotel` and
//! `rooms_room` tables; schema management happens elsewhere. Prices are
//! selected as text so NUMERIC values round-trip exactly into minor
//! units.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::catalog::{Hotel, Room, RoomFilter};
use crate::domain::foundation::{HotelId, Price, RepositoryError, RoomId};
use crate::ports::{HotelRepository, RoomRepository};

/// Catalog repositories backed by Postgres.
#[derive(Debug, Clone)]
pub struct PostgresCatalog {
    pool: PgPool,
}

impl PostgresCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct HotelRow {
    id: i64,
    name: String,
    slug: String,
    address: String,
    description: String,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        Hotel {
            id: HotelId::new(row.id),
            name: row.name,
            slug: row.slug,
            address: row.address,
            description: row.description,
        }
    }
}

#[derive(sqlx::FromRow)]
struct RoomRow {
    id: i64,
    hotel_id: i64,
    room_number: String,
    room_type: String,
    price_per_night: String,
    is_available: bool,
}

impl TryFrom<RoomRow> for Room {
    type Error = RepositoryError;

    fn try_from(row: RoomRow) -> Result<Self, Self::Error> {
        let price_per_night: Price = row
            .price_per_night
            .parse()
            .map_err(|e| RepositoryError::corrupt_record(format!("room {}: {e}", row.id)))?;
        Ok(Room {
            id: RoomId::new(row.id),
            hotel_id: HotelId::new(row.hotel_id),
            room_number: row.room_number,
            room_type: row.room_type,
            price_per_night,
            is_available: row.is_available,
        })
    }
}

#[async_trait]
impl HotelRepository for PostgresCatalog {
    async fn list(&self) -> Result<Vec<Hotel>, RepositoryError> {
        let rows = sqlx::query_as::<_, HotelRow>(
            "SELECT id, name, slug, address, description
             FROM hotels_hotel
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::database(e.to_string()))?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }
}

#[async_trait]
impl RoomRepository for PostgresCatalog {
    async fn list(&self, filter: RoomFilter) -> Result<Vec<Room>, RepositoryError> {
        let rows = sqlx::query_as::<_, RoomRow>(
            "SELECT id, hotel_id, room_number, room_type,
                    price_per_night::text AS price_per_night, is_available
             FROM rooms_room
             WHERE ($1::bigint IS NULL OR hotel_id = $1)
               AND ($2::boolean IS NULL OR is_available = $2)
             ORDER BY id",
        )
        .bind(filter.hotel.map(|h| h.value()))
        .bind(filter.available)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::database(e.to_string()))?;

        rows.into_iter().map(Room::try_from).collect()
    }

    async fn find_by_id(&self, id: RoomId) -> Result<Option<Room>, RepositoryError> {
        let row = sqlx::query_as::<_, RoomRow>(
            "SELECT id, hotel_id, room_number, room_type,
                    price_per_night::text AS price_per_night, is_available
             FROM rooms_room
             WHERE id = $1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::database(e.to_string()))?;

        row.map(Room::try_from).transpose()
    }
}
