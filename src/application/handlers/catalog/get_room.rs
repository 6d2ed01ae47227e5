//! GetRoomHandler - query handler for a single room.

use std::sync::Arc;

use crate::domain::catalog::Room;
use crate::domain::foundation::{RepositoryError, RoomId};
use crate::ports::RoomRepository;

/// Handler fetching one room by id.
pub struct GetRoomHandler {
    rooms: Arc<dyn RoomRepository>,
}

impl GetRoomHandler {
    pub fn new(rooms: Arc<dyn RoomRepository>) -> Self {
        Self { rooms }
    }

    pub async fn handle(&self, id: RoomId) -> Result<Option<Room>, RepositoryError> {
        self.rooms.find_by_id(id).await
    }
}
