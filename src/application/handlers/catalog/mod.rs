//! Catalog query handlers.

mod get_room;
mod list_hotels;
mod list_rooms;

pub use get_room::GetRoomHandler;
pub use list_hotels::ListHotelsHandler;
pub use list_rooms::{ListRoomsHandler, ListRoomsQuery};
