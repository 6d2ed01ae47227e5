//! Hotel and room read models.

mod hotel;
mod room;

pub use hotel::Hotel;
pub use room::{Room, RoomFilter};
