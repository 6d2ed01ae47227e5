//! Foundation value objects shared across domain modules.

mod dates;
mod errors;
mod ids;
mod price;

pub use dates::{format_user_date, parse_user_date, StayDates, StayDatesError};
pub use errors::RepositoryError;
pub use ids::{BookingId, ChatId, HotelId, RoomId};
pub use price::{Price, PriceParseError};
