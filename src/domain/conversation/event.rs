//! Inbound chat events and the selection token format.

use crate::domain::foundation::{HotelId, RoomId};

/// Slash commands understood by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/start` — reset and greet.
    Start,
    /// `/hotels` — reset and show the hotel list.
    Hotels,
    /// `/ai` — switch the chat to assistant mode.
    Assistant,
}

impl Command {
    /// Parses a command name without the leading slash.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "start" => Some(Command::Start),
            "hotels" => Some(Command::Hotels),
            "ai" => Some(Command::Assistant),
            _ => None,
        }
    }
}

/// A pressed option, decoded from its callback token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Hotel(HotelId),
    Room(RoomId),
    ConfirmBooking,
    CancelBooking,
}

impl Selection {
    /// Parses a callback token: `hotel:<id>`, `room:<id>`, `confirm_yes`
    /// or `confirm_no`.
    pub fn parse(data: &str) -> Option<Self> {
        if let Some(id) = data.strip_prefix("hotel:") {
            return id.parse().ok().map(Selection::Hotel);
        }
        if let Some(id) = data.strip_prefix("room:") {
            return id.parse().ok().map(Selection::Room);
        }
        match data {
            "confirm_yes" => Some(Selection::ConfirmBooking),
            "confirm_no" => Some(Selection::CancelBooking),
            _ => None,
        }
    }

    /// Renders the callback token for this selection.
    pub fn data(&self) -> String {
        match self {
            Selection::Hotel(id) => format!("hotel:{id}"),
            Selection::Room(id) => format!("room:{id}"),
            Selection::ConfirmBooking => "confirm_yes".to_string(),
            Selection::CancelBooking => "confirm_no".to_string(),
        }
    }
}

/// One inbound event from the dispatch layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    Command(Command),
    Text(String),
    Selection(Selection),
}
