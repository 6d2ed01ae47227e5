//! Free-form intent heuristics.
//!
//! Priority-ordered, case-insensitive substring matching over fixed
//! phrase tables: hotel-name mention, then room reference, then booking
//! trigger. The tables and the check order are part of the product
//! behavior — do not reorder or extend them when refactoring.

use once_cell::sync::Lazy;

use crate::domain::catalog::{Hotel, Room};

/// Phrases that signal booking intent.
static BOOKING_TRIGGERS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "забронируй",
        "забронировать",
        "бронь",
        "хочу номер",
        "book a room",
    ]
});

/// Keywords resolving to a family room.
static FAMILY_KEYWORDS: Lazy<Vec<&'static str>> = Lazy::new(|| vec!["семейн", "family"]);

/// Keywords resolving to the first standard room.
static STANDARD_KEYWORDS: Lazy<Vec<&'static str>> = Lazy::new(|| vec!["стандарт", "standard"]);

/// Upper bound of the `room N` pattern.
const NUMBERED_ROOM_MAX: u32 = 5;

/// A room the guest referred to in free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomReference {
    Family,
    Numbered(u32),
}

/// Whether the text contains a booking-trigger phrase.
pub fn matches_booking_trigger(text: &str) -> bool {
    let lower = text.to_lowercase();
    BOOKING_TRIGGERS.iter().any(|t| lower.contains(t))
}

/// First hotel whose name appears in the text, in fetch order.
pub fn find_mentioned_hotel<'a>(hotels: &'a [Hotel], text: &str) -> Option<&'a Hotel> {
    hotels.iter().find(|h| h.is_mentioned_in(text))
}

/// Extracts a room reference: family keyword, then `room N` / `номер N`
/// for N up to five, then a standard keyword defaulting to room 1.
pub fn extract_room_reference(text: &str) -> Option<RoomReference> {
    let lower = text.to_lowercase();

    if FAMILY_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return Some(RoomReference::Family);
    }

    for n in 1..=NUMBERED_ROOM_MAX {
        if lower.contains(&format!("room {n}")) || lower.contains(&format!("номер {n}")) {
            return Some(RoomReference::Numbered(n));
        }
    }

    if STANDARD_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return Some(RoomReference::Numbered(1));
    }

    None
}

/// Resolves a reference among a hotel's rooms.
///
/// A numbered reference matches a room whose type reads `standard N`
/// (or `стандарт N`), or whose room number is exactly `N`.
pub fn find_room<'a>(rooms: &'a [Room], reference: RoomReference) -> Option<&'a Room> {
    match reference {
        RoomReference::Family => rooms.iter().find(|r| {
            let room_type = r.room_type.to_lowercase();
            FAMILY_KEYWORDS.iter().any(|k| room_type.contains(k))
        }),
        RoomReference::Numbered(n) => rooms.iter().find(|r| {
            let room_type = r.room_type.to_lowercase();
            room_type.contains(&format!("standard {n}"))
                || room_type.contains(&format!("стандарт {n}"))
                || r.room_number == n.to_string()
        }),
    }
}
