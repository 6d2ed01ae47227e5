//! Engine replies and user-facing rendering.
//!
//! All guest-visible texts live here. Option rows carry the callback
//! token the dispatch layer echoes back as a selection event.

use crate::domain::catalog::{Hotel, Room};
use crate::domain::foundation::format_user_date;

use super::state::BookingSummary;

/// A selectable option row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyOption {
    pub data: String,
    pub label: String,
}

impl ReplyOption {
    pub fn new(data: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            label: label.into(),
        }
    }
}

/// What the engine wants shown to the guest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineReply {
    pub text: String,
    pub options: Vec<ReplyOption>,
}

impl EngineReply {
    /// A plain text reply.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: Vec::new(),
        }
    }

    /// A reply with selectable options.
    pub fn with_options(text: impl Into<String>, options: Vec<ReplyOption>) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }
}

/// Fixed guest-facing messages.
pub mod messages {
    pub const GREETING: &str = "Привет! Я помогу подобрать свободный номер и оформить \
         бронирование.\nНажми /hotels, чтобы выбрать отель, или /ai, чтобы спросить ассистента.";
    pub const IDLE_HINT: &str =
        "Нажми /hotels, чтобы выбрать отель, или /ai, чтобы спросить ассистента.";
    pub const NO_HOTELS: &str = "Пока нет ни одного отеля в системе.";
    pub const CHOOSE_HOTEL: &str = "Выбери отель:";
    pub const NO_ROOMS: &str =
        "В этом отеле нет свободных номеров. Используй /hotels, чтобы выбрать другой.";
    pub const CHOOSE_ROOM: &str = "Выбери номер:";
    pub const ENTER_DATE_FROM: &str = "Введи дату заезда (ДД.ММ.ГГГГ):";
    pub const ENTER_DATE_TO: &str = "Теперь введи дату выезда (ДД.ММ.ГГГГ):";
    pub const BAD_DATE: &str = "Неверный формат! Введи ДД.ММ.ГГГГ.";
    pub const CHECKOUT_NOT_LATER: &str = "Дата выезда должна быть позже заезда.";
    pub const ASK_GUEST_NAME: &str = "Как зовут гостя?";
    pub const ASK_PHONE: &str = "Введите номер телефона:";
    pub const ASK_EMAIL: &str = "Введите Email:";
    pub const CONFIRM: &str = "Подтвердить";
    pub const CANCEL: &str = "Отменить";
    pub const BOOKING_CANCELLED: &str = "Бронирование отменено.";
    pub const BOOKING_FAILED: &str = "Ошибка при создании брони.";
    pub const SELECTION_ERROR: &str = "Ошибка. Попробуй снова.";
    pub const PICK_AN_OPTION: &str = "Выбери вариант кнопкой ниже.";
    pub const BOOKING_SERVICE_UNAVAILABLE: &str =
        "Сервис бронирования временно недоступен. Попробуй позже.";
    pub const ASSISTANT_ACTIVATED: &str =
        "AI-ассистент активирован.\nСпроси меня о свободных номерах, отелях или бронировании.";
    pub const ASSISTANT_UNAVAILABLE: &str = "AI-ассистент временно недоступен.";
}

/// One option row per hotel.
pub fn hotel_options(hotels: &[Hotel]) -> Vec<ReplyOption> {
    hotels
        .iter()
        .map(|h| ReplyOption::new(format!("hotel:{}", h.id), h.name.clone()))
        .collect()
}

/// Room option label: `"101 — Standard (2000.00 ₽/ночь)"`.
pub fn room_option_label(room: &Room) -> String {
    format!(
        "{} — {} ({} ₽/ночь)",
        room.room_number, room.room_type, room.price_per_night
    )
}

/// One option row per room.
pub fn room_options(rooms: &[Room]) -> Vec<ReplyOption> {
    rooms
        .iter()
        .map(|r| ReplyOption::new(format!("room:{}", r.id), room_option_label(r)))
        .collect()
}

/// Confirm / cancel option pair shown with the summary.
pub fn confirmation_options() -> Vec<ReplyOption> {
    vec![
        ReplyOption::new("confirm_yes", messages::CONFIRM),
        ReplyOption::new("confirm_no", messages::CANCEL),
    ]
}

/// Renders the pre-submit booking summary.
pub fn render_summary(summary: &BookingSummary) -> String {
    format!(
        "Проверь бронирование:\n\n\
         Номер: {} — {}\n\
         Даты: {} → {} ({} ночей)\n\
         Гость: {}\n\
         Телефон: {}\n\
         Email: {}\n\
         Итого: {} ₽",
        summary.selection.room.number,
        summary.selection.room.room_type,
        format_user_date(summary.stay.date_from()),
        format_user_date(summary.stay.date_to()),
        summary.nights,
        summary.guest.name,
        summary.guest.phone,
        summary.guest.email,
        summary.total_price,
    )
}

/// Renders room details for a free-form room question.
pub fn render_room_details(room: &Room) -> String {
    format!(
        "{} — {}\nЦена: {} ₽/ночь.\nНапиши «забронируй», чтобы оформить бронирование.",
        room.room_number, room.room_type, room.price_per_night
    )
}

/// Success message after the backend accepted the booking.
pub fn render_booking_created(booking_id: impl std::fmt::Display) -> String {
    format!("Бронирование создано!\nНомер заявки: {booking_id}")
}

/// Acknowledgement after the guest mentioned a known hotel.
pub fn render_hotel_context_ack(name: &str) -> String {
    format!("Говорим про отель «{name}». Спроси о номерах или напиши «забронируй».")
}
