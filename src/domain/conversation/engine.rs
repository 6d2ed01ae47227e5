//! The conversation engine.
//!
//! One `handle` call per inbound event: consult the session state,
//! call collaborators as needed, move the session to its next state and
//! render a reply. The engine holds no locks — serialization of events
//! per chat identity is the dispatch layer's responsibility — and never
//! retries a failed collaborator call.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::booking::{GuestDetails, NewBooking};
use crate::domain::catalog::RoomFilter;
use crate::domain::foundation::{parse_user_date, HotelId, RoomId, StayDates};
use crate::ports::{AssistantBridge, BookingApi, KnowledgeSearch};

use super::event::{Command, InboundEvent, Selection};
use super::intent;
use super::reply::{self, messages, EngineReply};
use super::session::Session;
use super::state::{BookingSummary, HotelRef, RoomSelection, SessionState};

/// System instruction prepended to every assistant prompt.
const ASSISTANT_SYSTEM_PROMPT: &str = "Ты — AI-ассистент отеля. Ты помогаешь гостям \
     с вопросами о номерах и бронировании. Отвечай только на основе предоставленного \
     контекста и не придумывай данные. Если информации недостаточно, предложи команду /hotels.";

/// Drives one chat session through the booking flow and assistant mode.
pub struct ConversationEngine {
    booking_api: Arc<dyn BookingApi>,
    assistant: Arc<dyn AssistantBridge>,
    knowledge: Arc<dyn KnowledgeSearch>,
}

impl ConversationEngine {
    pub fn new(
        booking_api: Arc<dyn BookingApi>,
        assistant: Arc<dyn AssistantBridge>,
        knowledge: Arc<dyn KnowledgeSearch>,
    ) -> Self {
        Self {
            booking_api,
            assistant,
            knowledge,
        }
    }

    /// Processes one inbound event for the session.
    pub async fn handle(&self, session: &mut Session, event: InboundEvent) -> EngineReply {
        let reply = match event {
            InboundEvent::Command(command) => self.handle_command(session, command).await,
            InboundEvent::Selection(selection) => self.handle_selection(session, selection).await,
            InboundEvent::Text(text) => self.handle_text(session, text).await,
        };
        info!(
            chat_id = %session.chat_id(),
            state = session.state().name(),
            "event handled"
        );
        reply
    }

    async fn handle_command(&self, session: &mut Session, command: Command) -> EngineReply {
        match command {
            Command::Start => {
                session.reset();
                EngineReply::text(messages::GREETING)
            }
            Command::Hotels => {
                session.reset();
                self.enter_hotel_selection(session).await
            }
            Command::Assistant => {
                session.set_state(SessionState::FreeForm {
                    hotel_context: None,
                });
                EngineReply::text(messages::ASSISTANT_ACTIVATED)
            }
        }
    }

    async fn handle_selection(&self, session: &mut Session, selection: Selection) -> EngineReply {
        match (session.state().clone(), selection) {
            (SessionState::ChoosingHotel, Selection::Hotel(id)) => {
                self.hotel_chosen(session, id).await
            }
            (SessionState::ChoosingRoom { hotel }, Selection::Room(id)) => {
                self.room_chosen(session, hotel, id).await
            }
            (SessionState::Confirming { summary }, Selection::ConfirmBooking) => {
                self.submit_booking(session, summary).await
            }
            (SessionState::Confirming { .. }, Selection::CancelBooking) => {
                session.reset();
                EngineReply::text(messages::BOOKING_CANCELLED)
            }
            _ => EngineReply::text(messages::SELECTION_ERROR),
        }
    }

    async fn handle_text(&self, session: &mut Session, text: String) -> EngineReply {
        match session.state().clone() {
            SessionState::Idle => {
                if intent::matches_booking_trigger(&text) {
                    self.enter_hotel_selection(session).await
                } else {
                    EngineReply::text(messages::IDLE_HINT)
                }
            }
            SessionState::FreeForm { hotel_context } => {
                self.free_form(session, hotel_context, &text).await
            }
            SessionState::ChoosingHotel
            | SessionState::ChoosingRoom { .. }
            | SessionState::Confirming { .. } => EngineReply::text(messages::PICK_AN_OPTION),
            SessionState::EnteringDateFrom { selection } => match parse_user_date(&text) {
                None => EngineReply::text(messages::BAD_DATE),
                Some(date_from) => {
                    session.set_state(SessionState::EnteringDateTo {
                        selection,
                        date_from,
                    });
                    EngineReply::text(messages::ENTER_DATE_TO)
                }
            },
            SessionState::EnteringDateTo {
                selection,
                date_from,
            } => match parse_user_date(&text) {
                None => EngineReply::text(messages::BAD_DATE),
                Some(date_to) => match StayDates::new(date_from, date_to) {
                    Err(_) => EngineReply::text(messages::CHECKOUT_NOT_LATER),
                    Ok(stay) => {
                        session.set_state(SessionState::EnteringGuestName { selection, stay });
                        EngineReply::text(messages::ASK_GUEST_NAME)
                    }
                },
            },
            SessionState::EnteringGuestName { selection, stay } => {
                let name = text.trim();
                if name.is_empty() {
                    return EngineReply::text(messages::ASK_GUEST_NAME);
                }
                session.set_state(SessionState::EnteringPhone {
                    selection,
                    stay,
                    guest_name: name.to_string(),
                });
                EngineReply::text(messages::ASK_PHONE)
            }
            SessionState::EnteringPhone {
                selection,
                stay,
                guest_name,
            } => {
                let phone = text.trim();
                if phone.is_empty() {
                    return EngineReply::text(messages::ASK_PHONE);
                }
                session.set_state(SessionState::EnteringEmail {
                    selection,
                    stay,
                    guest_name,
                    guest_phone: phone.to_string(),
                });
                EngineReply::text(messages::ASK_EMAIL)
            }
            SessionState::EnteringEmail {
                selection,
                stay,
                guest_name,
                guest_phone,
            } => {
                let email = text.trim();
                if email.is_empty() {
                    return EngineReply::text(messages::ASK_EMAIL);
                }
                let guest = GuestDetails {
                    name: guest_name,
                    phone: guest_phone,
                    email: email.to_string(),
                };
                match BookingSummary::compute(selection, stay, guest) {
                    None => {
                        error!(chat_id = %session.chat_id(), "total price overflow");
                        session.reset();
                        EngineReply::text(messages::BOOKING_FAILED)
                    }
                    Some(summary) => {
                        let text = reply::render_summary(&summary);
                        session.set_state(SessionState::Confirming { summary });
                        EngineReply::with_options(text, reply::confirmation_options())
                    }
                }
            }
        }
    }

    /// Shows the hotel list and moves into `ChoosingHotel`.
    ///
    /// On an empty list or a listing failure the current state is left
    /// untouched, so a free-form session stays in assistant mode.
    async fn enter_hotel_selection(&self, session: &mut Session) -> EngineReply {
        let hotels = match self.booking_api.list_hotels().await {
            Ok(hotels) => hotels,
            Err(err) => {
                warn!(error = %err, "hotel listing failed");
                return EngineReply::text(messages::BOOKING_SERVICE_UNAVAILABLE);
            }
        };
        if hotels.is_empty() {
            return EngineReply::text(messages::NO_HOTELS);
        }
        session.set_state(SessionState::ChoosingHotel);
        EngineReply::with_options(messages::CHOOSE_HOTEL, reply::hotel_options(&hotels))
    }

    async fn hotel_chosen(&self, session: &mut Session, id: HotelId) -> EngineReply {
        // fresh lookup: the option row may be stale
        let hotels = match self.booking_api.list_hotels().await {
            Ok(hotels) => hotels,
            Err(err) => {
                warn!(error = %err, "hotel listing failed");
                return EngineReply::text(messages::BOOKING_SERVICE_UNAVAILABLE);
            }
        };
        let Some(hotel) = hotels.iter().find(|h| h.id == id) else {
            return EngineReply::text(messages::SELECTION_ERROR);
        };

        let filter = RoomFilter::any().for_hotel(id).available_only();
        let rooms = match self.booking_api.list_rooms(filter).await {
            Ok(rooms) => rooms,
            Err(err) => {
                warn!(error = %err, "room listing failed");
                return EngineReply::text(messages::BOOKING_SERVICE_UNAVAILABLE);
            }
        };
        if rooms.is_empty() {
            session.reset();
            return EngineReply::text(messages::NO_ROOMS);
        }

        session.set_state(SessionState::ChoosingRoom {
            hotel: HotelRef::from(hotel),
        });
        EngineReply::with_options(messages::CHOOSE_ROOM, reply::room_options(&rooms))
    }

    async fn room_chosen(
        &self,
        session: &mut Session,
        hotel: HotelRef,
        id: RoomId,
    ) -> EngineReply {
        let filter = RoomFilter::any().for_hotel(hotel.id).available_only();
        let rooms = match self.booking_api.list_rooms(filter).await {
            Ok(rooms) => rooms,
            Err(err) => {
                warn!(error = %err, "room listing failed");
                return EngineReply::text(messages::BOOKING_SERVICE_UNAVAILABLE);
            }
        };
        let Some(room) = rooms.iter().find(|r| r.id == id) else {
            return EngineReply::text(messages::SELECTION_ERROR);
        };

        session.set_state(SessionState::EnteringDateFrom {
            selection: RoomSelection {
                hotel,
                room: room.into(),
            },
        });
        EngineReply::text(messages::ENTER_DATE_FROM)
    }

    async fn submit_booking(
        &self,
        session: &mut Session,
        summary: BookingSummary,
    ) -> EngineReply {
        let booking = NewBooking::unconfirmed(
            summary.selection.hotel.id,
            summary.selection.room.id,
            summary.guest,
            summary.stay,
            summary.total_price,
        );

        match self.booking_api.create_booking(&booking).await {
            Ok(created) => {
                info!(
                    chat_id = %session.chat_id(),
                    booking_id = %created.id,
                    "booking created"
                );
                session.reset();
                EngineReply::text(reply::render_booking_created(created.id))
            }
            Err(err) => {
                error!(chat_id = %session.chat_id(), error = %err, "booking creation failed");
                session.reset();
                EngineReply::text(messages::BOOKING_FAILED)
            }
        }
    }

    /// Priority-ordered free-form dispatch: hotel mention, room
    /// reference, booking trigger, open question.
    async fn free_form(
        &self,
        session: &mut Session,
        hotel_context: Option<String>,
        text: &str,
    ) -> EngineReply {
        // a failed listing degrades to skipping the catalog-backed checks
        let hotels = self.booking_api.list_hotels().await.unwrap_or_default();

        if let Some(hotel) = intent::find_mentioned_hotel(&hotels, text) {
            let name = hotel.name.clone();
            session.set_state(SessionState::FreeForm {
                hotel_context: Some(name.clone()),
            });
            return EngineReply::text(reply::render_hotel_context_ack(&name));
        }

        if let Some(reference) = intent::extract_room_reference(text) {
            if let Some(context) = hotel_context.as_deref() {
                if let Some(hotel) = hotels.iter().find(|h| h.name == context) {
                    let filter = RoomFilter::any().for_hotel(hotel.id).available_only();
                    match self.booking_api.list_rooms(filter).await {
                        Ok(rooms) => {
                            if let Some(room) = intent::find_room(&rooms, reference) {
                                return EngineReply::text(reply::render_room_details(room));
                            }
                        }
                        Err(err) => {
                            warn!(error = %err, "room listing failed in free form");
                        }
                    }
                }
            }
        }

        if intent::matches_booking_trigger(text) {
            return self.enter_hotel_selection(session).await;
        }

        self.answer_open_question(hotel_context.as_deref(), text)
            .await
    }

    async fn answer_open_question(&self, hotel_context: Option<&str>, text: &str) -> EngineReply {
        let context = match self.knowledge.query(text, hotel_context).await {
            Ok(context) => context,
            Err(err) => {
                warn!(error = %err, "knowledge retrieval failed");
                String::new()
            }
        };

        let prompt = if context.is_empty() {
            format!("{ASSISTANT_SYSTEM_PROMPT}\n\nВопрос: {text}")
        } else {
            format!("{ASSISTANT_SYSTEM_PROMPT}\n\nКонтекст:\n{context}\n\nВопрос: {text}")
        };

        match self.assistant.ask(&prompt).await {
            Ok(answer) => EngineReply::text(answer),
            Err(err) => {
                warn!(error = %err, "assistant unavailable");
                EngineReply::text(messages::ASSISTANT_UNAVAILABLE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::Booking;
    use crate::domain::catalog::{Hotel, Room};
    use crate::domain::foundation::{BookingId, ChatId, Price};
    use crate::ports::{AssistantError, BookingApiError, RetrievalError};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockBookingApi {
        hotels: Vec<Hotel>,
        rooms: Vec<Room>,
        created: Mutex<Vec<NewBooking>>,
        fail_listing: bool,
        fail_create: bool,
    }

    impl MockBookingApi {
        fn new(hotels: Vec<Hotel>, rooms: Vec<Room>) -> Self {
            Self {
                hotels,
                rooms,
                created: Mutex::new(Vec::new()),
                fail_listing: false,
                fail_create: false,
            }
        }

        fn failing_create(hotels: Vec<Hotel>, rooms: Vec<Room>) -> Self {
            Self {
                fail_create: true,
                ..Self::new(hotels, rooms)
            }
        }

        fn failing_listing() -> Self {
            Self {
                fail_listing: true,
                ..Self::new(Vec::new(), Vec::new())
            }
        }

        fn created(&self) -> Vec<NewBooking> {
            self.created.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl BookingApi for MockBookingApi {
        async fn list_hotels(&self) -> Result<Vec<Hotel>, BookingApiError> {
            if self.fail_listing {
                return Err(BookingApiError::unavailable("down"));
            }
            Ok(self.hotels.clone())
        }

        async fn list_rooms(&self, filter: RoomFilter) -> Result<Vec<Room>, BookingApiError> {
            if self.fail_listing {
                return Err(BookingApiError::unavailable("down"));
            }
            Ok(self
                .rooms
                .iter()
                .filter(|r| filter.matches(r))
                .cloned()
                .collect())
        }

        async fn get_room(&self, id: RoomId) -> Result<Option<Room>, BookingApiError> {
            Ok(self.rooms.iter().find(|r| r.id == id).cloned())
        }

        async fn create_booking(&self, booking: &NewBooking) -> Result<Booking, BookingApiError> {
            if self.fail_create {
                return Err(BookingApiError::unavailable("insert failed"));
            }
            self.created.lock().unwrap().push(booking.clone());
            Ok(Booking {
                id: BookingId::new(17),
                hotel_id: booking.hotel_id,
                room_id: booking.room_id,
                guest_name: booking.guest_name.clone(),
                guest_phone: booking.guest_phone.clone(),
                guest_email: booking.guest_email.clone(),
                date_from: booking.date_from,
                date_to: booking.date_to,
                total_price: booking.total_price,
                is_confirmed: booking.is_confirmed,
            })
        }
    }

    struct MockAssistant {
        reply: Option<String>,
        prompts: Mutex<Vec<String>>,
    }

    impl MockAssistant {
        fn answering(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AssistantBridge for MockAssistant {
        async fn ask(&self, prompt: &str) -> Result<String, AssistantError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply
                .clone()
                .ok_or_else(|| AssistantError::request("simulated outage"))
        }
    }

    struct MockKnowledge {
        context: Result<String, ()>,
        queries: Mutex<Vec<(String, Option<String>)>>,
    }

    impl MockKnowledge {
        fn with_context(context: &str) -> Self {
            Self {
                context: Ok(context.to_string()),
                queries: Mutex::new(Vec::new()),
            }
        }

        fn empty() -> Self {
            Self::with_context("")
        }

        fn failing() -> Self {
            Self {
                context: Err(()),
                queries: Mutex::new(Vec::new()),
            }
        }

        fn queries(&self) -> Vec<(String, Option<String>)> {
            self.queries.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl KnowledgeSearch for MockKnowledge {
        async fn query(&self, text: &str, hotel: Option<&str>) -> Result<String, RetrievalError> {
            self.queries
                .lock()
                .unwrap()
                .push((text.to_string(), hotel.map(str::to_string)));
            self.context
                .clone()
                .map_err(|_| RetrievalError::request("simulated outage"))
        }
    }

    fn aurora() -> Hotel {
        Hotel {
            id: HotelId::new(1),
            name: "Aurora".to_string(),
            slug: "aurora".to_string(),
            address: String::new(),
            description: String::new(),
        }
    }

    fn standard_room() -> Room {
        Room {
            id: RoomId::new(5),
            hotel_id: HotelId::new(1),
            room_number: "101".to_string(),
            room_type: "Standard 1".to_string(),
            price_per_night: Price::from_major(2000),
            is_available: true,
        }
    }

    fn engine_with(api: MockBookingApi) -> (ConversationEngine, Arc<MockBookingApi>) {
        let api = Arc::new(api);
        let engine = ConversationEngine::new(
            api.clone(),
            Arc::new(MockAssistant::answering("ок")),
            Arc::new(MockKnowledge::empty()),
        );
        (engine, api)
    }

    fn session() -> Session {
        Session::new(ChatId::new("42"))
    }

    async fn drive_to_confirmation(
        engine: &ConversationEngine,
        session: &mut Session,
    ) -> EngineReply {
        engine
            .handle(session, InboundEvent::Command(Command::Hotels))
            .await;
        engine
            .handle(
                session,
                InboundEvent::Selection(Selection::Hotel(HotelId::new(1))),
            )
            .await;
        engine
            .handle(
                session,
                InboundEvent::Selection(Selection::Room(RoomId::new(5))),
            )
            .await;
        engine
            .handle(session, InboundEvent::Text("01.06.2025".to_string()))
            .await;
        engine
            .handle(session, InboundEvent::Text("03.06.2025".to_string()))
            .await;
        engine
            .handle(session, InboundEvent::Text("Иван Петров".to_string()))
            .await;
        engine
            .handle(session, InboundEvent::Text("+79990001122".to_string()))
            .await;
        engine
            .handle(session, InboundEvent::Text("ivan@example.com".to_string()))
            .await
    }

    #[tokio::test]
    async fn hotels_command_lists_hotels_as_options() {
        let (engine, _) = engine_with(MockBookingApi::new(vec![aurora()], vec![standard_room()]));
        let mut session = session();

        let reply = engine
            .handle(&mut session, InboundEvent::Command(Command::Hotels))
            .await;

        assert_eq!(reply.text, messages::CHOOSE_HOTEL);
        assert_eq!(reply.options.len(), 1);
        assert_eq!(reply.options[0].data, "hotel:1");
        assert_eq!(session.state(), &SessionState::ChoosingHotel);
    }

    #[tokio::test]
    async fn empty_hotel_list_does_not_enter_flow() {
        let (engine, _) = engine_with(MockBookingApi::new(Vec::new(), Vec::new()));
        let mut session = session();

        let reply = engine
            .handle(&mut session, InboundEvent::Command(Command::Hotels))
            .await;

        assert_eq!(reply.text, messages::NO_HOTELS);
        assert!(session.is_idle());
    }

    #[tokio::test]
    async fn full_flow_creates_booking_with_exact_fields() {
        let (engine, api) =
            engine_with(MockBookingApi::new(vec![aurora()], vec![standard_room()]));
        let mut session = session();

        let summary = drive_to_confirmation(&engine, &mut session).await;
        assert!(summary.text.contains("2 ночей"));
        assert!(summary.text.contains("4000.00 ₽"));
        assert!(matches!(session.state(), SessionState::Confirming { .. }));

        let reply = engine
            .handle(
                &mut session,
                InboundEvent::Selection(Selection::ConfirmBooking),
            )
            .await;

        assert!(reply.text.contains("17"));
        assert!(session.is_idle());

        let created = api.created();
        assert_eq!(created.len(), 1);
        let booking = &created[0];
        assert_eq!(booking.hotel_id, HotelId::new(1));
        assert_eq!(booking.room_id, RoomId::new(5));
        assert_eq!(booking.guest_name, "Иван Петров");
        assert_eq!(booking.guest_phone, "+79990001122");
        assert_eq!(booking.guest_email, "ivan@example.com");
        assert_eq!(booking.date_from.to_string(), "2025-06-01");
        assert_eq!(booking.date_to.to_string(), "2025-06-03");
        assert_eq!(booking.total_price, Price::from_major(4000));
        assert!(!booking.is_confirmed);
    }

    #[tokio::test]
    async fn stale_hotel_selection_keeps_state() {
        let (engine, _) = engine_with(MockBookingApi::new(vec![aurora()], vec![standard_room()]));
        let mut session = session();
        engine
            .handle(&mut session, InboundEvent::Command(Command::Hotels))
            .await;

        let reply = engine
            .handle(
                &mut session,
                InboundEvent::Selection(Selection::Hotel(HotelId::new(99))),
            )
            .await;

        assert_eq!(reply.text, messages::SELECTION_ERROR);
        assert_eq!(session.state(), &SessionState::ChoosingHotel);
    }

    #[tokio::test]
    async fn stale_room_selection_keeps_state() {
        let (engine, _) = engine_with(MockBookingApi::new(vec![aurora()], vec![standard_room()]));
        let mut session = session();
        engine
            .handle(&mut session, InboundEvent::Command(Command::Hotels))
            .await;
        engine
            .handle(
                &mut session,
                InboundEvent::Selection(Selection::Hotel(HotelId::new(1))),
            )
            .await;

        let reply = engine
            .handle(
                &mut session,
                InboundEvent::Selection(Selection::Room(RoomId::new(99))),
            )
            .await;

        assert_eq!(reply.text, messages::SELECTION_ERROR);
        assert!(matches!(session.state(), SessionState::ChoosingRoom { .. }));
    }

    #[tokio::test]
    async fn no_available_rooms_resets_session() {
        let mut unavailable = standard_room();
        unavailable.is_available = false;
        let (engine, _) = engine_with(MockBookingApi::new(vec![aurora()], vec![unavailable]));
        let mut session = session();
        engine
            .handle(&mut session, InboundEvent::Command(Command::Hotels))
            .await;

        let reply = engine
            .handle(
                &mut session,
                InboundEvent::Selection(Selection::Hotel(HotelId::new(1))),
            )
            .await;

        assert_eq!(reply.text, messages::NO_ROOMS);
        assert!(session.is_idle());
    }

    #[tokio::test]
    async fn invalid_date_reprompts_without_transition() {
        let (engine, _) = engine_with(MockBookingApi::new(vec![aurora()], vec![standard_room()]));
        let mut session = session();
        engine
            .handle(&mut session, InboundEvent::Command(Command::Hotels))
            .await;
        engine
            .handle(
                &mut session,
                InboundEvent::Selection(Selection::Hotel(HotelId::new(1))),
            )
            .await;
        engine
            .handle(
                &mut session,
                InboundEvent::Selection(Selection::Room(RoomId::new(5))),
            )
            .await;

        for bad in ["2025-06-01", "31.02.2025", "завтра"] {
            let reply = engine
                .handle(&mut session, InboundEvent::Text(bad.to_string()))
                .await;
            assert_eq!(reply.text, messages::BAD_DATE, "input {:?}", bad);
            assert!(
                matches!(session.state(), SessionState::EnteringDateFrom { .. }),
                "state advanced on {:?}",
                bad
            );
        }
    }

    #[tokio::test]
    async fn checkout_must_be_after_checkin() {
        let (engine, _) = engine_with(MockBookingApi::new(vec![aurora()], vec![standard_room()]));
        let mut session = session();
        engine
            .handle(&mut session, InboundEvent::Command(Command::Hotels))
            .await;
        engine
            .handle(
                &mut session,
                InboundEvent::Selection(Selection::Hotel(HotelId::new(1))),
            )
            .await;
        engine
            .handle(
                &mut session,
                InboundEvent::Selection(Selection::Room(RoomId::new(5))),
            )
            .await;
        engine
            .handle(&mut session, InboundEvent::Text("03.06.2025".to_string()))
            .await;

        for not_later in ["03.06.2025", "01.06.2025"] {
            let reply = engine
                .handle(&mut session, InboundEvent::Text(not_later.to_string()))
                .await;
            assert_eq!(reply.text, messages::CHECKOUT_NOT_LATER);
            assert!(matches!(session.state(), SessionState::EnteringDateTo { .. }));
        }
    }

    #[tokio::test]
    async fn empty_guest_name_reprompts() {
        let (engine, _) = engine_with(MockBookingApi::new(vec![aurora()], vec![standard_room()]));
        let mut session = session();
        engine
            .handle(&mut session, InboundEvent::Command(Command::Hotels))
            .await;
        engine
            .handle(
                &mut session,
                InboundEvent::Selection(Selection::Hotel(HotelId::new(1))),
            )
            .await;
        engine
            .handle(
                &mut session,
                InboundEvent::Selection(Selection::Room(RoomId::new(5))),
            )
            .await;
        engine
            .handle(&mut session, InboundEvent::Text("01.06.2025".to_string()))
            .await;
        engine
            .handle(&mut session, InboundEvent::Text("03.06.2025".to_string()))
            .await;

        let reply = engine
            .handle(&mut session, InboundEvent::Text("   ".to_string()))
            .await;
        assert_eq!(reply.text, messages::ASK_GUEST_NAME);
        assert!(matches!(
            session.state(),
            SessionState::EnteringGuestName { .. }
        ));
    }

    #[tokio::test]
    async fn cancel_discards_session() {
        let (engine, api) =
            engine_with(MockBookingApi::new(vec![aurora()], vec![standard_room()]));
        let mut session = session();
        drive_to_confirmation(&engine, &mut session).await;

        let reply = engine
            .handle(
                &mut session,
                InboundEvent::Selection(Selection::CancelBooking),
            )
            .await;

        assert_eq!(reply.text, messages::BOOKING_CANCELLED);
        assert!(session.is_idle());
        assert!(api.created().is_empty());
    }

    #[tokio::test]
    async fn failed_booking_creation_discards_session() {
        let (engine, api) = engine_with(MockBookingApi::failing_create(
            vec![aurora()],
            vec![standard_room()],
        ));
        let mut session = session();
        drive_to_confirmation(&engine, &mut session).await;

        let reply = engine
            .handle(
                &mut session,
                InboundEvent::Selection(Selection::ConfirmBooking),
            )
            .await;

        assert_eq!(reply.text, messages::BOOKING_FAILED);
        assert!(session.is_idle());
        assert!(api.created().is_empty());
    }

    #[tokio::test]
    async fn listing_outage_degrades_without_state_change() {
        let (engine, _) = engine_with(MockBookingApi::failing_listing());
        let mut session = session();

        let reply = engine
            .handle(&mut session, InboundEvent::Command(Command::Hotels))
            .await;

        assert_eq!(reply.text, messages::BOOKING_SERVICE_UNAVAILABLE);
        assert!(session.is_idle());
    }

    #[tokio::test]
    async fn booking_trigger_in_idle_enters_hotel_selection() {
        let (engine, _) = engine_with(MockBookingApi::new(vec![aurora()], vec![standard_room()]));
        let mut session = session();

        let reply = engine
            .handle(
                &mut session,
                InboundEvent::Text("забронируй мне что-нибудь".to_string()),
            )
            .await;

        assert_eq!(reply.text, messages::CHOOSE_HOTEL);
        assert_eq!(session.state(), &SessionState::ChoosingHotel);
    }

    #[tokio::test]
    async fn free_form_hotel_mention_sets_context() {
        let (engine, _) = engine_with(MockBookingApi::new(vec![aurora()], vec![standard_room()]));
        let mut session = session();
        engine
            .handle(&mut session, InboundEvent::Command(Command::Assistant))
            .await;

        let reply = engine
            .handle(&mut session, InboundEvent::Text("Aurora".to_string()))
            .await;

        assert!(reply.text.contains("Aurora"));
        assert_eq!(
            session.state(),
            &SessionState::FreeForm {
                hotel_context: Some("Aurora".to_string())
            }
        );
    }

    #[tokio::test]
    async fn free_form_room_reference_renders_details() {
        let (engine, _) = engine_with(MockBookingApi::new(vec![aurora()], vec![standard_room()]));
        let mut session = session();
        engine
            .handle(&mut session, InboundEvent::Command(Command::Assistant))
            .await;
        engine
            .handle(&mut session, InboundEvent::Text("Aurora".to_string()))
            .await;

        let reply = engine
            .handle(&mut session, InboundEvent::Text("room 1".to_string()))
            .await;

        assert!(reply.text.contains("101 — Standard 1"));
        assert!(reply.text.contains("2000.00"));
        // the hint does not change state
        assert_eq!(
            session.state(),
            &SessionState::FreeForm {
                hotel_context: Some("Aurora".to_string())
            }
        );
    }

    #[tokio::test]
    async fn free_form_trigger_restarts_booking_flow() {
        let (engine, _) = engine_with(MockBookingApi::new(vec![aurora()], vec![standard_room()]));
        let mut session = session();
        engine
            .handle(&mut session, InboundEvent::Command(Command::Assistant))
            .await;

        let reply = engine
            .handle(&mut session, InboundEvent::Text("забронируй".to_string()))
            .await;

        assert_eq!(reply.text, messages::CHOOSE_HOTEL);
        assert_eq!(session.state(), &SessionState::ChoosingHotel);
    }

    #[tokio::test]
    async fn open_question_passes_context_scope_to_retrieval() {
        let api = Arc::new(MockBookingApi::new(vec![aurora()], vec![standard_room()]));
        let assistant = Arc::new(MockAssistant::answering("Завтрак с 8 утра."));
        let knowledge = Arc::new(MockKnowledge::with_context("Завтрак входит в стоимость."));
        let engine = ConversationEngine::new(api, assistant.clone(), knowledge.clone());
        let mut session = session();
        engine
            .handle(&mut session, InboundEvent::Command(Command::Assistant))
            .await;
        engine
            .handle(&mut session, InboundEvent::Text("Aurora".to_string()))
            .await;

        let reply = engine
            .handle(
                &mut session,
                InboundEvent::Text("когда завтрак?".to_string()),
            )
            .await;

        assert_eq!(reply.text, "Завтрак с 8 утра.");
        let queries = knowledge.queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].1.as_deref(), Some("Aurora"));

        let prompts = assistant.prompts();
        assert!(prompts[0].contains("Завтрак входит в стоимость."));
        assert!(prompts[0].contains("когда завтрак?"));
    }

    #[tokio::test]
    async fn assistant_outage_degrades_to_fixed_reply() {
        let api = Arc::new(MockBookingApi::new(vec![aurora()], vec![standard_room()]));
        let engine = ConversationEngine::new(
            api,
            Arc::new(MockAssistant::failing()),
            Arc::new(MockKnowledge::failing()),
        );
        let mut session = session();
        engine
            .handle(&mut session, InboundEvent::Command(Command::Assistant))
            .await;

        let reply = engine
            .handle(
                &mut session,
                InboundEvent::Text("когда завтрак?".to_string()),
            )
            .await;

        assert_eq!(reply.text, messages::ASSISTANT_UNAVAILABLE);
        assert!(matches!(session.state(), SessionState::FreeForm { .. }));
    }

    #[tokio::test]
    async fn selection_outside_expected_state_is_rejected() {
        let (engine, _) = engine_with(MockBookingApi::new(vec![aurora()], vec![standard_room()]));
        let mut session = session();

        let reply = engine
            .handle(
                &mut session,
                InboundEvent::Selection(Selection::ConfirmBooking),
            )
            .await;

        assert_eq!(reply.text, messages::SELECTION_ERROR);
        assert!(session.is_idle());
    }
}
