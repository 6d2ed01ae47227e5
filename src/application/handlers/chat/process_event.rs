//! ProcessChatEventHandler - runs the conversation engine for one
//! inbound event.
//!
//! Loads or creates the session, delegates to the engine, then persists
//! the result. A session whose flow returned to `Idle` carries no
//! accumulated fields, so its record is deleted — the store only ever
//! holds live flows.

use std::sync::Arc;

use crate::domain::conversation::{ConversationEngine, EngineReply, InboundEvent, Session};
use crate::domain::foundation::ChatId;
use crate::ports::{SessionStore, SessionStoreError};

/// Handler wiring the session store to the conversation engine.
pub struct ProcessChatEventHandler {
    sessions: Arc<dyn SessionStore>,
    engine: Arc<ConversationEngine>,
}

impl ProcessChatEventHandler {
    pub fn new(sessions: Arc<dyn SessionStore>, engine: Arc<ConversationEngine>) -> Self {
        Self { sessions, engine }
    }

    pub async fn handle(
        &self,
        chat_id: ChatId,
        event: InboundEvent,
    ) -> Result<EngineReply, SessionStoreError> {
        let mut session = self
            .sessions
            .load(&chat_id)
            .await?
            .unwrap_or_else(|| Session::new(chat_id.clone()));

        let reply = self.engine.handle(&mut session, event).await;

        if session.is_idle() {
            self.sessions.delete(&chat_id).await?;
        } else {
            self.sessions.save(&session).await?;
        }

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{
        InMemoryBookingRepository, InMemoryCatalog, InMemorySessionStore,
    };
    use crate::adapters::booking_api::LocalBookingApi;
    use crate::domain::catalog::{Hotel, Room};
    use crate::domain::conversation::{Command, Selection};
    use crate::domain::foundation::{HotelId, Price, RoomId};
    use crate::ports::{AssistantBridge, AssistantError, KnowledgeSearch, RetrievalError};
    use async_trait::async_trait;

    struct SilentAssistant;

    #[async_trait]
    impl AssistantBridge for SilentAssistant {
        async fn ask(&self, _prompt: &str) -> Result<String, AssistantError> {
            Ok("ок".to_string())
        }
    }

    struct EmptyKnowledge;

    #[async_trait]
    impl KnowledgeSearch for EmptyKnowledge {
        async fn query(&self, _text: &str, _hotel: Option<&str>) -> Result<String, RetrievalError> {
            Ok(String::new())
        }
    }

    fn handler_with_store() -> (ProcessChatEventHandler, Arc<InMemorySessionStore>) {
        let catalog = Arc::new(InMemoryCatalog::with_data(
            vec![Hotel {
                id: HotelId::new(1),
                name: "Aurora".to_string(),
                slug: "aurora".to_string(),
                address: String::new(),
                description: String::new(),
            }],
            vec![Room {
                id: RoomId::new(5),
                hotel_id: HotelId::new(1),
                room_number: "101".to_string(),
                room_type: "Standard".to_string(),
                price_per_night: Price::from_major(2000),
                is_available: true,
            }],
        ));
        let booking_api = Arc::new(LocalBookingApi::new(
            catalog.clone(),
            catalog,
            Arc::new(InMemoryBookingRepository::new()),
        ));
        let engine = Arc::new(ConversationEngine::new(
            booking_api,
            Arc::new(SilentAssistant),
            Arc::new(EmptyKnowledge),
        ));
        let store = Arc::new(InMemorySessionStore::new());
        (ProcessChatEventHandler::new(store.clone(), engine), store)
    }

    #[tokio::test]
    async fn live_flow_is_persisted() {
        let (handler, store) = handler_with_store();
        let chat = ChatId::new("42");

        handler
            .handle(chat.clone(), InboundEvent::Command(Command::Hotels))
            .await
            .unwrap();

        assert_eq!(store.count().await, 1);
        let session = store.load(&chat).await.unwrap().unwrap();
        assert!(!session.is_idle());
    }

    #[tokio::test]
    async fn idle_session_is_not_stored() {
        let (handler, store) = handler_with_store();

        handler
            .handle(ChatId::new("42"), InboundEvent::Command(Command::Start))
            .await
            .unwrap();

        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn reset_removes_the_record() {
        let (handler, store) = handler_with_store();
        let chat = ChatId::new("42");

        handler
            .handle(chat.clone(), InboundEvent::Command(Command::Hotels))
            .await
            .unwrap();
        handler
            .handle(
                chat.clone(),
                InboundEvent::Selection(Selection::Hotel(HotelId::new(1))),
            )
            .await
            .unwrap();
        assert_eq!(store.count().await, 1);

        // a selection outside the expected state leaves the flow alive
        handler
            .handle(
                chat.clone(),
                InboundEvent::Selection(Selection::CancelBooking),
            )
            .await
            .unwrap();
        assert_eq!(store.count().await, 1);

        handler
            .handle(chat.clone(), InboundEvent::Command(Command::Start))
            .await
            .unwrap();
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn distinct_chats_progress_independently() {
        let (handler, store) = handler_with_store();

        handler
            .handle(ChatId::new("1"), InboundEvent::Command(Command::Hotels))
            .await
            .unwrap();
        handler
            .handle(ChatId::new("2"), InboundEvent::Command(Command::Assistant))
            .await
            .unwrap();

        assert_eq!(store.count().await, 2);
    }
}
