//! In-memory session store.
//!
//! One record per chat identity, process lifetime. Backs tests and
//! single-node deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::Session;
use crate::domain::foundation::ChatId;
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory session storage.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<ChatId, Session>>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Removes every stored session.
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, chat_id: &ChatId) -> Result<Option<Session>, SessionStoreError> {
        Ok(self.sessions.read().await.get(chat_id).cloned())
    }

    async fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        self.sessions
            .write()
            .await
            .insert(session.chat_id().clone(), session.clone());
        Ok(())
    }

    async fn delete(&self, chat_id: &ChatId) -> Result<(), SessionStoreError> {
        self.sessions.write().await.remove(chat_id);
        Ok(())
    }
}
