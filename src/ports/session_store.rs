//! Session Store Port - persistence for conversation sessions.
//!
//! One record per chat identity. The in-memory adapter backs tests and
//! single-node deployments; a durable adapter can be slotted in without
//! touching the engine.

use async_trait::async_trait;

use crate::domain::conversation::Session;
use crate::domain::foundation::ChatId;

/// Session store errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session store backend error: {0}")]
    Backend(String),
}

impl SessionStoreError {
    /// Creates a backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }
}

/// Port for persisting and loading sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads the session for a chat identity, if one exists.
    async fn load(&self, chat_id: &ChatId) -> Result<Option<Session>, SessionStoreError>;

    /// Saves (inserts or replaces) a session.
    async fn save(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Deletes the session for a chat identity. Deleting a missing
    /// session is not an error.
    async fn delete(&self, chat_id: &ChatId) -> Result<(), SessionStoreError>;
}
