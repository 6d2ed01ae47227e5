//! Per-chat conversation session record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ChatId;

use super::state::SessionState;

/// One conversation session per chat identity.
///
/// Created on the first inbound event for an identity; discarded (by the
/// surrounding handler) whenever the flow returns to `Idle`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    chat_id: ChatId,
    state: SessionState,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Session {
    /// Starts a fresh session in `Idle`.
    pub fn new(chat_id: ChatId) -> Self {
        let now = Utc::now();
        Self {
            chat_id,
            state: SessionState::Idle,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn chat_id(&self) -> &ChatId {
        &self.chat_id
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves to a new state.
    pub fn set_state(&mut self, state: SessionState) {
        self.state = state;
        self.updated_at = Utc::now();
    }

    /// Discards all accumulated booking fields and returns to `Idle`.
    pub fn reset(&mut self) {
        self.set_state(SessionState::Idle);
    }

    /// True when no flow is in progress.
    pub fn is_idle(&self) -> bool {
        self.state.is_idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_idle() {
        let session = Session::new(ChatId::new("42"));
        assert!(session.is_idle());
        assert_eq!(session.chat_id().as_str(), "42");
    }

    #[test]
    fn set_state_updates_timestamp() {
        let mut session = Session::new(ChatId::new("42"));
        let before = session.updated_at();
        session.set_state(SessionState::ChoosingHotel);
        assert!(!session.is_idle());
        assert!(session.updated_at() >= before);
    }

    #[test]
    fn reset_discards_accumulated_state() {
        let mut session = Session::new(ChatId::new("42"));
        session.set_state(SessionState::ChoosingHotel);
        session.reset();
        assert!(session.is_idle());
    }
}
