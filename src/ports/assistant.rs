//! Assistant Bridge Port - free-text question answering.
//!
//! The engine composes the full prompt (system instruction, retrieved
//! context, guest question) and receives a single reply string. Errors
//! never abort a session: the engine degrades to a fixed fallback.

use async_trait::async_trait;

/// Assistant bridge errors.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    /// The credential exchange with the provider failed.
    #[error("token exchange failed: {0}")]
    TokenExchangeFailed(String),

    /// The completion request failed.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The provider answered with something unparseable.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl AssistantError {
    /// Creates a token-exchange error.
    pub fn token_exchange(message: impl Into<String>) -> Self {
        Self::TokenExchangeFailed(message.into())
    }

    /// Creates a request error.
    pub fn request(message: impl Into<String>) -> Self {
        Self::RequestFailed(message.into())
    }

    /// Creates an invalid-response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }
}

/// Port for the external language-model endpoint.
#[async_trait]
pub trait AssistantBridge: Send + Sync {
    /// Sends a composed prompt and returns the reply text.
    async fn ask(&self, prompt: &str) -> Result<String, AssistantError>;
}
