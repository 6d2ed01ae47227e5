//! Knowledge Search Port - vector-similarity retrieval.
//!
//! Returns the few best-matching knowledge-base fragments for a guest
//! question, optionally scoped to one hotel. Indexing and embedding are
//! the collaborator's concern.

use async_trait::async_trait;

/// Retrieval errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    /// The query request failed.
    #[error("retrieval request failed: {0}")]
    RequestFailed(String),

    /// The collaborator answered with something unparseable.
    #[error("invalid retrieval response: {0}")]
    InvalidResponse(String),
}

impl RetrievalError {
    /// Creates a request error.
    pub fn request(message: impl Into<String>) -> Self {
        Self::RequestFailed(message.into())
    }

    /// Creates an invalid-response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }
}

/// Port for the vector-search collaborator.
#[async_trait]
pub trait KnowledgeSearch: Send + Sync {
    /// Returns the best-matching fragments joined with newlines, or an
    /// empty string when nothing matches. `hotel` scopes the search by
    /// metadata when present.
    async fn query(&self, text: &str, hotel: Option<&str>) -> Result<String, RetrievalError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_messages() {
        assert!(RetrievalError::request("503")
            .to_string()
            .contains("retrieval request failed"));
    }
}
