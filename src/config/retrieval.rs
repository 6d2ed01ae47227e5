//! Knowledge retrieval configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Retrieval configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalConfig {
    /// Base URL of the vector-search service
    pub base_url: String,

    /// Collection holding the hotel knowledge base
    #[serde(default = "default_collection")]
    pub collection: String,

    /// How many fragments to retrieve per query
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl RetrievalConfig {
    /// Validate retrieval configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidRetrievalUrl);
        }
        if self.top_k == 0 || self.top_k > 20 {
            return Err(ValidationError::InvalidRetrievalDepth);
        }
        Ok(())
    }
}

fn default_collection() -> String {
    "hotel_knowledge".to_string()
}

fn default_top_k() -> usize {
    3
}

fn default_timeout_secs() -> u64 {
    30
}
