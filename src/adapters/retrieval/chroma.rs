//! Chroma knowledge-search adapter.
//!
//! Thin client for a Chroma-style vector-search service. Embedding and
//! indexing happen on the service side; this adapter only submits the
//! query text with an optional hotel metadata filter and joins the
//! returned fragments.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

use crate::ports::{KnowledgeSearch, RetrievalError};

/// Configuration for the Chroma knowledge search.
#[derive(Debug, Clone)]
pub struct ChromaConfig {
    /// Base URL of the Chroma server.
    pub base_url: String,
    /// Collection holding the hotel knowledge base.
    pub collection: String,
    /// How many fragments to retrieve.
    pub top_k: usize,
    /// Request timeout.
    pub timeout: Duration,
}

impl ChromaConfig {
    /// Creates a configuration with the default collection and depth.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            collection: "hotel_knowledge".to_string(),
            top_k: 3,
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the collection name.
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// Sets the retrieval depth.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Knowledge search backed by a Chroma server.
pub struct ChromaKnowledgeSearch {
    config: ChromaConfig,
    client: Client,
}

impl ChromaKnowledgeSearch {
    /// Creates a new client.
    pub fn new(config: ChromaConfig) -> Result<Self, RetrievalError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RetrievalError::request(e.to_string()))?;
        Ok(Self { config, client })
    }

    fn query_url(&self) -> String {
        format!(
            "{}/api/v1/collections/{}/query",
            self.config.base_url, self.config.collection
        )
    }
}

#[async_trait]
impl KnowledgeSearch for ChromaKnowledgeSearch {
    async fn query(&self, text: &str, hotel: Option<&str>) -> Result<String, RetrievalError> {
        let request = QueryRequest {
            query_texts: vec![text.to_string()],
            n_results: self.config.top_k,
            r#where: hotel.map(|h| json!({ "hotel": h })),
        };

        let response = self
            .client
            .post(self.query_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| RetrievalError::request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RetrievalError::request(format!("{status}: {body}")));
        }

        let result: QueryResponse = response
            .json()
            .await
            .map_err(|e| RetrievalError::invalid_response(e.to_string()))?;

        Ok(join_documents(result))
    }
}

fn join_documents(result: QueryResponse) -> String {
    result
        .documents
        .and_then(|groups| groups.into_iter().next())
        .map(|fragments| fragments.join("\n"))
        .unwrap_or_default()
}

// ----- Chroma API types -----

#[derive(Debug, Serialize)]
struct QueryRequest {
    query_texts: Vec<String>,
    n_results: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    r#where: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    documents: Option<Vec<Vec<String>>>,
}
