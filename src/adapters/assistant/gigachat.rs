//! GigaChat assistant bridge.
//!
//! Two-step flow per question: exchange the authorization key for a
//! short-lived access token (client-credentials grant with a `RqUID`
//! request id), then call the chat-completions endpoint. The token is
//! deliberately not cached between questions.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::ports::{AssistantBridge, AssistantError};

const TOKEN_SCOPE_BODY: &str = "scope=GIGACHAT_API_PERS&grant_type=client_credentials";

/// Configuration for the GigaChat bridge.
#[derive(Debug, Clone)]
pub struct GigaChatConfig {
    /// Base64 authorization key for the token exchange.
    auth_key: Secret<String>,
    /// OAuth endpoint issuing access tokens.
    pub auth_url: String,
    /// Chat-completions endpoint.
    pub api_url: String,
    /// Model name.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Request timeout.
    pub timeout: Duration,
}

impl GigaChatConfig {
    /// Creates a configuration with the default model and temperature.
    pub fn new(
        auth_key: impl Into<String>,
        auth_url: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            auth_key: Secret::new(auth_key.into()),
            auth_url: auth_url.into(),
            api_url: api_url.into(),
            model: "GigaChat".to_string(),
            temperature: 0.5,
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn auth_key(&self) -> &str {
        self.auth_key.expose_secret()
    }
}

/// Assistant bridge talking to the GigaChat API.
pub struct GigaChatBridge {
    config: GigaChatConfig,
    client: Client,
}

impl GigaChatBridge {
    /// Creates a new bridge.
    pub fn new(config: GigaChatConfig) -> Result<Self, AssistantError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AssistantError::request(e.to_string()))?;
        Ok(Self { config, client })
    }

    async fn fetch_token(&self) -> Result<String, AssistantError> {
        let response = self
            .client
            .post(&self.config.auth_url)
            .header("Authorization", format!("Basic {}", self.config.auth_key()))
            .header("RqUID", Uuid::new_v4().to_string())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "application/json")
            .body(TOKEN_SCOPE_BODY)
            .send()
            .await
            .map_err(|e| AssistantError::token_exchange(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssistantError::token_exchange(format!("{status}: {body}")));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::token_exchange(e.to_string()))?;
        Ok(token.access_token)
    }
}

#[async_trait]
impl AssistantBridge for GigaChatBridge {
    async fn ask(&self, prompt: &str) -> Result<String, AssistantError> {
        let token = self.fetch_token().await?;

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(token)
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistantError::request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssistantError::request(format!("{status}: {body}")));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::invalid_response(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AssistantError::invalid_response("no choices in response"))
    }
}

// ----- GigaChat API types -----

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}
