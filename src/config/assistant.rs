//! Assistant (GigaChat) configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// Assistant configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Base64 authorization key for the token exchange
    pub auth_key: Secret<String>,

    /// OAuth endpoint issuing access tokens
    pub auth_url: String,

    /// Chat-completions endpoint
    pub api_url: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl AssistantConfig {
    /// Validate assistant configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.auth_key.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingAssistantKey);
        }
        for url in [&self.auth_url, &self.api_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidAssistantUrl);
            }
        }
        Ok(())
    }
}

fn default_model() -> String {
    "GigaChat".to_string()
}

fn default_temperature() -> f32 {
    0.5
}

fn default_timeout_secs() -> u64 {
    60
}
