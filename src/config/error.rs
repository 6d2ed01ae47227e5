//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("Booking API base URL must be an HTTP(S) URL")]
    InvalidBookingApiUrl,

    #[error("Remote booking API mode requires a base URL")]
    MissingBookingApiUrl,

    #[error("Assistant URLs must be HTTP(S) URLs")]
    InvalidAssistantUrl,

    #[error("Assistant authorization key is empty")]
    MissingAssistantKey,

    #[error("Retrieval base URL must be an HTTP(S) URL")]
    InvalidRetrievalUrl,

    #[error("Retrieval depth must be between 1 and 20")]
    InvalidRetrievalDepth,
}
