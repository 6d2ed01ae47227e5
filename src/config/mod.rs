//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `CONCIERGE`
//! prefix; nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use hotel_concierge::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod assistant;
mod booking_api;
mod database;
mod error;
mod retrieval;
mod server;

pub use assistant::AssistantConfig;
pub use booking_api::{BookingApiConfig, BookingApiMode};
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use retrieval::RetrievalConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Booking API configuration (local or remote backend)
    #[serde(default)]
    pub booking_api: BookingApiConfig,

    /// Assistant configuration (GigaChat)
    pub assistant: AssistantConfig,

    /// Knowledge retrieval configuration (vector search)
    pub retrieval: RetrievalConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present (for development), then reads
    /// environment variables with the `CONCIERGE` prefix:
    ///
    /// - `CONCIERGE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CONCIERGE__DATABASE__URL=...` -> `database.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or
    /// values cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CONCIERGE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.booking_api.validate()?;
        self.assistant.validate()?;
        self.retrieval.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
