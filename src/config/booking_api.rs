//! Booking API configuration
//!
//! The concierge reaches the booking backend either in-process
//! (`local`, the default) or over HTTP (`remote`).

use serde::Deserialize;

use super::error::ValidationError;

/// Booking API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BookingApiConfig {
    /// Access mode: local repositories or a remote HTTP backend
    #[serde(default)]
    pub mode: BookingApiMode,

    /// Base URL of the remote backend, e.g. `http://127.0.0.1:8000/api`
    pub base_url: Option<String>,

    /// Request timeout in seconds (remote mode)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// How the concierge reaches the booking backend
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingApiMode {
    #[default]
    Local,
    Remote,
}

impl BookingApiConfig {
    /// Validate booking API configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.mode == BookingApiMode::Remote {
            match &self.base_url {
                None => return Err(ValidationError::MissingBookingApiUrl),
                Some(url) if !url.starts_with("http://") && !url.starts_with("https://") => {
                    return Err(ValidationError::InvalidBookingApiUrl)
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

impl Default for BookingApiConfig {
    fn default() -> Self {
        Self {
            mode: BookingApiMode::default(),
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}
