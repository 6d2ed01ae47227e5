//! Hotel read model.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::HotelId;

/// A hotel as served by the booking backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
}

impl Hotel {
    /// Case-insensitive check whether `text` mentions this hotel by name.
    pub fn is_mentioned_in(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.name.to_lowercase())
    }
}
