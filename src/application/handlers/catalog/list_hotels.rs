//! ListHotelsHandler - query handler for the hotel list.

use std::sync::Arc;

use crate::domain::catalog::Hotel;
use crate::domain::foundation::RepositoryError;
use crate::ports::HotelRepository;

/// Handler returning every hotel.
pub struct ListHotelsHandler {
    hotels: Arc<dyn HotelRepository>,
}

impl ListHotelsHandler {
    pub fn new(hotels: Arc<dyn HotelRepository>) -> Self {
        Self { hotels }
    }

    pub async fn handle(&self) -> Result<Vec<Hotel>, RepositoryError> {
        self.hotels.list().await
    }
}
