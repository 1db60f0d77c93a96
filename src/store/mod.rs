pub mod memory;

use async_trait::async_trait;

use crate::models::{Booking, BookingStatus, Service};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("booking not found: {0}")]
    NotFound(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Read-only provider of the full current service catalog. No pagination.
#[async_trait]
pub trait ServiceCatalog: Send + Sync {
    async fn list(&self) -> Result<Vec<Service>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Service>, StoreError>;
}

/// The booking sink and source. Bookings are appended and status-updated,
/// never deleted. Implementations own id-unknown handling (`NotFound`); a
/// failing transport maps to `Unavailable`.
#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Booking>, StoreError>;

    async fn append(&self, booking: Booking) -> Result<Booking, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, StoreError>;

    async fn update_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> Result<Booking, StoreError>;
}
