use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{Booking, BookingStatus, Service};

use super::{BookingStore, ServiceCatalog, StoreError};

/// In-memory backing store: a fixed service catalog plus a guarded booking
/// list. Everything resets on process restart.
pub struct MemoryStore {
    services: Vec<Service>,
    bookings: Mutex<Vec<Booking>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            services: seed_services(),
            bookings: Mutex::new(Vec::new()),
        }
    }

    /// A store pre-populated with a handful of demo bookings, for dev runs
    /// where an empty bookings page would be useless.
    pub fn with_demo_bookings(user_id: &str) -> Self {
        let store = Self::new();
        *store.bookings.lock().unwrap() = seed_bookings(user_id);
        store
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServiceCatalog for MemoryStore {
    async fn list(&self) -> Result<Vec<Service>, StoreError> {
        Ok(self.services.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Service>, StoreError> {
        Ok(self.services.iter().find(|s| s.id == id).cloned())
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Booking>, StoreError> {
        Ok(self.bookings.lock().unwrap().clone())
    }

    async fn append(&self, booking: Booking) -> Result<Booking, StoreError> {
        let mut bookings = self.bookings.lock().unwrap();
        bookings.push(booking.clone());
        Ok(booking)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, StoreError> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn update_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> Result<Booking, StoreError> {
        let mut bookings = self.bookings.lock().unwrap();
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        booking.status = status;
        Ok(booking.clone())
    }
}

fn seed_services() -> Vec<Service> {
    let service = |id: &str,
                   name: &str,
                   salon: &str,
                   price: i64,
                   duration: i32,
                   rating: f64,
                   location: &str| Service {
        id: id.to_string(),
        name: name.to_string(),
        salon_name: Some(salon.to_string()),
        price,
        duration_minutes: duration,
        category: None,
        location: Some(location.to_string()),
        rating: Some(rating),
        reviews: None,
    };

    vec![
        service("1", "Haircut", "Glow & Glam Studio", 500, 30, 4.9, "Maryland City, MD, USA"),
        service("2", "Beard Trim", "The Velvet Touch", 300, 20, 4.9, "New Jersey, USA"),
        service("3", "Hair Spa", "Aura Luxe Salon", 1200, 60, 4.5, "California, USA"),
        service("4", "Facial", "Makeup Nails", 900, 45, 4.8, "Texas, USA"),
        service("5", "Hair Color", "Opal Beauty Lounge", 1500, 90, 4.8, "Maryland, USA"),
        service("6", "Head Massage", "The Glam Society", 400, 20, 4.2, "Texas, USA"),
        service("7", "Keratin Treatment", "Crown & Curl", 2500, 120, 4.9, "Texas, USA"),
        service("8", "Manicure & Pedicure", "Bliss Beauty Bar", 700, 50, 4.7, "California, USA"),
    ]
}

fn seed_bookings(user_id: &str) -> Vec<Booking> {
    let booking = |id: &str,
                   service_id: &str,
                   service_name: &str,
                   date: &str,
                   time: &str,
                   status: BookingStatus| Booking {
        id: id.to_string(),
        user_id: user_id.to_string(),
        service_id: service_id.to_string(),
        service_name: service_name.to_string(),
        salon_name: None,
        salon_image: None,
        salon_location: None,
        first_name: None,
        last_name: None,
        email: None,
        phone: None,
        gender: None,
        stylist: None,
        preferred_gender: None,
        service_category: None,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap_or_default(),
        time: time.to_string(),
        note: None,
        status,
        price: None,
        original_price: None,
        discount: None,
        created_at: NaiveDateTime::default(),
    };

    vec![
        booking("b1", "1", "Haircut", "2026-02-10", "11:00", BookingStatus::Confirmed),
        booking("b2", "3", "Hair Spa", "2026-02-15", "14:00", BookingStatus::Pending),
        booking("b3", "2", "Beard Trim", "2026-02-08", "10:00", BookingStatus::Cancelled),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_catalog_lists_all_seed_services() {
        let store = MemoryStore::new();
        let services = ServiceCatalog::list(&store).await.unwrap();
        assert_eq!(services.len(), 8);
        assert_eq!(services[0].name, "Haircut");
    }

    #[tokio::test]
    async fn test_append_and_find() {
        let store = MemoryStore::with_demo_bookings("123");
        let found = BookingStore::find_by_id(&store, "b2").await.unwrap();
        assert_eq!(found.unwrap().status, BookingStatus::Pending);

        let missing = BookingStore::find_by_id(&store, "nope").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_update_status_unknown_id() {
        let store = MemoryStore::new();
        let err = store
            .update_status("ghost", BookingStatus::Cancelled)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
