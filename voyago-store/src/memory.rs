use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;
use voyago_booking::{Booking, BookingStatus, BookingStore};
use voyago_catalog::{TravelOption, TravelOptionStore};

/// Storage failures surfaced by the in-memory repositories
#[derive(Debug, thiserror::Error)]
pub enum MemoryStoreError {
    #[error("Record already exists: {0}")]
    Duplicate(Uuid),

    #[error("Record not found: {0}")]
    NotFound(Uuid),

    #[error("Price must be at least 0.01, got {0}")]
    InvalidPrice(Decimal),
}

/// In-memory travel option repository
#[derive(Default)]
pub struct InMemoryCatalog {
    options: RwLock<HashMap<Uuid, TravelOption>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TravelOptionStore for InMemoryCatalog {
    async fn insert(
        &self,
        option: &TravelOption,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if option.price < Decimal::new(1, 2) {
            return Err(MemoryStoreError::InvalidPrice(option.price).into());
        }
        let mut options = self.options.write().await;
        if options.contains_key(&option.id) {
            return Err(MemoryStoreError::Duplicate(option.id).into());
        }
        options.insert(option.id, option.clone());
        Ok(())
    }

    async fn get(
        &self,
        id: Uuid,
    ) -> Result<Option<TravelOption>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.options.read().await.get(&id).cloned())
    }

    async fn update(
        &self,
        option: &TravelOption,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if option.price < Decimal::new(1, 2) {
            return Err(MemoryStoreError::InvalidPrice(option.price).into());
        }
        let mut options = self.options.write().await;
        let stored = options
            .get_mut(&option.id)
            .ok_or(MemoryStoreError::NotFound(option.id))?;
        *stored = option.clone();
        stored.updated_at = Utc::now();
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut options = self.options.write().await;
        options
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| MemoryStoreError::NotFound(id).into())
    }
}

/// In-memory booking repository. Bookings are inserted and transitioned,
/// never removed.
#[derive(Default)]
pub struct InMemoryBookingStore {
    bookings: RwLock<HashMap<Uuid, Booking>>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn insert(
        &self,
        booking: &Booking,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut bookings = self.bookings.write().await;
        if bookings.contains_key(&booking.id) {
            return Err(MemoryStoreError::Duplicate(booking.id).into());
        }
        bookings.insert(booking.id, booking.clone());
        Ok(())
    }

    async fn get(
        &self,
        id: Uuid,
    ) -> Result<Option<Booking>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.bookings.read().await.get(&id).cloned())
    }

    async fn mark_cancelled(
        &self,
        id: Uuid,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let mut bookings = self.bookings.write().await;
        let booking = bookings.get_mut(&id).ok_or(MemoryStoreError::NotFound(id))?;
        if booking.status != BookingStatus::Confirmed {
            return Ok(false);
        }
        booking.status = BookingStatus::Cancelled;
        booking.updated_at = Utc::now();
        Ok(true)
    }

    async fn list_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<Booking>, Box<dyn std::error::Error + Send + Sync>> {
        let bookings = self.bookings.read().await;
        let mut matches: Vec<Booking> = bookings
            .values()
            .filter(|booking| booking.user_id == user_id)
            .cloned()
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matches)
    }
}
