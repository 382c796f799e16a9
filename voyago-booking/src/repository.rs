use crate::models::Booking;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository trait for booking data access
#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn insert(
        &self,
        booking: &Booking,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn get(
        &self,
        id: Uuid,
    ) -> Result<Option<Booking>, Box<dyn std::error::Error + Send + Sync>>;

    /// Transition `Confirmed -> Cancelled` as a compare-and-set. Returns
    /// `false` without changes when the booking is not confirmed, so a
    /// racing second cancellation can never transition twice. Fails when
    /// the booking does not exist.
    async fn mark_cancelled(
        &self,
        id: Uuid,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;

    /// All bookings of one user, newest first
    async fn list_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<Booking>, Box<dyn std::error::Error + Send + Sync>>;
}
