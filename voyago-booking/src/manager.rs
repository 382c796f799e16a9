use crate::models::{Booking, BookingStatus};
use crate::repository::BookingStore;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
use voyago_catalog::{InventoryError, SeatLedger, TravelOptionStore};

/// Limits checked before any lock is taken
#[derive(Debug, Clone, Default)]
pub struct BookingPolicy {
    /// Cap on seats per booking, `None` for unlimited
    pub max_seats_per_booking: Option<u32>,
}

/// Drives the seat ledger and the booking store as one atomic unit.
///
/// Every state-changing operation stages its seat mutation on a
/// [`voyago_catalog::RowGuard`], performs the booking write while the row
/// lock is held, and only commits the staged seats when the write
/// succeeded. A failing write drops the guard uncommitted, so no partial
/// effect ever survives.
pub struct BookingManager {
    ledger: Arc<SeatLedger>,
    catalog: Arc<dyn TravelOptionStore>,
    bookings: Arc<dyn BookingStore>,
    policy: BookingPolicy,
}

impl BookingManager {
    pub fn new(
        ledger: Arc<SeatLedger>,
        catalog: Arc<dyn TravelOptionStore>,
        bookings: Arc<dyn BookingStore>,
    ) -> Self {
        Self {
            ledger,
            catalog,
            bookings,
            policy: BookingPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: BookingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Reserve seats and persist the confirmed booking, all or nothing.
    ///
    /// The total price is the option's unit price at this moment times
    /// `seats`; it is recorded on the booking and never recomputed.
    pub async fn create_booking(
        &self,
        user_id: &str,
        option_id: Uuid,
        seats: u32,
    ) -> Result<Booking, BookingError> {
        if seats == 0 {
            return Err(BookingError::InvalidQuantity { requested: seats });
        }
        if let Some(limit) = self.policy.max_seats_per_booking {
            if seats > limit {
                return Err(BookingError::SeatLimitExceeded {
                    requested: seats,
                    limit,
                });
            }
        }

        let option = self
            .catalog
            .get(option_id)
            .await
            .map_err(BookingError::Storage)?
            .ok_or(BookingError::OptionNotFound(option_id))?;

        let mut row = self.ledger.begin(option_id).await?;
        if let Err(err) = row.reserve(seats) {
            warn!(%option_id, requested = seats, available = row.available(), "reservation rejected");
            return Err(err.into());
        }

        let booking = Booking::new(user_id, option_id, seats, option.price);
        if let Err(err) = self.bookings.insert(&booking).await {
            // the guard is dropped uncommitted, the staged decrement never lands
            warn!(%option_id, booking_id = %booking.id, "booking insert failed, reservation rolled back");
            return Err(BookingError::Storage(err));
        }
        row.commit();

        info!(
            booking_id = %booking.id,
            %option_id,
            seats,
            total_price = %booking.total_price,
            "booking confirmed"
        );
        Ok(booking)
    }

    /// Restore the booking's seats and mark it cancelled, all or nothing.
    ///
    /// Returns `Ok(false)` without changes when the booking is already
    /// cancelled: a repeated cancellation is a no-op, not an error, and the
    /// seats are only ever restored once.
    pub async fn cancel_booking(&self, booking_id: Uuid) -> Result<bool, BookingError> {
        let booking = self
            .bookings
            .get(booking_id)
            .await
            .map_err(BookingError::Storage)?
            .ok_or(BookingError::BookingNotFound(booking_id))?;
        if booking.status != BookingStatus::Confirmed {
            return Ok(false);
        }

        let mut row = self.ledger.begin(booking.travel_option_id).await?;
        row.release(booking.seats);

        let transitioned = self
            .bookings
            .mark_cancelled(booking_id)
            .await
            .map_err(BookingError::Storage)?;
        if !transitioned {
            // lost the race to a concurrent cancel, discard the staged release
            return Ok(false);
        }
        row.commit();

        info!(
            %booking_id,
            option_id = %booking.travel_option_id,
            seats = booking.seats,
            "booking cancelled"
        );
        Ok(true)
    }

    /// Whether `seats` could currently be reserved on the option
    pub async fn is_available(&self, option_id: Uuid, seats: u32) -> Result<bool, BookingError> {
        Ok(self.ledger.is_available(option_id, seats).await?)
    }

    /// Whether the booking is still confirmed and therefore cancellable
    pub async fn can_cancel(&self, booking_id: Uuid) -> Result<bool, BookingError> {
        let booking = self
            .bookings
            .get(booking_id)
            .await
            .map_err(BookingError::Storage)?
            .ok_or(BookingError::BookingNotFound(booking_id))?;
        Ok(booking.can_cancel())
    }

    pub async fn get_booking(&self, booking_id: Uuid) -> Result<Option<Booking>, BookingError> {
        self.bookings
            .get(booking_id)
            .await
            .map_err(BookingError::Storage)
    }

    /// All bookings of one user, newest first
    pub async fn list_bookings(&self, user_id: &str) -> Result<Vec<Booking>, BookingError> {
        self.bookings
            .list_for_user(user_id)
            .await
            .map_err(BookingError::Storage)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Not enough seats: requested {requested}, available {available}")]
    InsufficientSeats { requested: u32, available: u32 },

    #[error("Requested seat count must be at least 1, got {requested}")]
    InvalidQuantity { requested: u32 },

    #[error("Requested {requested} seats, per-booking limit is {limit}")]
    SeatLimitExceeded { requested: u32, limit: u32 },

    #[error("Travel option not found: {0}")]
    OptionNotFound(Uuid),

    #[error("Booking not found: {0}")]
    BookingNotFound(Uuid),

    #[error("Storage failure: {0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

impl From<InventoryError> for BookingError {
    fn from(err: InventoryError) -> Self {
        match err {
            InventoryError::NotFound(id) => BookingError::OptionNotFound(id),
            InventoryError::InsufficientSeats {
                requested,
                available,
            } => BookingError::InsufficientSeats {
                requested,
                available,
            },
        }
    }
}
