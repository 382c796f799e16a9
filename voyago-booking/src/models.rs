use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Booking status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

/// A confirmed reservation of seats on one travel option.
///
/// A booking only exists if its reservation succeeded, so the initial
/// status is always `Confirmed`; the single transition is
/// `Confirmed -> Cancelled` and `Cancelled` is terminal. Bookings are never
/// deleted, they stay around as historical records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: String,
    pub travel_option_id: Uuid,
    pub seats: u32,
    /// Unit price times seats, computed once at creation and never
    /// recomputed, regardless of later price changes on the travel option
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        user_id: impl Into<String>,
        travel_option_id: Uuid,
        seats: u32,
        unit_price: Decimal,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            travel_option_id,
            seats,
            total_price: unit_price * Decimal::from(seats),
            status: BookingStatus::Confirmed,
            created_at: now,
            updated_at: now,
        }
    }

    /// Only confirmed bookings can be cancelled
    pub fn can_cancel(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_price_is_unit_price_times_seats() {
        let booking = Booking::new("ada@example.com", Uuid::new_v4(), 5, dec!(500.00));
        assert_eq!(booking.total_price, dec!(2500.00));
        assert_eq!(booking.status, BookingStatus::Confirmed);
    }

    #[test]
    fn test_can_cancel_only_while_confirmed() {
        let mut booking = Booking::new("ada@example.com", Uuid::new_v4(), 1, dec!(12.30));
        assert!(booking.can_cancel());

        booking.status = BookingStatus::Cancelled;
        assert!(!booking.can_cancel());
    }
}
