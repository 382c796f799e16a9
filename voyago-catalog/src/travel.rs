use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Mode of transport for a travel option
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelKind {
    Flight,
    Train,
    Bus,
}

/// A purchasable unit of transportation capacity: one flight, train or bus
/// run with a finite seat pool.
///
/// `available_seats` is the seed count handed to the [`crate::SeatLedger`]
/// when the option is registered; the ledger owns the live count from then
/// on and is the only component allowed to change it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelOption {
    pub id: Uuid,
    pub kind: TravelKind,
    pub title: String,
    pub source: String,
    pub destination: String,
    pub departure: DateTime<Utc>,
    /// Unit price per seat, positive and at least 0.01
    pub price: Decimal,
    pub available_seats: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TravelOption {
    pub fn new(
        kind: TravelKind,
        title: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
        departure: DateTime<Utc>,
        price: Decimal,
        available_seats: u32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            source: source.into(),
            destination: destination.into(),
            departure,
            price,
            available_seats,
            created_at: now,
            updated_at: now,
        }
    }
}
