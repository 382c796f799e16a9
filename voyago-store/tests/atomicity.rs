use async_trait::async_trait;
use chrono::Utc;
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use uuid::Uuid;
use voyago_booking::{Booking, BookingError, BookingManager, BookingStatus, BookingStore};
use voyago_catalog::{SeatLedger, TravelKind, TravelOption, TravelOptionStore};
use voyago_store::{InMemoryBookingStore, InMemoryCatalog};

/// Booking store with injectable failures, to prove that a storage failure
/// inside the atomic unit rolls the seat mutation back.
#[derive(Default)]
struct FlakyBookingStore {
    inner: InMemoryBookingStore,
    fail_insert: AtomicBool,
    fail_mark_cancelled: AtomicBool,
}

#[async_trait]
impl BookingStore for FlakyBookingStore {
    async fn insert(
        &self,
        booking: &Booking,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.fail_insert.load(Ordering::SeqCst) {
            return Err("injected insert failure".into());
        }
        self.inner.insert(booking).await
    }

    async fn get(
        &self,
        id: Uuid,
    ) -> Result<Option<Booking>, Box<dyn std::error::Error + Send + Sync>> {
        self.inner.get(id).await
    }

    async fn mark_cancelled(
        &self,
        id: Uuid,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        if self.fail_mark_cancelled.load(Ordering::SeqCst) {
            return Err("injected transition failure".into());
        }
        self.inner.mark_cancelled(id).await
    }

    async fn list_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<Booking>, Box<dyn std::error::Error + Send + Sync>> {
        self.inner.list_for_user(user_id).await
    }
}

async fn setup_flaky(seats: u32) -> (Arc<SeatLedger>, Arc<FlakyBookingStore>, BookingManager, Uuid) {
    let ledger = Arc::new(SeatLedger::new());
    let catalog = Arc::new(InMemoryCatalog::new());
    let bookings = Arc::new(FlakyBookingStore::default());

    let option = TravelOption::new(
        TravelKind::Bus,
        "Coastal express",
        "Nice",
        "Genoa",
        Utc::now(),
        dec!(25.00),
        seats,
    );
    catalog.insert(&option).await.unwrap();
    ledger.register(option.id, option.available_seats).await;

    let manager = BookingManager::new(
        Arc::clone(&ledger),
        catalog as Arc<dyn TravelOptionStore>,
        Arc::clone(&bookings) as Arc<dyn BookingStore>,
    );
    (ledger, bookings, manager, option.id)
}

#[tokio::test]
async fn test_failed_insert_leaks_no_reservation() {
    let (ledger, bookings, manager, option_id) = setup_flaky(10).await;
    bookings.fail_insert.store(true, Ordering::SeqCst);

    let err = manager
        .create_booking("ada@example.com", option_id, 3)
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::Storage(_)));

    // Seats are back to the pre-reservation value and no row was written
    assert_eq!(ledger.available(option_id).await.unwrap(), 10);
    assert!(bookings
        .list_for_user("ada@example.com")
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_failed_cancel_transition_releases_no_seats() {
    let (ledger, bookings, manager, option_id) = setup_flaky(10).await;

    let booking = manager
        .create_booking("ada@example.com", option_id, 4)
        .await
        .unwrap();
    assert_eq!(ledger.available(option_id).await.unwrap(), 6);

    bookings.fail_mark_cancelled.store(true, Ordering::SeqCst);
    let err = manager.cancel_booking(booking.id).await.unwrap_err();
    assert!(matches!(err, BookingError::Storage(_)));

    // Neither effect happened: still confirmed, nothing released
    assert_eq!(ledger.available(option_id).await.unwrap(), 6);
    let stored = bookings.get(booking.id).await.unwrap().unwrap();
    assert_eq!(stored.status, BookingStatus::Confirmed);

    // Once storage recovers, the cancellation goes through as one unit
    bookings.fail_mark_cancelled.store(false, Ordering::SeqCst);
    assert!(manager.cancel_booking(booking.id).await.unwrap());
    assert_eq!(ledger.available(option_id).await.unwrap(), 10);
}
