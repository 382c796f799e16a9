use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;
use voyago_booking::{BookingManager, BookingStore};
use voyago_catalog::{SeatLedger, TravelKind, TravelOption, TravelOptionStore};
use voyago_store::{InMemoryBookingStore, InMemoryCatalog};

#[allow(dead_code)]
pub struct TestApp {
    pub ledger: Arc<SeatLedger>,
    pub catalog: Arc<InMemoryCatalog>,
    pub bookings: Arc<InMemoryBookingStore>,
    pub manager: Arc<BookingManager>,
    pub option_id: Uuid,
}

/// One registered travel option wired to a manager over in-memory stores
pub async fn setup(seats: u32, price: Decimal) -> TestApp {
    let ledger = Arc::new(SeatLedger::new());
    let catalog = Arc::new(InMemoryCatalog::new());
    let bookings = Arc::new(InMemoryBookingStore::new());

    let option = TravelOption::new(
        TravelKind::Flight,
        "VG 400",
        "Porto",
        "Paris",
        Utc::now(),
        price,
        seats,
    );
    catalog.insert(&option).await.unwrap();
    ledger.register(option.id, option.available_seats).await;

    let manager = Arc::new(BookingManager::new(
        Arc::clone(&ledger),
        Arc::clone(&catalog) as Arc<dyn TravelOptionStore>,
        Arc::clone(&bookings) as Arc<dyn BookingStore>,
    ));

    TestApp {
        ledger,
        catalog,
        bookings,
        manager,
        option_id: option.id,
    }
}
