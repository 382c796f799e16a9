pub mod manager;
pub mod models;
pub mod repository;

pub use manager::{BookingError, BookingManager, BookingPolicy};
pub use models::{Booking, BookingStatus};
pub use repository::BookingStore;
