pub mod app_config;
pub mod memory;

pub use app_config::{BookingRules, Config};
pub use memory::{InMemoryBookingStore, InMemoryCatalog, MemoryStoreError};
