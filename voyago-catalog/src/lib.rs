pub mod inventory;
pub mod repository;
pub mod travel;

pub use inventory::{InventoryError, RowGuard, SeatLedger};
pub use repository::TravelOptionStore;
pub use travel::{TravelKind, TravelOption};
