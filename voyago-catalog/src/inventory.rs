use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use uuid::Uuid;

/// Live seat count for one travel option
#[derive(Debug)]
struct SeatRow {
    available: u32,
}

/// Owns the available-seat count of every registered travel option.
///
/// All mutations go through a per-row exclusive lock: two operations on the
/// same option serialize on that row's mutex, operations on different
/// options never contend. The outer map lock is only held for lookup, never
/// across a seat mutation.
pub struct SeatLedger {
    rows: RwLock<HashMap<Uuid, Arc<Mutex<SeatRow>>>>,
}

impl SeatLedger {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }

    /// Start tracking seats for a travel option
    pub async fn register(&self, option_id: Uuid, seats: u32) {
        let mut rows = self.rows.write().await;
        rows.insert(option_id, Arc::new(Mutex::new(SeatRow { available: seats })));
    }

    /// Stop tracking a travel option. A guard already held on the row keeps
    /// operating on the detached row; its commit is not observable afterwards.
    pub async fn remove(&self, option_id: Uuid) {
        let mut rows = self.rows.write().await;
        rows.remove(&option_id);
    }

    async fn row(&self, option_id: Uuid) -> Result<Arc<Mutex<SeatRow>>, InventoryError> {
        let rows = self.rows.read().await;
        rows.get(&option_id)
            .cloned()
            .ok_or(InventoryError::NotFound(option_id))
    }

    /// Acquire the row lock and return a guard for a staged
    /// read-modify-write. Changes staged on the guard only land in the
    /// ledger when [`RowGuard::commit`] is called; dropping the guard
    /// without committing discards them and leaves the count untouched.
    pub async fn begin(&self, option_id: Uuid) -> Result<RowGuard, InventoryError> {
        let row = self.row(option_id).await?;
        let guard = row.lock_owned().await;
        let staged = guard.available;
        Ok(RowGuard { guard, staged })
    }

    /// Atomically check-then-decrement the seat count. On shortfall nothing
    /// changes and the error carries the count observed under the lock.
    pub async fn reserve(&self, option_id: Uuid, seats: u32) -> Result<(), InventoryError> {
        let mut row = self.begin(option_id).await?;
        row.reserve(seats)?;
        row.commit();
        Ok(())
    }

    /// Atomically increment the seat count. No upper bound is enforced:
    /// restoring seats a booking validly held is always safe, and an
    /// over-release is a caller error this ledger does not detect.
    pub async fn release(&self, option_id: Uuid, seats: u32) -> Result<(), InventoryError> {
        let mut row = self.begin(option_id).await?;
        row.release(seats);
        row.commit();
        Ok(())
    }

    /// Current seat count
    pub async fn available(&self, option_id: Uuid) -> Result<u32, InventoryError> {
        let row = self.row(option_id).await?;
        let guard = row.lock().await;
        Ok(guard.available)
    }

    /// Check whether `seats` could currently be reserved
    pub async fn is_available(&self, option_id: Uuid, seats: u32) -> Result<bool, InventoryError> {
        Ok(self.available(option_id).await? >= seats)
    }
}

impl Default for SeatLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// Exclusive hold on one inventory row with a staged seat count.
///
/// The row mutex is held for the lifetime of the guard, so everything done
/// between [`SeatLedger::begin`] and [`RowGuard::commit`] is one critical
/// section. This is the transactional boundary the booking lifecycle uses
/// to make a seat mutation and a booking write all-or-nothing.
pub struct RowGuard {
    guard: OwnedMutexGuard<SeatRow>,
    staged: u32,
}

impl RowGuard {
    /// Seat count as staged so far
    pub fn available(&self) -> u32 {
        self.staged
    }

    /// Stage a decrement of `seats`, failing without changes on shortfall
    pub fn reserve(&mut self, seats: u32) -> Result<(), InventoryError> {
        if self.staged < seats {
            return Err(InventoryError::InsufficientSeats {
                requested: seats,
                available: self.staged,
            });
        }
        self.staged -= seats;
        Ok(())
    }

    /// Stage an increment of `seats`
    pub fn release(&mut self, seats: u32) {
        self.staged = self.staged.saturating_add(seats);
    }

    /// Apply the staged count to the ledger and release the row lock
    pub fn commit(mut self) {
        self.guard.available = self.staged;
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Travel option not tracked: {0}")]
    NotFound(Uuid),

    #[error("Insufficient seats: requested {requested}, available {available}")]
    InsufficientSeats { requested: u32, available: u32 },
}
