//! Test stores — mock `RecordStore` implementations for tests.

use std::sync::Mutex;

use stroop_core::error::GameError;
use stroop_store::RecordStore;

/// A record store that keeps the record in memory and records every
/// `save` call. Loads return 0 until something is saved or seeded.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    record: Mutex<Option<u32>>,
    saves: Mutex<Vec<u32>>,
}

impl InMemoryRecordStore {
    /// Create an empty store: `load` returns 0 until the first save.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with an existing record.
    #[must_use]
    pub fn with_record(value: u32) -> Self {
        Self {
            record: Mutex::new(Some(value)),
            saves: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of every value passed to `save`, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn saved_values(&self) -> Vec<u32> {
        self.saves.lock().unwrap().clone()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn load(&self) -> u32 {
        self.record.lock().unwrap().unwrap_or(0)
    }

    fn save(&self, value: u32) -> Result<(), GameError> {
        *self.record.lock().unwrap() = Some(value);
        self.saves.lock().unwrap().push(value);
        Ok(())
    }
}

/// A record store whose saves always fail and whose loads degrade to 0.
/// Useful for testing that persistence failure never blocks session end.
#[derive(Debug)]
pub struct FailingRecordStore;

impl RecordStore for FailingRecordStore {
    fn load(&self) -> u32 {
        0
    }

    fn save(&self, _value: u32) -> Result<(), GameError> {
        Err(GameError::Storage("disk full".into()))
    }
}
