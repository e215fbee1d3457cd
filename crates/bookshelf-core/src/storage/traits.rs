//! Backing-store trait definition.
//!
//! The `CatalogBackend` trait is the seam between the catalog store and
//! whatever holds the serialized records. The catalog re-reads and fully
//! rewrites the collection on every mutating operation, so the contract
//! is deliberately small: load everything, save everything.

use crate::error::Result;
use crate::record::Record;

/// Persistence interface for the full ordered record collection.
pub trait CatalogBackend {
    /// Load all records in persisted order.
    ///
    /// A backend with no stored data yet returns an empty vec, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if the stored data cannot be read
    /// or parsed.
    fn load(&self) -> Result<Vec<Record>>;

    /// Replace the stored collection with `records`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` on I/O failure.
    fn save(&self, records: &[Record]) -> Result<()>;
}

/// In-memory backend for tests.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
pub struct MemoryBackend {
    records: std::cell::RefCell<Vec<Record>>,
}

#[cfg(any(test, feature = "test-support"))]
impl MemoryBackend {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: std::cell::RefCell::new(records),
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
impl CatalogBackend for MemoryBackend {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &[Record]) -> Result<()> {
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }
}
