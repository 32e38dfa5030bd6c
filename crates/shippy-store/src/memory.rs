// crates/shippy-store/src/memory.rs
//
// In-memory consignment repository implementing the `ConsignmentRepository` trait.
//
// Consignments live in a single append-only vector behind a reader-writer
// lock. Writers hold the lock only for the push; readers hold it only while
// cloning the vector out, so the lock is never held across an await point.

use std::sync::RwLock;

use async_trait::async_trait;

use shippy_core::consignment::Consignment;
use shippy_core::error::ShippyError;
use shippy_core::traits::ConsignmentRepository;

/// Volatile consignment store. Contents vanish with the process.
#[derive(Debug)]
pub struct InMemoryConsignmentStore {
    /// Consignments in insertion order.
    consignments: RwLock<Vec<Consignment>>,
}

impl InMemoryConsignmentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            consignments: RwLock::new(Vec::new()),
        }
    }

    /// Return the number of consignments currently stored.
    ///
    /// A poisoned lock still has a consistent vector behind it (pushes are
    /// the only writes), so the count is read through the poison.
    pub fn len(&self) -> usize {
        match self.consignments.read() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// Return whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryConsignmentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConsignmentRepository for InMemoryConsignmentStore {
    async fn create(&self, consignment: Consignment) -> Result<Consignment, ShippyError> {
        let mut store = self
            .consignments
            .write()
            .map_err(|e| ShippyError::Storage(format!("RwLock poisoned: {}", e)))?;
        store.push(consignment.clone());
        tracing::debug!(
            "Stored consignment {} at position {}",
            consignment.id,
            store.len() - 1
        );
        Ok(consignment)
    }

    async fn get_all(&self) -> Result<Vec<Consignment>, ShippyError> {
        let store = self
            .consignments
            .read()
            .map_err(|e| ShippyError::Storage(format!("RwLock poisoned: {}", e)))?;
        Ok(store.clone())
    }

    async fn count(&self) -> Result<usize, ShippyError> {
        let store = self
            .consignments
            .read()
            .map_err(|e| ShippyError::Storage(format!("RwLock poisoned: {}", e)))?;
        Ok(store.len())
    }
}
