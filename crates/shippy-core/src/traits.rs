// crates/shippy-core/src/traits.rs

use async_trait::async_trait;

use crate::consignment::Consignment;
use crate::error::ShippyError;

/// Trait for consignment storage.
///
/// Implemented by shippy-store (in-memory backend). The RPC handlers only
/// ever see this trait, so a durable backend can be dropped in without
/// touching them.
#[async_trait]
pub trait ConsignmentRepository: Send + Sync {
    /// Append a consignment to the end of the store and hand it back.
    async fn create(&self, consignment: Consignment) -> Result<Consignment, ShippyError>;

    /// Return a snapshot of every stored consignment, in insertion order.
    ///
    /// The returned vector is owned by the caller and is not affected by
    /// later calls to `create`.
    async fn get_all(&self) -> Result<Vec<Consignment>, ShippyError>;

    /// Return the number of stored consignments without copying them.
    async fn count(&self) -> Result<usize, ShippyError>;
}
