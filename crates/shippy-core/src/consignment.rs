// crates/shippy-core/src/consignment.rs

use serde::{Deserialize, Serialize};

/// A shipment submitted for storage.
///
/// The service never interprets these fields; they are carried through
/// exactly as the caller supplied them. Every field is optional on the wire
/// so that a client can send as little as `{"id": "c1"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Consignment {
    /// Caller-assigned identifier. Not checked for uniqueness.
    pub id: String,
    /// Free-form description of the cargo.
    pub description: String,
    /// Total weight of the consignment.
    pub weight: i32,
    /// Containers making up the consignment.
    pub containers: Vec<Container>,
    /// Vessel the consignment is booked on.
    pub vessel_id: String,
}

/// A single container within a consignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Container {
    pub id: String,
    pub customer_id: String,
    pub origin: String,
    pub user_id: String,
}

impl Consignment {
    /// Create a consignment carrying only an identifier.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}
