// crates/shippy-core/src/lib.rs
//
// shippy-core: Core types and traits for the Shippy consignment service.
//
// This is the leaf crate that all other crates in the workspace depend on.
// It defines the consignment data contract, the shared error type, and the
// repository trait the service layer is written against.

pub mod consignment;
pub mod error;
pub mod traits;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use shippy_core::Consignment;`
pub use consignment::{Consignment, Container};
pub use error::ShippyError;
pub use traits::ConsignmentRepository;
