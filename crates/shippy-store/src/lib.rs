// crates/shippy-store/src/lib.rs
//
// shippy-store: Storage layer for the Shippy consignment service.
//
// Provides the volatile, process-lifetime consignment repository. A durable
// backend would live alongside it and implement the same
// `ConsignmentRepository` trait.

pub mod memory;

// Re-export key types for ergonomic access from downstream crates.
pub use memory::InMemoryConsignmentStore;
