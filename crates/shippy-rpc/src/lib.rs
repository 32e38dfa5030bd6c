// crates/shippy-rpc/src/lib.rs
//
// shippy-rpc: gRPC/JSON-RPC server and handlers for the Shippy consignment service.
//
// Provides a tonic-based RPC server whose handlers adapt the two consignment
// operations (create, list) onto a `ConsignmentRepository`. Calls travel as
// JSON envelopes over a single manually defined tonic service rather than
// protobuf codegen.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod server;

// Re-export the main server types for ergonomic access.
pub use error::RpcError;
pub use server::{JsonRpcRequest, JsonRpcResponse, RpcConfig, ShippingRpcServer, RPC_PATH};
