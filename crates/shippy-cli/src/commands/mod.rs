// crates/shippy-cli/src/commands/mod.rs
//
// Command module declarations for the Shippy CLI.

pub mod consignment;
pub mod status;
