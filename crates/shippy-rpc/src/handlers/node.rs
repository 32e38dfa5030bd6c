// crates/shippy-rpc/src/handlers/node.rs
//
// Node health handler: GetHealth.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use shippy_core::error::ShippyError;
use shippy_core::traits::ConsignmentRepository;

/// Request for node health status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetHealthRequest {}

/// Response containing node health status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetHealthResponse {
    /// Overall health: "healthy" or "unhealthy".
    pub status: String,
    /// Whether the consignment store answered.
    pub storage_ok: bool,
    /// Number of consignments held (0 when the store is unreachable).
    pub consignment_count: usize,
    /// Software version.
    pub version: String,
    /// Human-readable details.
    pub details: Option<String>,
}

/// Handle a GetHealth request.
///
/// A failing store is reported inside the response, not as a call failure,
/// so probes can tell "server down" from "storage down".
pub async fn handle_get_health(
    repo: &Arc<dyn ConsignmentRepository>,
    _request: GetHealthRequest,
) -> Result<GetHealthResponse, ShippyError> {
    let version = env!("CARGO_PKG_VERSION").to_string();

    match repo.count().await {
        Ok(count) => Ok(GetHealthResponse {
            status: "healthy".to_string(),
            storage_ok: true,
            consignment_count: count,
            version,
            details: None,
        }),
        Err(e) => {
            tracing::warn!("Health check found storage failure: {}", e);
            Ok(GetHealthResponse {
                status: "unhealthy".to_string(),
                storage_ok: false,
                consignment_count: 0,
                version,
                details: Some(e.to_string()),
            })
        }
    }
}
