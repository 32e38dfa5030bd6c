// crates/shippy-rpc/src/error.rs
//
// Errors produced while dispatching a JSON-RPC call. Handler failures are
// wrapped unchanged in `RpcError::Service`.

use http::StatusCode;
use thiserror::Error;

use shippy_core::error::ShippyError;

/// Failure of a single RPC call, reported to the client as a non-2xx
/// response carrying a `success: false` envelope.
#[derive(Debug, Error)]
pub enum RpcError {
    /// The request body could not be read or was not a JSON-RPC envelope.
    #[error("{0}")]
    InvalidRequest(String),

    /// The request was sent to a path other than the single call path.
    #[error("Unknown RPC path: {0}")]
    UnknownPath(String),

    /// No handler is registered under the requested method name.
    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    /// The params did not decode into the handler's request type.
    #[error("Failed to deserialize request: {0}")]
    InvalidParams(String),

    /// The handler's response could not be encoded.
    #[error("Failed to serialize response: {0}")]
    Serialization(String),

    /// The handler itself failed.
    #[error(transparent)]
    Service(#[from] ShippyError),
}

impl RpcError {
    /// HTTP status used when this error is returned over the wire.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RpcError::InvalidRequest(_) | RpcError::InvalidParams(_) => StatusCode::BAD_REQUEST,
            RpcError::UnknownPath(_) | RpcError::UnknownMethod(_) => StatusCode::NOT_FOUND,
            RpcError::Serialization(_) | RpcError::Service(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_keeps_message() {
        let err = RpcError::from(ShippyError::Storage("disk full".to_string()));
        assert_eq!(err.to_string(), "Storage error: disk full");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_client_errors_map_to_4xx() {
        assert_eq!(
            RpcError::UnknownMethod("x/y".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RpcError::UnknownPath("/x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RpcError::InvalidParams("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RpcError::InvalidRequest("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
