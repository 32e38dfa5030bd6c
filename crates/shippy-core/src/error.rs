use thiserror::Error;

/// Service-wide error types for the Shippy consignment service.
#[derive(Debug, Error)]
pub enum ShippyError {
    /// Storage layer error (append failed, lock poisoned).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ShippyError {
    fn from(e: serde_json::Error) -> Self {
        ShippyError::Serialization(e.to_string())
    }
}
