// crates/shippy-rpc/src/handlers/consignment.rs
//
// Consignment handlers: CreateConsignment, GetConsignments.
// These handlers hold no state of their own; everything lives behind the
// `ConsignmentRepository` they are given.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use shippy_core::consignment::Consignment;
use shippy_core::error::ShippyError;
use shippy_core::traits::ConsignmentRepository;

/// Response shared by both consignment operations.
///
/// CreateConsignment fills `created` and `consignment`; GetConsignments fills
/// `consignments`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsignmentResponse {
    /// True when the consignment was stored.
    #[serde(default)]
    pub created: bool,
    /// The stored consignment (CreateConsignment only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consignment: Option<Consignment>,
    /// Every stored consignment (GetConsignments only).
    #[serde(default)]
    pub consignments: Vec<Consignment>,
}

// ---------------------------------------------------------------------------
// CreateConsignment
// ---------------------------------------------------------------------------

/// Handle a CreateConsignment request. The request body is the consignment.
///
/// A repository failure is returned as-is so the transport reports it as a
/// failed call rather than a response with `created: false`.
pub async fn handle_create_consignment(
    repo: &Arc<dyn ConsignmentRepository>,
    request: Consignment,
) -> Result<ConsignmentResponse, ShippyError> {
    let consignment = repo.create(request).await?;

    tracing::info!("Consignment created: {}", consignment.id);

    Ok(ConsignmentResponse {
        created: true,
        consignment: Some(consignment),
        consignments: Vec::new(),
    })
}

// ---------------------------------------------------------------------------
// GetConsignments
// ---------------------------------------------------------------------------

/// Request to list every stored consignment. Carries no parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetRequest {}

/// Handle a GetConsignments request.
pub async fn handle_get_consignments(
    repo: &Arc<dyn ConsignmentRepository>,
    _request: GetRequest,
) -> Result<ConsignmentResponse, ShippyError> {
    let consignments = repo.get_all().await?;

    Ok(ConsignmentResponse {
        created: false,
        consignment: None,
        consignments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use shippy_store::InMemoryConsignmentStore;

    /// Repository whose every call fails, standing in for a broken backend.
    struct FailingRepository;

    #[async_trait]
    impl ConsignmentRepository for FailingRepository {
        async fn create(&self, _consignment: Consignment) -> Result<Consignment, ShippyError> {
            Err(ShippyError::Storage("backend unavailable".to_string()))
        }

        async fn get_all(&self) -> Result<Vec<Consignment>, ShippyError> {
            Err(ShippyError::Storage("backend unavailable".to_string()))
        }

        async fn count(&self) -> Result<usize, ShippyError> {
            Err(ShippyError::Storage("backend unavailable".to_string()))
        }
    }

    fn memory_repo() -> Arc<dyn ConsignmentRepository> {
        Arc::new(InMemoryConsignmentStore::new())
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let repo = memory_repo();

        let created = handle_create_consignment(&repo, Consignment::with_id("c1"))
            .await
            .unwrap();
        assert!(created.created);
        assert_eq!(created.consignment, Some(Consignment::with_id("c1")));
        assert!(created.consignments.is_empty());

        let listed = handle_get_consignments(&repo, GetRequest {}).await.unwrap();
        assert!(!listed.created);
        assert_eq!(listed.consignment, None);
        assert_eq!(listed.consignments, vec![Consignment::with_id("c1")]);
    }

    #[tokio::test]
    async fn test_list_before_any_create_is_empty() {
        let repo = memory_repo();
        let listed = handle_get_consignments(&repo, GetRequest {}).await.unwrap();
        assert!(listed.consignments.is_empty());
    }

    #[tokio::test]
    async fn test_create_failure_is_an_error_not_a_response() {
        let repo: Arc<dyn ConsignmentRepository> = Arc::new(FailingRepository);
        let result = handle_create_consignment(&repo, Consignment::with_id("c1")).await;
        match result {
            Err(ShippyError::Storage(msg)) => assert_eq!(msg, "backend unavailable"),
            other => panic!("Expected Storage error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_failure_is_an_error() {
        let repo: Arc<dyn ConsignmentRepository> = Arc::new(FailingRepository);
        assert!(handle_get_consignments(&repo, GetRequest {}).await.is_err());
    }

    #[test]
    fn test_create_response_omits_missing_consignment() {
        let json = serde_json::to_value(ConsignmentResponse::default()).unwrap();
        assert_eq!(json, serde_json::json!({"created": false, "consignments": []}));
    }
}
