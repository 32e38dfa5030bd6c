// crates/shippy-rpc/src/server.rs
//
// RPC server setup: ShippingRpcServer and RpcConfig.
//
// Uses a JSON-RPC-over-gRPC approach. A single tonic unary service accepts
// JSON-encoded requests with a method field, dispatches to the appropriate
// handler, and returns JSON-encoded responses.
//
// This avoids the need for proto codegen while still using tonic's server
// infrastructure for transport and middleware.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use http::header::{HeaderValue, CONTENT_TYPE};
use http::StatusCode;
use http_body::Body as HttpBody;
use http_body_util::BodyExt;
use serde::{Deserialize, Serialize};
use tonic::transport::Server;
use tonic::Status;

use shippy_core::traits::ConsignmentRepository;

use crate::error::RpcError;
use crate::handlers;
use crate::middleware;

/// Fully qualified name of the tonic service.
pub const SERVICE_NAME: &str = "shippy.service.consignment.ShippingService";

/// Path clients POST JSON-RPC envelopes to.
pub const RPC_PATH: &str = "/shippy.service.consignment.ShippingService/Call";

// ---------------------------------------------------------------------------
// RpcConfig
// ---------------------------------------------------------------------------

/// Configuration for the RPC server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcConfig {
    /// Host to bind to (e.g., "127.0.0.1" or "0.0.0.0").
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 50051,
        }
    }
}

impl RpcConfig {
    /// Resolve the configured host and port into a socket address.
    ///
    /// Accepts IP literals and hostnames such as `localhost`; the first
    /// address the resolver returns is used.
    pub async fn socket_addr(&self) -> std::io::Result<SocketAddr> {
        let invalid = |reason: String| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid RPC address {}:{}: {}", self.host, self.port, reason),
            )
        };

        tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(|e| invalid(e.to_string()))?
            .next()
            .ok_or_else(|| invalid("host resolved to no addresses".to_string()))
    }
}

// ---------------------------------------------------------------------------
// JSON-RPC Envelope
// ---------------------------------------------------------------------------

/// A JSON-RPC-style request envelope.
/// The client sends a method name and a JSON params payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// The RPC method to invoke (e.g., "consignment/create").
    pub method: String,
    /// JSON-encoded parameters for the method. Absent means no parameters.
    #[serde(default)]
    pub params: serde_json::Value,
}

/// A JSON-RPC-style response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Whether the request succeeded.
    pub success: bool,
    /// The result data (if success).
    pub result: Option<serde_json::Value>,
    /// Error message (if not success).
    pub error: Option<String>,
}

impl JsonRpcResponse {
    fn ok(result: serde_json::Value) -> Self {
        Self {
            success: true,
            result: Some(result),
            error: None,
        }
    }

    fn failed(error: &RpcError) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(error.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// ShippingRpcServer
// ---------------------------------------------------------------------------

/// The RPC server for the consignment service.
///
/// Holds the repository handle and exposes a tonic-based gRPC server with
/// JSON-RPC dispatching.
#[derive(Clone)]
pub struct ShippingRpcServer {
    /// Server configuration.
    config: RpcConfig,
    /// Consignment repository shared by every call.
    repo: Arc<dyn ConsignmentRepository>,
}

impl std::fmt::Debug for ShippingRpcServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShippingRpcServer")
            .field("config", &self.config)
            .finish()
    }
}

impl ShippingRpcServer {
    /// Create a new ShippingRpcServer.
    ///
    /// # Arguments
    /// * `config` - Server configuration (host, port).
    /// * `repo` - Repository the consignment handlers operate on.
    pub fn new(config: RpcConfig, repo: Arc<dyn ConsignmentRepository>) -> Self {
        Self { config, repo }
    }

    /// The configuration this server was built with.
    pub fn config(&self) -> &RpcConfig {
        &self.config
    }

    /// Build the tower service that handles a single JSON-RPC call.
    pub fn json_rpc_service(&self) -> ShippingJsonRpcServer {
        ShippingJsonRpcServer::new(self.repo.clone())
    }

    /// Start the RPC server and serve requests until `signal` resolves.
    ///
    /// In-flight calls are allowed to finish before this returns.
    pub async fn start_with_shutdown<F>(
        &self,
        signal: F,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        F: Future<Output = ()> + Send,
    {
        let addr = self.config.socket_addr().await?;

        tracing::info!("Shippy RPC server starting on {}", addr);

        Server::builder()
            .accept_http1(true)
            .add_service(tonic::service::interceptor::InterceptedService::new(
                self.json_rpc_service(),
                middleware::logging_interceptor,
            ))
            .serve_with_shutdown(addr, signal)
            .await?;

        tracing::info!("Shippy RPC server on {} stopped", addr);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Dispatch a JSON-RPC request to the appropriate handler based on the method name.
async fn dispatch(
    repo: &Arc<dyn ConsignmentRepository>,
    request: JsonRpcRequest,
) -> Result<serde_json::Value, RpcError> {
    tracing::debug!("Dispatching RPC method {}", request.method);

    match request.method.as_str() {
        "consignment/create" => {
            dispatch_handler(request.params, |r| async move {
                handlers::consignment::handle_create_consignment(repo, r).await
            })
            .await
        }
        "consignment/list" => {
            dispatch_handler(request.params, |r| async move {
                handlers::consignment::handle_get_consignments(repo, r).await
            })
            .await
        }
        "node/health" => {
            dispatch_handler(request.params, |r| async move {
                handlers::node::handle_get_health(repo, r).await
            })
            .await
        }
        _ => Err(RpcError::UnknownMethod(request.method)),
    }
}

/// Generic dispatch helper: deserialize params into a request type,
/// call the handler, and serialize the result to JSON.
async fn dispatch_handler<Req, Resp, F, Fut>(
    params: serde_json::Value,
    handler: F,
) -> Result<serde_json::Value, RpcError>
where
    Req: serde::de::DeserializeOwned,
    Resp: serde::Serialize,
    F: FnOnce(Req) -> Fut,
    Fut: Future<Output = Result<Resp, shippy_core::ShippyError>>,
{
    // Parameterless methods may omit params entirely.
    let params = if params.is_null() {
        serde_json::Value::Object(serde_json::Map::new())
    } else {
        params
    };
    let request: Req =
        serde_json::from_value(params).map_err(|e| RpcError::InvalidParams(e.to_string()))?;
    let response = handler(request).await?;
    serde_json::to_value(response).map_err(|e| RpcError::Serialization(e.to_string()))
}

// ---------------------------------------------------------------------------
// Tonic Service Wiring
// ---------------------------------------------------------------------------
// We define a single gRPC service with one method: `Call`.
// The request and response are raw bytes (JSON-encoded JsonRpcRequest/Response).

/// The tonic service wrapper. Implements the low-level gRPC service
/// by accepting bytes, deserializing as JSON-RPC, and dispatching.
#[derive(Clone)]
pub struct ShippingJsonRpcServer {
    repo: Arc<dyn ConsignmentRepository>,
}

impl std::fmt::Debug for ShippingJsonRpcServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShippingJsonRpcServer").finish()
    }
}

impl ShippingJsonRpcServer {
    /// Wrap a repository in the JSON-RPC tower service.
    pub fn new(repo: Arc<dyn ConsignmentRepository>) -> Self {
        Self { repo }
    }
}

impl tonic::server::NamedService for ShippingJsonRpcServer {
    const NAME: &'static str = SERVICE_NAME;
}

impl<B> tower_service::Service<http::Request<B>> for ShippingJsonRpcServer
where
    B: HttpBody + Send + 'static,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>> + Send,
    B::Data: Send,
{
    type Response = http::Response<tonic::body::BoxBody>;
    type Error = std::convert::Infallible;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        _cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        std::task::Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<B>) -> Self::Future {
        let repo = self.repo.clone();

        Box::pin(async move {
            if req.uri().path() != RPC_PATH {
                let err = RpcError::UnknownPath(req.uri().path().to_string());
                tracing::warn!("{}", err);
                return Ok(error_response(&err));
            }

            let body_bytes = match req.into_body().collect().await {
                Ok(collected) => collected.to_bytes(),
                Err(e) => {
                    let e: Box<dyn std::error::Error + Send + Sync> = e.into();
                    let err = RpcError::InvalidRequest(format!("Failed to read request body: {}", e));
                    tracing::error!("{}", err);
                    return Ok(error_response(&err));
                }
            };

            let rpc_request: JsonRpcRequest = match serde_json::from_slice(&body_bytes) {
                Ok(r) => r,
                Err(e) => {
                    let err = RpcError::InvalidRequest(format!("Invalid JSON-RPC request: {}", e));
                    return Ok(error_response(&err));
                }
            };

            let method = rpc_request.method.clone();
            match dispatch(&repo, rpc_request).await {
                Ok(value) => Ok(build_response(StatusCode::OK, &JsonRpcResponse::ok(value))),
                Err(err) => {
                    tracing::warn!("RPC method {} failed: {}", method, err);
                    Ok(error_response(&err))
                }
            }
        })
    }
}

/// Build the failure envelope for an error, with its matching HTTP status.
fn error_response(err: &RpcError) -> http::Response<tonic::body::BoxBody> {
    build_response(err.status_code(), &JsonRpcResponse::failed(err))
}

/// Build an HTTP response with the given status and JSON envelope.
fn build_response(
    status: StatusCode,
    envelope: &JsonRpcResponse,
) -> http::Response<tonic::body::BoxBody> {
    let json = serde_json::to_vec(envelope).unwrap_or_default();
    let body = tonic::body::BoxBody::new(
        http_body_util::Full::new(bytes::Bytes::from(json))
            .map_err(|e| Status::internal(format!("body error: {}", e))),
    );

    let mut response = http::Response::new(body);
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_config_is_local_50051() {
        let config = RpcConfig::default();
        assert_eq!(
            config.socket_addr().await.unwrap().to_string(),
            "127.0.0.1:50051"
        );
    }

    #[tokio::test]
    async fn test_localhost_resolves_to_loopback() {
        let config = RpcConfig {
            host: "localhost".to_string(),
            port: 50978,
        };
        let addr = config.socket_addr().await.unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 50978);
    }

    #[tokio::test]
    async fn test_bad_host_error_names_the_address() {
        let config = RpcConfig {
            host: "not a host".to_string(),
            port: 1,
        };
        let err = config.socket_addr().await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
        assert!(err
            .to_string()
            .starts_with("invalid RPC address not a host:1:"));
    }

    #[test]
    fn test_rpc_path_matches_service_name() {
        assert_eq!(RPC_PATH, format!("/{}/Call", SERVICE_NAME));
    }

    #[test]
    fn test_envelope_params_default_to_null() {
        let req: JsonRpcRequest =
            serde_json::from_str(r#"{"method":"consignment/list"}"#).unwrap();
        assert!(req.params.is_null());
    }
}
