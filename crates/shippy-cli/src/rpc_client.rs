// crates/shippy-cli/src/rpc_client.rs
//
// Lightweight JSON-RPC client that POSTs envelopes to the shippy-daemon endpoint.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use shippy_rpc::{JsonRpcRequest, JsonRpcResponse, RPC_PATH};

/// Errors returned by [`RpcClient::call`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The daemon could not be reached or did not answer with an envelope.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The daemon answered but reported the call as failed.
    #[error("RPC call failed ({status}): {message}")]
    Rpc { status: u16, message: String },

    /// A successful envelope carried no result.
    #[error("RPC call returned no result")]
    EmptyResult,

    /// Params could not be encoded or the result could not be decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Client bound to a single daemon endpoint.
#[derive(Debug, Clone)]
pub struct RpcClient {
    endpoint: String,
    http: reqwest::Client,
}

impl RpcClient {
    /// Create a client for the daemon at `endpoint` (e.g. "http://localhost:50051").
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Full URL envelopes are posted to.
    pub fn url(&self) -> String {
        format!("{}{}", self.endpoint, RPC_PATH)
    }

    /// Send a JSON-RPC call to the daemon and decode its result.
    pub async fn call<P, R>(&self, method: &str, params: &P) -> Result<R, ClientError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let request = JsonRpcRequest {
            method: method.to_string(),
            params: serde_json::to_value(params)?,
        };

        let resp = self.http.post(self.url()).json(&request).send().await?;
        let status = resp.status().as_u16();
        let rpc_response: JsonRpcResponse = resp.json().await?;

        if !rpc_response.success {
            return Err(ClientError::Rpc {
                status,
                message: rpc_response
                    .error
                    .unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        let result = rpc_response.result.ok_or(ClientError::EmptyResult)?;
        Ok(serde_json::from_value(result)?)
    }
}
