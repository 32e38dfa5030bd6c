// crates/shippy-rpc/src/middleware.rs
//
// Middleware for the RPC server.

use tonic::{Request, Status};

/// Logging interceptor for tonic gRPC requests.
///
/// Logs the metadata of each incoming request using the `tracing` crate.
pub fn logging_interceptor(req: Request<()>) -> Result<Request<()>, Status> {
    tracing::info!("Incoming RPC request: {:?}", req.metadata());
    Ok(req)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interceptor_passes_request_through() {
        let mut req = Request::new(());
        req.metadata_mut()
            .insert("x-request-id", "abc123".parse().unwrap());
        let out = logging_interceptor(req).unwrap();
        assert_eq!(
            out.metadata().get("x-request-id").unwrap().to_str().unwrap(),
            "abc123"
        );
    }
}
