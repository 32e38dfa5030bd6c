// crates/shippy-cli/src/commands/status.rs
//
// `shippy status`: display daemon health and stored consignment count.

use shippy_rpc::handlers::node::{GetHealthRequest, GetHealthResponse};

use crate::output::{format_json, OutputFormat};
use crate::rpc_client::RpcClient;

/// Run the status command.
pub async fn run(client: &RpcClient, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let health: GetHealthResponse = client.call("node/health", &GetHealthRequest {}).await?;

    match format {
        OutputFormat::Json => println!("{}", format_json(&health)),
        OutputFormat::Table => {
            println!("Shippy Daemon Status");
            println!("====================");
            println!("  Endpoint:     {}", client.url());
            println!("  Version:      {}", health.version);
            println!("  Status:       {}", health.status);
            println!("  Storage:      {}", if health.storage_ok { "ok" } else { "failing" });
            println!("  Consignments: {}", health.consignment_count);
            if let Some(details) = &health.details {
                println!("  Details:      {}", details);
            }
        }
    }

    Ok(())
}
