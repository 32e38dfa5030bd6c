// crates/shippy-cli/src/main.rs
//
// CLI entrypoint for the Shippy consignment client.
//
// Provides subcommands for submitting consignments, listing everything
// stored, and checking daemon health.

mod commands;
mod output;
mod rpc_client;

use clap::{Parser, Subcommand};
use commands::consignment::CreateCmd;
use output::OutputFormat;
use rpc_client::RpcClient;

/// Shippy CLI: submit and list consignments on a shippy-daemon.
#[derive(Parser, Debug)]
#[command(
    name = "shippy",
    version = "0.1.0",
    about = "Command-line client for the Shippy consignment service"
)]
struct Cli {
    /// RPC endpoint for the shippy-daemon.
    #[arg(long, global = true, default_value = "http://localhost:50051")]
    rpc: String,

    /// Print JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Submit a consignment, from flags or a JSON file.
    Create(CreateCmd),

    /// List every consignment stored on the daemon.
    List,

    /// Display daemon health and consignment count.
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = RpcClient::new(&cli.rpc);
    let format = OutputFormat::from_json_flag(cli.json);

    match &cli.command {
        Commands::Create(cmd) => commands::consignment::run_create(&client, cmd, format).await?,
        Commands::List => commands::consignment::run_list(&client, format).await?,
        Commands::Status => commands::status::run(&client, format).await?,
    }

    Ok(())
}
