// crates/shippy-cli/src/commands/consignment.rs
//
// `shippy create` and `shippy list`: consignment commands.

use std::path::PathBuf;

use clap::Args;

use shippy_core::Consignment;
use shippy_rpc::handlers::consignment::{ConsignmentResponse, GetRequest};

use crate::output::{format_consignments, format_json, OutputFormat};
use crate::rpc_client::RpcClient;

/// Arguments for `shippy create`.
#[derive(Debug, Args)]
pub struct CreateCmd {
    /// Read the consignment from a JSON file instead of the flags below.
    #[arg(long, conflicts_with_all = ["id", "description", "weight", "vessel_id"])]
    pub file: Option<PathBuf>,
    /// Consignment ID (default: a fresh UUID).
    #[arg(long)]
    pub id: Option<String>,
    /// Free-form description of the cargo.
    #[arg(long, default_value = "")]
    pub description: String,
    /// Total weight.
    #[arg(long, default_value_t = 0)]
    pub weight: i32,
    /// Vessel the consignment is booked on.
    #[arg(long, default_value = "")]
    pub vessel_id: String,
}

impl CreateCmd {
    /// Build the consignment to submit, from the file if one was given.
    pub fn consignment(&self) -> Result<Consignment, Box<dyn std::error::Error>> {
        if let Some(path) = &self.file {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
            let consignment: Consignment = serde_json::from_str(&contents)
                .map_err(|e| format!("Invalid consignment in {}: {}", path.display(), e))?;
            return Ok(consignment);
        }

        Ok(Consignment {
            id: self
                .id
                .clone()
                .unwrap_or_else(|| uuid::Uuid::now_v7().to_string()),
            description: self.description.clone(),
            weight: self.weight,
            containers: Vec::new(),
            vessel_id: self.vessel_id.clone(),
        })
    }
}

/// Run `shippy create`.
pub async fn run_create(
    client: &RpcClient,
    cmd: &CreateCmd,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let consignment = cmd.consignment()?;
    let resp: ConsignmentResponse = client.call("consignment/create", &consignment).await?;

    match format {
        OutputFormat::Json => println!("{}", format_json(&resp)),
        OutputFormat::Table => {
            println!("Created: {}", resp.created);
            if let Some(stored) = &resp.consignment {
                println!("{}", format_consignments(std::slice::from_ref(stored), format));
            }
        }
    }

    Ok(())
}

/// Run `shippy list`.
pub async fn run_list(
    client: &RpcClient,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let resp: ConsignmentResponse = client.call("consignment/list", &GetRequest {}).await?;

    if resp.consignments.is_empty() && format == OutputFormat::Table {
        println!("No consignments stored.");
        return Ok(());
    }
    println!("{}", format_consignments(&resp.consignments, format));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags_only(id: Option<&str>) -> CreateCmd {
        CreateCmd {
            file: None,
            id: id.map(str::to_string),
            description: "Test consignment".to_string(),
            weight: 550,
            vessel_id: "vessel001".to_string(),
        }
    }

    #[test]
    fn test_flags_build_consignment() {
        let c = flags_only(Some("c1")).consignment().unwrap();
        assert_eq!(c.id, "c1");
        assert_eq!(c.weight, 550);
        assert_eq!(c.vessel_id, "vessel001");
        assert!(c.containers.is_empty());
    }

    #[test]
    fn test_missing_id_gets_generated() {
        let a = flags_only(None).consignment().unwrap();
        let b = flags_only(None).consignment().unwrap();
        assert!(uuid::Uuid::parse_str(&a.id).is_ok());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_file_builds_consignment() {
        let path = std::env::temp_dir().join(format!("shippy_consignment_{}.json", uuid::Uuid::now_v7()));
        std::fs::write(
            &path,
            r#"{"id":"f1","weight":10,"containers":[{"customer_id":"cust001"}]}"#,
        )
        .unwrap();

        let cmd = CreateCmd {
            file: Some(path.clone()),
            id: None,
            description: String::new(),
            weight: 0,
            vessel_id: String::new(),
        };
        let c = cmd.consignment().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(c.id, "f1");
        assert_eq!(c.containers[0].customer_id, "cust001");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let cmd = CreateCmd {
            file: Some(PathBuf::from("/nonexistent/shippy/consignment.json")),
            id: None,
            description: String::new(),
            weight: 0,
            vessel_id: String::new(),
        };
        let err = cmd.consignment().unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
