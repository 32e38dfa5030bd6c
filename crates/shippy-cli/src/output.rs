// crates/shippy-cli/src/output.rs
//
// Output formatting utilities for the Shippy CLI.
// Supports table and JSON output modes.

use serde::Serialize;
use tabled::{Table, Tabled};

use shippy_core::Consignment;

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed table output (default).
    Table,
    /// JSON output for machine consumption.
    Json,
}

impl OutputFormat {
    /// Pick the format from the global `--json` flag.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }
}

/// One table row per consignment. Containers are summarised as a count.
#[derive(Debug, Tabled)]
pub struct ConsignmentRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Weight")]
    pub weight: i32,
    #[tabled(rename = "Containers")]
    pub containers: usize,
    #[tabled(rename = "Vessel")]
    pub vessel_id: String,
}

impl From<&Consignment> for ConsignmentRow {
    fn from(c: &Consignment) -> Self {
        Self {
            id: c.id.clone(),
            description: c.description.clone(),
            weight: c.weight,
            containers: c.containers.len(),
            vessel_id: c.vessel_id.clone(),
        }
    }
}

/// Format a slice of Tabled items as a table string.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data).to_string()
}

/// Format a serializable value as a pretty-printed JSON string.
pub fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| format!("JSON serialization error: {}", e))
}

/// Render consignments in the requested format.
pub fn format_consignments(consignments: &[Consignment], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => format_json(&consignments),
        OutputFormat::Table => {
            let rows: Vec<ConsignmentRow> = consignments.iter().map(ConsignmentRow::from).collect();
            format_table(&rows)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use shippy_core::Container;

    fn sample() -> Consignment {
        Consignment {
            id: "c1".to_string(),
            description: "Test consignment".to_string(),
            weight: 550,
            containers: vec![Container::default(), Container::default()],
            vessel_id: "vessel001".to_string(),
        }
    }

    #[test]
    fn test_table_contains_headers_and_values() {
        let table = format_consignments(&[sample()], OutputFormat::Table);
        assert!(table.contains("ID"));
        assert!(table.contains("Vessel"));
        assert!(table.contains("c1"));
        assert!(table.contains("550"));
        assert!(table.contains("vessel001"));
    }

    #[test]
    fn test_row_counts_containers() {
        let row = ConsignmentRow::from(&sample());
        assert_eq!(row.containers, 2);
    }

    #[test]
    fn test_json_output_parses_back() {
        let out = format_consignments(&[sample()], OutputFormat::Json);
        let parsed: Vec<Consignment> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, vec![sample()]);
    }

    #[test]
    fn test_format_from_flag() {
        assert_eq!(OutputFormat::from_json_flag(true), OutputFormat::Json);
        assert_eq!(OutputFormat::from_json_flag(false), OutputFormat::Table);
    }
}
