// crates/shippy-daemon/src/config.rs
//
// Runtime configuration for the Shippy daemon.
// Loaded from a TOML file or populated with sensible defaults.

use serde::Deserialize;
use std::fs;

use shippy_rpc::RpcConfig;

/// Runtime configuration for the daemon.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DaemonConfig {
    /// Host address for the RPC server.
    #[serde(default = "default_rpc_host")]
    pub rpc_host: String,

    /// Port for the RPC server.
    #[serde(default = "default_rpc_port")]
    pub rpc_port: u16,

    /// Log level: "trace", "debug", "info", "warn", "error".
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_rpc_host() -> String {
    "127.0.0.1".to_string()
}

fn default_rpc_port() -> u16 {
    50051
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            rpc_host: default_rpc_host(),
            rpc_port: default_rpc_port(),
            log_level: default_log_level(),
        }
    }
}

impl DaemonConfig {
    /// Load configuration from a TOML file at the given path.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from TOML text. Missing keys take their defaults.
    pub fn parse(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: DaemonConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.rpc_host = host;
        }
        if let Some(port) = port {
            self.rpc_port = port;
        }
        self
    }

    /// The RPC server configuration derived from this daemon config.
    pub fn rpc_config(&self) -> RpcConfig {
        RpcConfig {
            host: self.rpc_host.clone(),
            port: self.rpc_port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = DaemonConfig::parse("").unwrap();
        assert_eq!(config, DaemonConfig::default());
        assert_eq!(config.rpc_config(), RpcConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = DaemonConfig::parse("rpc_port = 6000\n").unwrap();
        assert_eq!(config.rpc_port, 6000);
        assert_eq!(config.rpc_host, "127.0.0.1");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_full_file() {
        let config = DaemonConfig::parse(
            r#"
            rpc_host = "0.0.0.0"
            rpc_port = 7000
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.rpc_host, "0.0.0.0");
        assert_eq!(config.rpc_port, 7000);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        assert!(DaemonConfig::parse("rpc_port = \"fifty\"").is_err());
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let config = DaemonConfig::default().with_overrides(Some("0.0.0.0".to_string()), Some(9000));
        assert_eq!(config.rpc_host, "0.0.0.0");
        assert_eq!(config.rpc_port, 9000);

        let untouched = DaemonConfig::default().with_overrides(None, None);
        assert_eq!(untouched, DaemonConfig::default());
    }

    #[test]
    fn test_load_reads_file_and_reports_missing() {
        let path = std::env::temp_dir().join(format!("shippy_config_{}.toml", uuid::Uuid::now_v7()));
        fs::write(&path, "rpc_port = 6100\n").unwrap();

        let config = DaemonConfig::load(&path.to_string_lossy()).unwrap();
        assert_eq!(config.rpc_port, 6100);

        fs::remove_file(&path).unwrap();
        assert!(DaemonConfig::load(&path.to_string_lossy()).is_err());
    }
}
