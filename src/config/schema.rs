//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! facilitator. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the stake facilitator.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FacilitatorConfig {
    /// Origin chain settings (where value is locked).
    pub origin: OriginConfig,

    /// Auxiliary chain settings (where the representation is minted).
    pub auxiliary: AuxiliaryConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Origin chain configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OriginConfig {
    /// JSON-RPC endpoint of the origin chain node.
    pub rpc_url: String,

    /// Expected chain ID, verified against the node at startup.
    pub chain_id: u64,

    /// Timeout for individual RPC requests in seconds.
    pub rpc_timeout_secs: u64,

    /// Address of the deployed EIP20 gateway contract.
    pub gateway_address: String,

    /// Gas price in wei for origin-chain submissions.
    pub gas_price: u64,
}

impl Default for OriginConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            chain_id: 3,
            rpc_timeout_secs: 10,
            gateway_address: String::new(),
            gas_price: 1_000_000_000,
        }
    }
}

/// Auxiliary chain configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuxiliaryConfig {
    /// JSON-RPC endpoint of the auxiliary chain node.
    pub rpc_url: String,

    /// Expected chain ID, verified against the node at startup.
    pub chain_id: u64,

    /// Timeout for individual RPC requests in seconds.
    pub rpc_timeout_secs: u64,

    /// Address of the deployed EIP20 co-gateway contract.
    pub cogateway_address: String,

    /// Gas price in wei for auxiliary-chain submissions.
    pub gas_price: u64,

    /// Account that signs auxiliary-chain submissions. The auxiliary node
    /// holds the key for this account.
    pub deployer_address: String,
}

impl Default for AuxiliaryConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8547".to_string(),
            chain_id: 200,
            rpc_timeout_secs: 10,
            cogateway_address: String::new(),
            gas_price: 1_000_000_000,
            deployer_address: String::new(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Enable the Prometheus metrics exporter.
    pub metrics_enabled: bool,

    /// Bind address for the metrics endpoint.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9615".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FacilitatorConfig::default();
        assert_eq!(config.origin.rpc_timeout_secs, 10);
        assert_eq!(config.auxiliary.chain_id, 200);
        assert!(!config.observability.metrics_enabled);
        assert!(config.origin.gateway_address.is_empty());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let toml = r#"
            [origin]
            gateway_address = "0x97BA58DBE58898F2B669C56496f46F638DC75b28"
        "#;
        let config: FacilitatorConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            config.origin.gateway_address,
            "0x97BA58DBE58898F2B669C56496f46F638DC75b28"
        );
        // Untouched sections keep their defaults.
        assert_eq!(config.origin.rpc_url, "http://localhost:8545");
        assert_eq!(config.auxiliary.rpc_url, "http://localhost:8547");
    }
}
