//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::FacilitatorConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<FacilitatorConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: FacilitatorConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_TOML: &str = r#"
        [origin]
        rpc_url = "http://localhost:8545"
        gateway_address = "0x97BA58DBE58898F2B669C56496f46F638DC75b28"

        [auxiliary]
        rpc_url = "http://localhost:8547"
        cogateway_address = "0x40ce8B8EB48F3c5540B44D7e46592C6b9d488202"
        deployer_address = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        gas_price = 0
    "#;

    #[test]
    fn test_load_valid_file() {
        let path = std::env::temp_dir().join("facilitator_loader_valid.toml");
        fs::write(&path, VALID_TOML).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.auxiliary.gas_price, 0);
        assert_eq!(config.origin.chain_id, 3);

        fs::remove_file(&path).unwrap_or_default();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/facilitator.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let path = std::env::temp_dir().join("facilitator_loader_bad.toml");
        fs::write(&path, "[origin\nrpc_url = ").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        fs::remove_file(&path).unwrap_or_default();
    }

    #[test]
    fn test_unconfigured_addresses_fail_validation() {
        let path = std::env::temp_dir().join("facilitator_loader_empty.toml");
        fs::write(&path, "").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("gateway_address"));

        fs::remove_file(&path).unwrap_or_default();
    }
}
