//! Configuration validation.
//!
//! Serde handles the syntactic side; this module performs the semantic
//! checks (addresses parse, URLs parse, timeouts are nonzero) and returns
//! all validation errors, not just the first.

use std::net::SocketAddr;

use alloy::primitives::Address;
use thiserror::Error;
use url::Url;

use crate::config::schema::FacilitatorConfig;

/// A single semantic configuration failure.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: '{value}' is not a valid EVM address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field}: '{value}' is not a valid URL")]
    InvalidUrl { field: &'static str, value: String },

    #[error("{field}: '{value}' is not a valid socket address")]
    InvalidSocketAddr { field: &'static str, value: String },

    #[error("{field}: timeout must be greater than zero")]
    ZeroTimeout { field: &'static str },
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<Address>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

fn check_url(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<Url>().is_err() {
        errors.push(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
        });
    }
}

/// Validate a deserialized configuration.
pub fn validate_config(config: &FacilitatorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_url(&mut errors, "origin.rpc_url", &config.origin.rpc_url);
    check_url(&mut errors, "auxiliary.rpc_url", &config.auxiliary.rpc_url);

    check_address(
        &mut errors,
        "origin.gateway_address",
        &config.origin.gateway_address,
    );
    check_address(
        &mut errors,
        "auxiliary.cogateway_address",
        &config.auxiliary.cogateway_address,
    );
    check_address(
        &mut errors,
        "auxiliary.deployer_address",
        &config.auxiliary.deployer_address,
    );

    if config.origin.rpc_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout {
            field: "origin.rpc_timeout_secs",
        });
    }
    if config.auxiliary.rpc_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout {
            field: "auxiliary.rpc_timeout_secs",
        });
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidSocketAddr {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
