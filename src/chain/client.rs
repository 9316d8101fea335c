//! Chain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to a JSON-RPC endpoint
//! - Query chain state (block number, nonce counters)
//! - Handle timeouts and network errors gracefully
//! - Provide a health check for chain connectivity
//!
//! There is no failover or retry here: a failed call surfaces to the
//! caller immediately.

use std::time::Duration;

use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use tokio::time::timeout;

use crate::chain::types::{ChainError, ChainResult};

/// RPC client for a single chain endpoint.
#[derive(Clone)]
pub struct ChainClient {
    /// The underlying provider.
    provider: DynProvider,
    /// Role label for log lines ("origin" or "auxiliary").
    label: &'static str,
    /// Chain ID this client expects to be talking to.
    chain_id: u64,
    /// Request timeout duration.
    timeout_duration: Duration,
}

impl ChainClient {
    /// Connect to a chain endpoint.
    ///
    /// The remote chain ID is verified against `chain_id`; a mismatch is
    /// logged as a warning without failing construction, so the facilitator
    /// can start while a node is still syncing or unreachable.
    pub async fn connect(
        label: &'static str,
        rpc_url: &str,
        chain_id: u64,
        rpc_timeout_secs: u64,
    ) -> ChainResult<Self> {
        let url: url::Url = rpc_url
            .parse()
            .map_err(|e| ChainError::Rpc(format!("Invalid RPC URL '{}': {}", rpc_url, e)))?;

        let provider: DynProvider = ProviderBuilder::new().connect_http(url).erased();

        let client = Self {
            provider,
            label,
            chain_id,
            timeout_duration: Duration::from_secs(rpc_timeout_secs),
        };

        match client.verify_chain_id().await {
            Ok(()) => {
                tracing::info!(
                    chain = label,
                    rpc_url = %rpc_url,
                    chain_id = chain_id,
                    "Chain client initialized"
                );
            }
            Err(e) => {
                tracing::warn!(
                    chain = label,
                    error = %e,
                    "Chain client initialized but chain verification failed"
                );
            }
        }

        Ok(client)
    }

    /// Verify the connected chain ID matches configuration.
    pub async fn verify_chain_id(&self) -> ChainResult<()> {
        let actual = self.get_chain_id().await?;
        if actual != self.chain_id {
            return Err(ChainError::ChainMismatch {
                expected: self.chain_id,
                actual,
            });
        }
        Ok(())
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> ChainResult<u64> {
        self.timed(self.provider.get_chain_id()).await
    }

    /// Get the latest block number.
    pub async fn get_block_number(&self) -> ChainResult<u64> {
        self.timed(self.provider.get_block_number()).await
    }

    /// Get the transaction count (account nonce) for an address.
    pub async fn get_transaction_count(&self, address: Address) -> ChainResult<u64> {
        self.timed(self.provider.get_transaction_count(address))
            .await
    }

    /// Check if the chain is reachable and healthy.
    pub async fn is_healthy(&self) -> bool {
        self.get_block_number().await.is_ok()
    }

    /// The underlying provider, for contract bindings.
    pub fn provider(&self) -> DynProvider {
        self.provider.clone()
    }

    /// Role label for log lines.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Request timeout for calls issued against this chain.
    pub fn timeout_duration(&self) -> Duration {
        self.timeout_duration
    }

    /// Map a timeout elapse to the error this client reports for it.
    pub fn timeout_error(&self) -> ChainError {
        ChainError::Timeout(self.timeout_duration.as_secs())
    }

    async fn timed<T, E>(
        &self,
        fut: impl std::future::IntoFuture<Output = Result<T, E>>,
    ) -> ChainResult<T>
    where
        E: std::fmt::Display,
    {
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                tracing::warn!(chain = self.label, error = %e, "RPC error");
                Err(ChainError::Rpc(e.to_string()))
            }
            Err(_) => {
                tracing::warn!(chain = self.label, "RPC timeout");
                Err(self.timeout_error())
            }
        }
    }
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("label", &self.label)
            .field("chain_id", &self.chain_id)
            .field("timeout", &self.timeout_duration)
            .finish()
    }
}
