//! Bridge client: the seam between the facilitator and the gateway pair.
//!
//! Everything the facilitator needs from the outside world — hash-lock
//! generation, transaction submission, outbox and nonce reads — goes
//! through the [`BridgeClient`] trait. The production implementation,
//! [`GatewayBridgeClient`], drives the origin gateway and auxiliary
//! co-gateway through their typed bindings. Tests substitute a recording
//! mock.

use alloy::primitives::{keccak256, Address, TxHash, B256, U256};
use async_trait::async_trait;
use rand::rngs::OsRng;
use rand::RngCore;
use tokio::time::timeout;

use crate::chain::client::ChainClient;
use crate::chain::gateway::{EIP20CoGateway, EIP20Gateway};
use crate::chain::types::{ActiveProcess, ChainError, ChainResult, TxOptions, UnlockSecret};
use crate::config::FacilitatorConfig;
use crate::facilitator::types::{StakeIntent, StakeRequest};

/// External collaborator capability for the stake flow.
#[async_trait]
pub trait BridgeClient: Send + Sync {
    /// Produce a fresh (hash lock, unlock secret) commitment pair.
    fn create_hash_lock(&self) -> (B256, UnlockSecret);

    /// Submit a stake-initiation transaction on the origin chain and wait
    /// for inclusion.
    async fn submit_stake(&self, intent: &StakeIntent) -> ChainResult<TxHash>;

    /// Read the gateway's active outbox process for a staker.
    async fn outbox_active_process(&self, staker: Address) -> ChainResult<ActiveProcess>;

    /// Read a staker's next outbox message nonce.
    async fn staker_nonce(&self, staker: Address) -> ChainResult<U256>;

    /// Submit the stake-progression transactions: reveal the unlock secret
    /// to the origin gateway, then to the auxiliary co-gateway.
    async fn submit_progress(
        &self,
        request: &StakeRequest,
        auxiliary: &TxOptions,
    ) -> ChainResult<TxHash>;
}

/// Production bridge client over the deployed gateway contract pair.
#[derive(Debug)]
pub struct GatewayBridgeClient {
    origin: ChainClient,
    auxiliary: ChainClient,
    gateway_address: Address,
    cogateway_address: Address,
}

impl GatewayBridgeClient {
    /// Connect to both chains and bind the gateway addresses.
    pub async fn connect(config: &FacilitatorConfig) -> ChainResult<Self> {
        let gateway_address: Address = config.origin.gateway_address.parse().map_err(|e| {
            ChainError::Rpc(format!(
                "Invalid gateway address '{}': {}",
                config.origin.gateway_address, e
            ))
        })?;
        let cogateway_address: Address =
            config.auxiliary.cogateway_address.parse().map_err(|e| {
                ChainError::Rpc(format!(
                    "Invalid co-gateway address '{}': {}",
                    config.auxiliary.cogateway_address, e
                ))
            })?;

        let origin = ChainClient::connect(
            "origin",
            &config.origin.rpc_url,
            config.origin.chain_id,
            config.origin.rpc_timeout_secs,
        )
        .await?;
        let auxiliary = ChainClient::connect(
            "auxiliary",
            &config.auxiliary.rpc_url,
            config.auxiliary.chain_id,
            config.auxiliary.rpc_timeout_secs,
        )
        .await?;

        Ok(Self {
            origin,
            auxiliary,
            gateway_address,
            cogateway_address,
        })
    }

    /// Origin chain client, for health probes.
    pub fn origin(&self) -> &ChainClient {
        &self.origin
    }

    /// Auxiliary chain client, for health probes.
    pub fn auxiliary(&self) -> &ChainClient {
        &self.auxiliary
    }
}

#[async_trait]
impl BridgeClient for GatewayBridgeClient {
    fn create_hash_lock(&self) -> (B256, UnlockSecret) {
        let mut secret = [0u8; 32];
        OsRng.fill_bytes(&mut secret);
        let hash_lock = keccak256(secret);
        (hash_lock, UnlockSecret::new(B256::from(secret)))
    }

    async fn submit_stake(&self, intent: &StakeIntent) -> ChainResult<TxHash> {
        let gateway = EIP20Gateway::new(self.gateway_address, self.origin.provider());

        // The gateway entry point requires the message nonce up front; the
        // facilitator-facing API does not take one, so read the staker's
        // counter here as part of submission.
        let nonce = self.staker_nonce(intent.staker).await?;

        let call = gateway
            .stake(
                intent.amount,
                intent.beneficiary,
                intent.gas_price,
                intent.gas_limit,
                nonce,
                intent.hash_lock,
            )
            .from(intent.tx_options.from)
            .gas_price(intent.tx_options.gas_price as u128);

        let pending = timeout(self.origin.timeout_duration(), call.send())
            .await
            .map_err(|_| self.origin.timeout_error())?
            .map_err(|e| ChainError::Submission(format!("stake: {}", e)))?;

        // Inclusion wait is handled by the provider's own watcher; the
        // per-request RPC timeout does not bound it.
        let tx_hash = pending
            .watch()
            .await
            .map_err(|e| ChainError::Submission(format!("stake: {}", e)))?;

        tracing::debug!(tx_hash = %tx_hash, staker = %intent.staker, "Stake transaction included");
        Ok(tx_hash)
    }

    async fn outbox_active_process(&self, staker: Address) -> ChainResult<ActiveProcess> {
        let gateway = EIP20Gateway::new(self.gateway_address, self.origin.provider());

        let call = gateway.getOutboxActiveProcess(staker);
        let fut = call.call();
        let process = timeout(self.origin.timeout_duration(), fut)
            .await
            .map_err(|_| self.origin.timeout_error())?
            .map_err(|e| ChainError::Call(format!("getOutboxActiveProcess: {}", e)))?;

        Ok(ActiveProcess {
            message_bucket: process.messageBucket_,
            message_hash: process.messageHash_,
        })
    }

    async fn staker_nonce(&self, staker: Address) -> ChainResult<U256> {
        let gateway = EIP20Gateway::new(self.gateway_address, self.origin.provider());

        let call = gateway.getNonce(staker);
        let fut = call.call();
        let nonce = timeout(self.origin.timeout_duration(), fut)
            .await
            .map_err(|_| self.origin.timeout_error())?
            .map_err(|e| ChainError::Call(format!("getNonce: {}", e)))?;

        Ok(nonce)
    }

    async fn submit_progress(
        &self,
        request: &StakeRequest,
        auxiliary: &TxOptions,
    ) -> ChainResult<TxHash> {
        let secret = request.unlock_secret.reveal();

        let gateway = EIP20Gateway::new(self.gateway_address, self.origin.provider());
        let call = gateway
            .progressStake(request.message_hash, secret)
            .from(request.tx_options.from)
            .gas_price(request.tx_options.gas_price as u128);

        let pending = timeout(self.origin.timeout_duration(), call.send())
            .await
            .map_err(|_| self.origin.timeout_error())?
            .map_err(|e| ChainError::Submission(format!("progressStake: {}", e)))?;
        let origin_tx = pending
            .watch()
            .await
            .map_err(|e| ChainError::Submission(format!("progressStake: {}", e)))?;

        let cogateway = EIP20CoGateway::new(self.cogateway_address, self.auxiliary.provider());
        let call = cogateway
            .progressMint(request.message_hash, secret)
            .from(auxiliary.from)
            .gas_price(auxiliary.gas_price as u128);

        let pending = timeout(self.auxiliary.timeout_duration(), call.send())
            .await
            .map_err(|_| self.auxiliary.timeout_error())?
            .map_err(|e| ChainError::Submission(format!("progressMint: {}", e)))?;
        let mint_tx = pending
            .watch()
            .await
            .map_err(|e| ChainError::Submission(format!("progressMint: {}", e)))?;

        tracing::debug!(
            origin_tx = %origin_tx,
            mint_tx = %mint_tx,
            message_hash = %request.message_hash,
            "Progression transactions included"
        );
        Ok(origin_tx)
    }
}
