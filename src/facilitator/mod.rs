//! Stake facilitation core.
//!
//! # Data Flow
//! ```text
//! initiate_stake(staker, amount, beneficiary)
//!     → bridge: hash-lock pair, stake submission
//!     → bridge: outbox read (message hash), nonce read
//!     → store: insert pending request keyed by message hash
//!     → caller: StakeReceipt { message_hash, unlock_secret, nonce }
//!
//! progress_stake(message_hash)
//!     → store: look up pending request (hard failure if absent)
//!     → bridge: progression on origin gateway + auxiliary co-gateway
//! ```
//!
//! A stake moves through `Created` (intent built) → `Initiated` (submitted,
//! stored) → `Progressed` (terminal). A failed progression leaves the entry
//! in `Initiated`; re-invoking `progress_stake` with the same message hash
//! retries it. Progression is not idempotent: each successful call submits
//! again.

pub mod types;

use std::sync::Arc;

use alloy::primitives::{Address, B256, U256};
use thiserror::Error;
use tracing::{error, info};

use crate::bridge::BridgeClient;
use crate::chain::types::{ChainError, TxOptions};
use crate::config::FacilitatorConfig;
use crate::observability::metrics;
use crate::store::StakeStore;

pub use types::{StakeIntent, StakeReceipt, StakeRequest};

/// Errors surfaced by the facilitator operations.
#[derive(Debug, Error)]
pub enum FacilitatorError {
    /// Progression was requested for a message hash with no pending
    /// request. No chain call is made in this case.
    #[error("No stake request found")]
    RequestNotFound,

    /// A stake of zero was requested.
    #[error("Stake amount must be greater than zero")]
    ZeroAmount,

    /// A failure surfaced from the chain layer, propagated unmodified.
    #[error(transparent)]
    Chain(#[from] ChainError),
}

/// Result type for facilitator operations.
pub type FacilitatorResult<T> = Result<T, FacilitatorError>;

/// Orchestrates the two-transaction stake flow against the gateway pair.
///
/// Holds no chain state of its own: everything chain-side goes through the
/// bridge client, and pending requests live in the store. Concurrent
/// stakes from distinct stakers are safe; two concurrent stakes from the
/// same staker race on the nonce read-back and must be serialized by the
/// caller.
pub struct StakeFacilitator {
    bridge: Arc<dyn BridgeClient>,
    store: Arc<dyn StakeStore>,
    origin_gas_price: u64,
    auxiliary_gas_price: u64,
    auxiliary_deployer: Address,
}

impl StakeFacilitator {
    /// Build a facilitator over a bridge client and a pending-request
    /// store.
    pub fn new(
        bridge: Arc<dyn BridgeClient>,
        store: Arc<dyn StakeStore>,
        config: &FacilitatorConfig,
    ) -> FacilitatorResult<Self> {
        let auxiliary_deployer: Address =
            config.auxiliary.deployer_address.parse().map_err(|e| {
                ChainError::Rpc(format!(
                    "Invalid deployer address '{}': {}",
                    config.auxiliary.deployer_address, e
                ))
            })?;

        Ok(Self {
            bridge,
            store,
            origin_gas_price: config.origin.gas_price,
            auxiliary_gas_price: config.auxiliary.gas_price,
            auxiliary_deployer,
        })
    }

    /// Initiate a stake: lock `amount` for `staker` on the origin chain,
    /// to be minted for `beneficiary` on the auxiliary chain.
    ///
    /// Returns the chain-assigned message hash, the unlock secret the
    /// caller must keep to progress the stake, and the message nonce.
    pub async fn initiate_stake(
        &self,
        staker: Address,
        amount: U256,
        beneficiary: Address,
    ) -> FacilitatorResult<StakeReceipt> {
        if amount.is_zero() {
            return Err(FacilitatorError::ZeroAmount);
        }

        info!(%staker, %beneficiary, %amount, "Performing stake");

        let (hash_lock, unlock_secret) = self.bridge.create_hash_lock();
        info!(%hash_lock, "Hash lock and unlock secret generated");

        let intent = StakeIntent {
            staker,
            beneficiary,
            amount,
            gas_price: U256::ZERO,
            gas_limit: U256::ZERO,
            hash_lock,
            tx_options: TxOptions {
                from: staker,
                gas_price: self.origin_gas_price,
            },
        };

        if let Err(e) = self.bridge.submit_stake(&intent).await {
            metrics::record_stake_failure("submit");
            return Err(e.into());
        }

        info!(%staker, "Reading message hash from the gateway outbox");
        let process = match self.bridge.outbox_active_process(staker).await {
            Ok(p) => p,
            Err(e) => {
                metrics::record_stake_failure("outbox");
                return Err(e.into());
            }
        };
        if !process.is_present() {
            metrics::record_stake_failure("outbox");
            return Err(ChainError::NoActiveProcess(staker).into());
        }
        let message_hash = process.message_hash;

        // The staking submission does not hand back the assigned nonce, so
        // it is recovered from the counter after the fact. A concurrent
        // stake from the same staker between submission and this read
        // would shift the counter; callers serialize stakes per staker.
        let next_nonce = match self.bridge.staker_nonce(staker).await {
            Ok(n) => n,
            Err(e) => {
                metrics::record_stake_failure("nonce");
                return Err(e.into());
            }
        };
        let nonce = next_nonce
            .checked_sub(U256::from(1u64))
            .ok_or_else(|| {
                metrics::record_stake_failure("nonce");
                ChainError::Nonce("staker nonce counter is zero after submission".to_string())
            })?;
        let nonce = u64::try_from(nonce)
            .map_err(|_| ChainError::Nonce(format!("nonce {} exceeds u64", nonce)))?;

        let request = StakeRequest::from_intent(intent, unlock_secret.clone(), message_hash, nonce);
        self.store.insert(request);

        metrics::record_stake_initiated();
        info!(%message_hash, nonce, "Stake successful");

        Ok(StakeReceipt {
            message_hash,
            unlock_secret,
            nonce,
        })
    }

    /// Progress a previously initiated stake by revealing its unlock
    /// secret on both chains.
    ///
    /// The message hash must belong to a stake initiated by this process;
    /// the pending-request table does not survive restarts.
    pub async fn progress_stake(&self, message_hash: B256) -> FacilitatorResult<()> {
        info!(%message_hash, "Stake progress started");

        let request = match self.store.get(&message_hash) {
            Some(request) => request,
            None => {
                error!(%message_hash, "No stake request found");
                return Err(FacilitatorError::RequestNotFound);
            }
        };

        let auxiliary = TxOptions {
            from: self.auxiliary_deployer,
            gas_price: self.auxiliary_gas_price,
        };

        if let Err(e) = self.bridge.submit_progress(&request, &auxiliary).await {
            metrics::record_stake_failure("progress");
            return Err(e.into());
        }

        metrics::record_stake_progressed();
        info!(%message_hash, "Stake progress success");
        Ok(())
    }

    /// Number of stakes pending progression.
    pub fn pending_stakes(&self) -> usize {
        self.store.len()
    }
}
