//! Shared utilities for facilitator integration tests.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;

use alloy::primitives::{keccak256, Address, TxHash, B256, U256};
use async_trait::async_trait;

use stake_facilitator::chain::types::{
    ActiveProcess, ChainError, ChainResult, TxOptions, UnlockSecret,
};
use stake_facilitator::facilitator::{StakeIntent, StakeRequest};
use stake_facilitator::BridgeClient;

/// A recorded progression submission.
#[derive(Debug, Clone, Copy)]
pub struct ProgressCall {
    pub message_hash: B256,
    pub unlock_secret: B256,
    pub nonce: u64,
    pub auxiliary: TxOptions,
}

/// Programmable bridge stand-in that records every interaction.
///
/// Message hashes derive from the staker address and a running stake
/// counter, so repeated stakes and distinct stakers all get distinct
/// hashes, mirroring what the gateway outbox would assign.
pub struct RecordingBridge {
    secret_counter: AtomicU64,
    nonce_counter: AtomicU64,
    pub stake_calls: Mutex<Vec<StakeIntent>>,
    pub progress_calls: Mutex<Vec<ProgressCall>>,
    pub view_calls: AtomicUsize,
    /// When true, the outbox read reports no active process.
    pub missing_process: std::sync::atomic::AtomicBool,
}

impl RecordingBridge {
    pub fn new(first_nonce: u64) -> Self {
        Self {
            secret_counter: AtomicU64::new(1),
            nonce_counter: AtomicU64::new(first_nonce),
            stake_calls: Mutex::new(Vec::new()),
            progress_calls: Mutex::new(Vec::new()),
            view_calls: AtomicUsize::new(0),
            missing_process: std::sync::atomic::AtomicBool::new(false),
        }
    }

    pub fn total_calls(&self) -> usize {
        self.stake_calls.lock().unwrap().len()
            + self.progress_calls.lock().unwrap().len()
            + self.view_calls.load(Ordering::SeqCst)
    }

    fn message_hash_for(&self, staker: Address, nonce: u64) -> B256 {
        let mut preimage = staker.as_slice().to_vec();
        preimage.extend_from_slice(&nonce.to_be_bytes());
        keccak256(preimage)
    }
}

#[async_trait]
impl BridgeClient for RecordingBridge {
    fn create_hash_lock(&self) -> (B256, UnlockSecret) {
        // High-entropy but deterministic secrets, one per call.
        let counter = self.secret_counter.fetch_add(1, Ordering::SeqCst);
        let secret = keccak256(counter.to_be_bytes());
        (keccak256(secret), UnlockSecret::new(secret))
    }

    async fn submit_stake(&self, intent: &StakeIntent) -> ChainResult<TxHash> {
        self.stake_calls.lock().unwrap().push(intent.clone());
        self.nonce_counter.fetch_add(1, Ordering::SeqCst);
        Ok(TxHash::ZERO)
    }

    async fn outbox_active_process(&self, staker: Address) -> ChainResult<ActiveProcess> {
        self.view_calls.fetch_add(1, Ordering::SeqCst);
        if self.missing_process.load(Ordering::SeqCst) {
            return Ok(ActiveProcess {
                message_bucket: 0,
                message_hash: B256::ZERO,
            });
        }
        let assigned = self.nonce_counter.load(Ordering::SeqCst) - 1;
        Ok(ActiveProcess {
            message_bucket: 1,
            message_hash: self.message_hash_for(staker, assigned),
        })
    }

    async fn staker_nonce(&self, _staker: Address) -> ChainResult<U256> {
        self.view_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.nonce_counter.load(Ordering::SeqCst);
        if next == 0 {
            return Err(ChainError::Nonce("counter uninitialized".to_string()));
        }
        Ok(U256::from(next))
    }

    async fn submit_progress(
        &self,
        request: &StakeRequest,
        auxiliary: &TxOptions,
    ) -> ChainResult<TxHash> {
        self.progress_calls.lock().unwrap().push(ProgressCall {
            message_hash: request.message_hash,
            unlock_secret: request.unlock_secret.reveal(),
            nonce: request.nonce,
            auxiliary: *auxiliary,
        });
        Ok(TxHash::ZERO)
    }
}
