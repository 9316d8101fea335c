//! Chain-layer types and error definitions.

use alloy::primitives::{Address, B256};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while talking to either chain.
#[derive(Debug, Error)]
pub enum ChainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Transaction submission failed or the transaction was dropped.
    #[error("Transaction submission failed: {0}")]
    Submission(String),

    /// A read-only contract call failed.
    #[error("Contract call failed: {0}")]
    Call(String),

    /// The gateway outbox has no active process for the staker.
    #[error("No active outbox process for staker {0}")]
    NoActiveProcess(Address),

    /// Nonce management error.
    #[error("Nonce error: {0}")]
    Nonce(String),

    /// Chain configuration mismatch.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Secret half of a hash-lock commitment.
///
/// The wrapped value gates release of a pending stake and must never appear
/// in log output. `Debug` and `Display` are therefore redacted; the raw
/// bytes are only reachable through [`UnlockSecret::reveal`], and
/// serialization is the explicit hand-off path back to the caller.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UnlockSecret(B256);

impl UnlockSecret {
    /// Wrap a raw 32-byte secret.
    pub fn new(secret: B256) -> Self {
        Self(secret)
    }

    /// The raw secret, for submission to the gateway pair.
    pub fn reveal(&self) -> B256 {
        self.0
    }
}

impl std::fmt::Debug for UnlockSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("UnlockSecret(<redacted>)")
    }
}

impl std::fmt::Display for UnlockSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Per-transaction submission options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxOptions {
    /// Sender account. The node holds the key for this account.
    pub from: Address,
    /// Gas price in wei.
    pub gas_price: u64,
}

/// The gateway's active outbox record for a staker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveProcess {
    /// Which message bucket the process lives in.
    pub message_bucket: u8,
    /// Chain-assigned message identifier. Zero means no active process.
    pub message_hash: B256,
}

impl ActiveProcess {
    /// Whether the outbox actually holds a process for the staker.
    pub fn is_present(&self) -> bool {
        self.message_hash != B256::ZERO
    }
}
