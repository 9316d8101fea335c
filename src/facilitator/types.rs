//! Stake request records.

use alloy::primitives::{Address, B256, U256};
use serde::Serialize;

use crate::chain::types::{TxOptions, UnlockSecret};

/// What gets submitted to the origin gateway when a stake is initiated.
///
/// The message gas price and gas limit are zero sentinels: reward
/// computation is delegated downstream, to the gateway pair.
#[derive(Debug, Clone)]
pub struct StakeIntent {
    /// Account staking value on the origin chain.
    pub staker: Address,
    /// Account credited on the auxiliary chain.
    pub beneficiary: Address,
    /// Amount in the chain-native denomination.
    pub amount: U256,
    /// Message reward gas price (zero sentinel).
    pub gas_price: U256,
    /// Message reward gas limit (zero sentinel).
    pub gas_limit: U256,
    /// Commitment half of the hash-lock pair.
    pub hash_lock: B256,
    /// Origin-chain submission options.
    pub tx_options: TxOptions,
}

/// A fully populated pending stake, keyed by its message hash.
///
/// Constructed once the chain has assigned the message hash and the nonce
/// has been derived; immutable afterwards. Lives in the pending-request
/// store until process exit (there is no eviction).
#[derive(Debug, Clone)]
pub struct StakeRequest {
    pub staker: Address,
    pub beneficiary: Address,
    pub amount: U256,
    pub gas_price: U256,
    pub gas_limit: U256,
    pub hash_lock: B256,
    pub tx_options: TxOptions,
    /// Secret half of the hash-lock pair. Redacted in logs.
    pub unlock_secret: UnlockSecret,
    /// Chain-assigned message identifier.
    pub message_hash: B256,
    /// The staker's outbox nonce for this message.
    pub nonce: u64,
}

impl StakeRequest {
    /// Assemble the stored record from the submitted intent and the
    /// late-bound fields read back from the chain.
    pub fn from_intent(
        intent: StakeIntent,
        unlock_secret: UnlockSecret,
        message_hash: B256,
        nonce: u64,
    ) -> Self {
        Self {
            staker: intent.staker,
            beneficiary: intent.beneficiary,
            amount: intent.amount,
            gas_price: intent.gas_price,
            gas_limit: intent.gas_limit,
            hash_lock: intent.hash_lock,
            tx_options: intent.tx_options,
            unlock_secret,
            message_hash,
            nonce,
        }
    }
}

/// What `initiate_stake` hands back to the caller.
///
/// The unlock secret is serialized in full here: the caller needs it to
/// progress the stake, and this receipt is the only hand-off path.
#[derive(Debug, Clone, Serialize)]
pub struct StakeReceipt {
    pub message_hash: B256,
    pub unlock_secret: UnlockSecret,
    pub nonce: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, b256};

    #[test]
    fn test_from_intent_carries_all_fields() {
        let staker = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        let intent = StakeIntent {
            staker,
            beneficiary: address!("70997970C51812dc3A010C7d01b50e0d17dc79C8"),
            amount: U256::from(1000u64),
            gas_price: U256::ZERO,
            gas_limit: U256::ZERO,
            hash_lock: b256!(
                "00000000000000000000000000000000000000000000000000000000000000aa"
            ),
            tx_options: TxOptions {
                from: staker,
                gas_price: 1_000_000_000,
            },
        };

        let secret = UnlockSecret::new(b256!(
            "00000000000000000000000000000000000000000000000000000000000000bb"
        ));
        let message_hash = b256!(
            "00000000000000000000000000000000000000000000000000000000000000cc"
        );

        let request = StakeRequest::from_intent(intent, secret.clone(), message_hash, 4);
        assert_eq!(request.amount, U256::from(1000u64));
        assert_eq!(request.message_hash, message_hash);
        assert_eq!(request.nonce, 4);
        assert_eq!(request.unlock_secret, secret);
        assert_eq!(request.tx_options.from, staker);
    }

    #[test]
    fn test_receipt_debug_redacts_secret() {
        let receipt = StakeReceipt {
            message_hash: B256::ZERO,
            unlock_secret: UnlockSecret::new(b256!(
                "00000000000000000000000000000000000000000000000000000000000000dd"
            )),
            nonce: 0,
        };
        let debug = format!("{:?}", receipt);
        assert!(!debug.contains("dd"));
        assert!(debug.contains("redacted"));
    }
}
