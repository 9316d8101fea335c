//! Pending stake request storage.
//!
//! The table mapping message hashes to pending stake requests sits behind
//! the [`StakeStore`] trait so a durable backing could replace the
//! in-memory map without touching the facilitator. The default
//! implementation is process-scoped: entries live until the process exits.

use std::sync::Arc;

use alloy::primitives::B256;
use dashmap::DashMap;

use crate::facilitator::types::StakeRequest;

/// Interface over the pending-request table.
pub trait StakeStore: Send + Sync {
    /// Insert a pending request keyed by its message hash. Message hashes
    /// are chain-assigned and globally unique; inserting an existing key
    /// replaces the entry.
    fn insert(&self, request: StakeRequest);

    /// Look up a pending request by message hash.
    fn get(&self, message_hash: &B256) -> Option<StakeRequest>;

    /// Whether a request is pending for this message hash.
    fn contains(&self, message_hash: &B256) -> bool;

    /// Number of pending requests.
    fn len(&self) -> usize;

    /// Whether the table is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory pending-request table.
#[derive(Clone, Default)]
pub struct InMemoryStakeStore {
    inner: Arc<DashMap<B256, StakeRequest>>,
}

impl InMemoryStakeStore {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StakeStore for InMemoryStakeStore {
    fn insert(&self, request: StakeRequest) {
        self.inner.insert(request.message_hash, request);
    }

    fn get(&self, message_hash: &B256) -> Option<StakeRequest> {
        self.inner.get(message_hash).map(|r| r.value().clone())
    }

    fn contains(&self, message_hash: &B256) -> bool {
        self.inner.contains_key(message_hash)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::types::{TxOptions, UnlockSecret};
    use alloy::primitives::{Address, B256, U256};

    fn request(message_hash: B256, nonce: u64) -> StakeRequest {
        StakeRequest {
            staker: Address::ZERO,
            beneficiary: Address::ZERO,
            amount: U256::from(1u64),
            gas_price: U256::ZERO,
            gas_limit: U256::ZERO,
            hash_lock: B256::ZERO,
            tx_options: TxOptions {
                from: Address::ZERO,
                gas_price: 0,
            },
            unlock_secret: UnlockSecret::new(B256::ZERO),
            message_hash,
            nonce,
        }
    }

    #[test]
    fn test_store_operations() {
        let store = InMemoryStakeStore::new();
        let hash = B256::repeat_byte(0x11);

        assert!(store.is_empty());
        assert!(store.get(&hash).is_none());

        store.insert(request(hash, 3));
        assert!(store.contains(&hash));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&hash).unwrap().nonce, 3);
    }

    #[test]
    fn test_distinct_keys_are_independent() {
        let store = InMemoryStakeStore::new();
        let h1 = B256::repeat_byte(0x01);
        let h2 = B256::repeat_byte(0x02);

        store.insert(request(h1, 0));
        store.insert(request(h2, 5));

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&h1).unwrap().nonce, 0);
        assert_eq!(store.get(&h2).unwrap().nonce, 5);
    }

    #[test]
    fn test_reinsert_replaces_entry() {
        let store = InMemoryStakeStore::new();
        let hash = B256::repeat_byte(0x11);

        store.insert(request(hash, 1));
        store.insert(request(hash, 2));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&hash).unwrap().nonce, 2);
    }

    #[test]
    fn test_clones_share_the_table() {
        let store = InMemoryStakeStore::new();
        let view = store.clone();
        store.insert(request(B256::repeat_byte(0x33), 0));
        assert_eq!(view.len(), 1);
    }
}
