//! Stake Facilitator Library
//!
//! Orchestrates the two-transaction stake flow (initiate, progress) against
//! a pre-deployed cross-chain gateway contract pair, keeping pending
//! requests in a process-local table keyed by message hash.

pub mod bridge;
pub mod chain;
pub mod config;
pub mod facilitator;
pub mod observability;
pub mod store;

pub use bridge::{BridgeClient, GatewayBridgeClient};
pub use chain::{ChainClient, ChainError, UnlockSecret};
pub use config::FacilitatorConfig;
pub use facilitator::{FacilitatorError, StakeFacilitator, StakeReceipt, StakeRequest};
pub use store::{InMemoryStakeStore, StakeStore};
