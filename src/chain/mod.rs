//! Chain interaction subsystem.
//!
//! # Data Flow
//! ```text
//! FacilitatorConfig (RPC URLs, contract addresses, gas prices)
//!     → client.rs (RPC connections with timeouts)
//!     → gateway.rs (typed contract bindings)
//!     → bridge layer (stake submission, outbox/nonce reads)
//! ```
//!
//! # Security Constraints
//! - Unlock secrets are never logged; see [`types::UnlockSecret`]
//! - All RPC calls have configurable timeouts
//! - Graceful degradation when a chain is unreachable at startup

pub mod client;
pub mod gateway;
pub mod types;

pub use client::ChainClient;
pub use types::{ActiveProcess, ChainError, ChainResult, TxOptions, UnlockSecret};
