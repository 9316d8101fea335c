//! Contract bindings for the cross-chain gateway pair.
//!
//! The stake flow touches two pre-deployed contracts: the EIP20 gateway on
//! the origin chain (lock + progress) and its co-gateway on the auxiliary
//! chain (mint progress). Only the entry points the facilitator drives are
//! declared here.

use alloy::sol;

sol! {
    /// Origin-chain gateway. Locks staked value and anchors the outbound
    /// message for the auxiliary chain.
    #[sol(rpc)]
    interface EIP20Gateway {
        /// Initiates a stake. The message nonce must match the staker's
        /// outbox nonce counter.
        function stake(
            uint256 _amount,
            address _beneficiary,
            uint256 _gasPrice,
            uint256 _gasLimit,
            uint256 _nonce,
            bytes32 _hashLock
        ) external returns (bytes32 messageHash_);

        /// Reveals the unlock secret on the origin chain, releasing the
        /// staked value into the gateway vault.
        function progressStake(
            bytes32 _messageHash,
            bytes32 _unlockSecret
        ) external returns (uint256 stakeAmount_);

        /// The staker's currently active outbox process, if any. A zero
        /// message hash means none.
        function getOutboxActiveProcess(
            address _account
        ) external view returns (uint8 messageBucket_, bytes32 messageHash_);

        /// The staker's next outbox message nonce.
        function getNonce(address _account) external view returns (uint256 nonce_);
    }

    /// Auxiliary-chain co-gateway. Mints the representation once the secret
    /// is revealed.
    #[sol(rpc)]
    interface EIP20CoGateway {
        /// Reveals the unlock secret on the auxiliary chain, minting the
        /// staked amount for the beneficiary.
        function progressMint(
            bytes32 _messageHash,
            bytes32 _unlockSecret
        ) external returns (
            address beneficiary_,
            uint256 stakeAmount_,
            uint256 mintedAmount_,
            uint256 rewardAmount_
        );
    }
}
