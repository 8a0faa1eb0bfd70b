//! Claim reward use case - token reward after a confirmed mint.
//!
//! The reward is a bonus, not part of the mint: failure is logged and
//! never bubbles up to the attempt.

use std::sync::Arc;

use mojomint_domain::{MojoScore, NarrativePath, TxHash, WalletAddress};

use crate::infrastructure::ports::RewardPort;

pub struct ClaimReward {
    reward: Arc<dyn RewardPort>,
}

impl ClaimReward {
    pub fn new(reward: Arc<dyn RewardPort>) -> Self {
        Self { reward }
    }

    /// Returns the reward transfer hash when the service cooperated.
    pub async fn execute(
        &self,
        address: &WalletAddress,
        mojo: MojoScore,
        path: NarrativePath,
    ) -> Option<TxHash> {
        match self.reward.award(address, mojo, path).await {
            Ok(tx_hash) => {
                tracing::info!(user = %address, tx = %tx_hash, "reward tokens sent");
                Some(tx_hash)
            }
            Err(e) => {
                tracing::warn!(user = %address, error = %e, "reward claim failed, continuing");
                None
            }
        }
    }
}
