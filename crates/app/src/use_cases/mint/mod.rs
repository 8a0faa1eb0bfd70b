//! Mint workflow use cases.

mod build_metadata;
mod claim_reward;
mod confirm_mint;
mod network_guard;
mod publish_metadata;

pub use build_metadata::{BuildMetadata, BuiltMetadata};
pub use claim_reward::ClaimReward;
pub use confirm_mint::{MintOrchestrator, MintOutcome};
pub use network_guard::{ChainCheck, NetworkGuard};
pub use publish_metadata::PublishMetadata;
