//! Workflow orchestration across ports.
//!
//! One struct per operation, dependencies injected as `Arc<dyn Port>`.
//! The mint orchestrator owns all attempt state; everything else reads.

pub mod error;
pub mod mint;
pub mod narrative;
pub mod session;

pub use error::WorkflowError;
pub use mint::{
    BuildMetadata, BuiltMetadata, ChainCheck, ClaimReward, MintOrchestrator, MintOutcome,
    NetworkGuard, PublishMetadata,
};
pub use narrative::{FinalizeStory, ResetStory, SelectPath, SubmitAnswer};
pub use session::{SessionSlot, SessionStore};
