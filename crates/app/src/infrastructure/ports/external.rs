//! Remote service port traits (narrative, metadata pinning, image
//! generation, token reward).
//!
//! Each call is a single request/response with no retry of its own.
//! Implementations validate that the response carries its discriminating
//! field before reporting success; a 2xx without it is still a failure.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mojomint_domain::{MojoScore, NarrativePath, NftMetadata, TxHash, WalletAddress};

use super::error::RemoteServiceError;

/// Narrative update/finalize/reset service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NarrativePort: Send + Sync {
    /// Append one answer to the user's server-side narrative state.
    async fn update(&self, user: &WalletAddress, answer: &str) -> Result<(), RemoteServiceError>;

    /// Produce the finalized narrative text from the submitted answers.
    async fn finalize(&self, user: &WalletAddress) -> Result<String, RemoteServiceError>;

    /// Clear the user's server-side narrative state. One explicit
    /// operation; the service owns the reset semantics.
    async fn reset(&self, user: &WalletAddress) -> Result<(), RemoteServiceError>;
}

/// Metadata pinning service (IPFS). Returns the pinned URI.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataPinPort: Send + Sync {
    async fn pin(
        &self,
        metadata: &NftMetadata,
        user: &WalletAddress,
        timestamp: DateTime<Utc>,
    ) -> Result<String, RemoteServiceError>;
}

/// Art generation service. Returns a resolvable image URI.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageGenPort: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        user: &WalletAddress,
    ) -> Result<String, RemoteServiceError>;
}

/// Token reward service, called after a confirmed mint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RewardPort: Send + Sync {
    async fn award(
        &self,
        address: &WalletAddress,
        mojo: MojoScore,
        path: NarrativePath,
    ) -> Result<TxHash, RemoteServiceError>;
}
