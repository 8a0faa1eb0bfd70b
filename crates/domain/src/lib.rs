extern crate self as mojomint_domain;

pub mod chain;
pub mod error;
pub mod ids;
pub mod metadata;
pub mod mint;
pub mod narrative;

pub use chain::{ChainId, ContractAddress, TxHash, WalletAddress, Wei};
pub use error::DomainError;
pub use ids::AttemptId;
pub use metadata::{MetadataAttribute, MojoScore, NarrativeFlavor, NftMetadata};
pub use mint::{MintAttempt, MintStatus, UploadResult};
pub use narrative::{NarrativePath, NarrativeSession};
