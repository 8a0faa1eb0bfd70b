//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the app crate. Everything else is
//! concrete types. Ports exist for:
//! - The four remote services (narrative, pinning, image, reward)
//! - Wallet capabilities (chain id, chain switch, fee read, mint submit)
//! - Clock/Random (for testing)

mod error;
mod external;
mod testing;
mod wallet;

pub use error::{RemoteServiceError, WalletError};
pub use external::{ImageGenPort, MetadataPinPort, NarrativePort, RewardPort};
pub use testing::{ClockPort, RandomPort};
pub use wallet::{MintCall, WalletPort};

#[cfg(test)]
pub use external::{MockImageGenPort, MockMetadataPinPort, MockNarrativePort, MockRewardPort};
#[cfg(test)]
pub use testing::{MockClockPort, MockRandomPort};
#[cfg(test)]
pub use wallet::MockWalletPort;
