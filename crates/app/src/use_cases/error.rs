//! User-facing workflow error taxonomy.
//!
//! Remote-service and wallet failures are caught at the port boundary
//! and converted here; only the mint orchestrator decides whether a
//! category is attempt-fatal or tolerable. Nothing is silently
//! swallowed: every failure path ends in one of these variants or a
//! logged-and-substituted fallback value.

use mojomint_domain::{ChainId, DomainError};
use thiserror::Error;

use crate::infrastructure::ports::{RemoteServiceError, WalletError};

#[derive(Debug, Error)]
pub enum WorkflowError {
    // Guard failures: reported immediately, no network call attempted.
    #[error("no wallet connected")]
    NotConnected,

    #[error("no story path selected")]
    NoSelection,

    #[error("mint fee not loaded yet")]
    FeeNotLoaded,

    #[error("connected to chain {current}, but chain {required} is required")]
    WrongNetwork { current: ChainId, required: ChainId },

    #[error("a mint is already in progress")]
    MintInProgress,

    // Wallet outcomes.
    #[error("transaction rejected in the wallet")]
    Rejected,

    #[error("insufficient funds to cover the mint fee")]
    InsufficientFunds,

    #[error("contract error: {0}")]
    Contract(String),

    // Remote service failure that was not substituted with a fallback.
    #[error(transparent)]
    Service(#[from] RemoteServiceError),

    // Domain invariant violations (incomplete story, bad input).
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Unknown(String),
}

impl WorkflowError {
    /// True for preconditions that fail before anything is submitted.
    pub fn is_guard_failure(&self) -> bool {
        matches!(
            self,
            Self::NotConnected
                | Self::NoSelection
                | Self::FeeNotLoaded
                | Self::WrongNetwork { .. }
                | Self::MintInProgress
                | Self::Domain(_)
        )
    }

    /// Message stored on the attempt and shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotConnected => "Connect a wallet before minting.".into(),
            Self::NoSelection => "Choose a story path before minting.".into(),
            Self::FeeNotLoaded => "The mint fee is still loading. Try again in a moment.".into(),
            Self::WrongNetwork { required, .. } => {
                format!("Wrong network. Switch to chain {required} and try again.")
            }
            Self::MintInProgress => "A mint is already in progress.".into(),
            Self::Rejected => "Transaction was rejected in the wallet.".into(),
            Self::InsufficientFunds => "Insufficient funds to cover the mint fee.".into(),
            Self::Contract(reason) => format!("The contract rejected the mint: {reason}"),
            Self::Service(e) => format!("A service call failed: {e}"),
            Self::Domain(e) => e.to_string(),
            Self::Unknown(message) => format!("Something went wrong: {message}"),
        }
    }
}

impl From<WalletError> for WorkflowError {
    fn from(e: WalletError) -> Self {
        match e {
            WalletError::Rejected => Self::Rejected,
            WalletError::InsufficientFunds => Self::InsufficientFunds,
            WalletError::Reverted(reason) => Self::Contract(reason),
            WalletError::Provider(message) => Self::Unknown(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_errors_classify() {
        assert!(matches!(
            WorkflowError::from(WalletError::Rejected),
            WorkflowError::Rejected
        ));
        assert!(matches!(
            WorkflowError::from(WalletError::InsufficientFunds),
            WorkflowError::InsufficientFunds
        ));
        let e = WorkflowError::from(WalletError::Reverted("minting paused".into()));
        assert!(matches!(e, WorkflowError::Contract(ref r) if r == "minting paused"));
    }

    #[test]
    fn guard_failures_are_flagged() {
        assert!(WorkflowError::NoSelection.is_guard_failure());
        assert!(WorkflowError::WrongNetwork {
            current: ChainId(1),
            required: ChainId(10)
        }
        .is_guard_failure());
        assert!(!WorkflowError::Rejected.is_guard_failure());
    }
}
