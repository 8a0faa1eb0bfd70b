//! Mint attempt state and upload outcomes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chain::{TxHash, Wei};
use crate::error::DomainError;
use crate::ids::AttemptId;

/// Status of one user-initiated mint workflow instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MintStatus {
    Idle,
    Pending,
    Success,
    Error,
}

impl MintStatus {
    /// Terminal states admit no further transitions; a retry starts a
    /// fresh attempt.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for MintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Pending => write!(f, "pending"),
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One per-click transaction workflow instance.
///
/// The fee is captured at attempt start and fixed for the attempt's
/// lifetime even if the on-chain fee changes mid-flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintAttempt {
    id: AttemptId,
    status: MintStatus,
    fee_wei: Wei,
    started_at: DateTime<Utc>,
    tx_hash: Option<TxHash>,
    error_message: Option<String>,
    /// Set when the attempt proceeded on a locally derived fallback URI.
    degraded_warning: Option<String>,
}

impl MintAttempt {
    pub fn begin(fee_wei: Wei, started_at: DateTime<Utc>) -> Self {
        Self {
            id: AttemptId::new(),
            status: MintStatus::Pending,
            fee_wei,
            started_at,
            tx_hash: None,
            error_message: None,
            degraded_warning: None,
        }
    }

    pub fn id(&self) -> AttemptId {
        self.id
    }

    pub fn status(&self) -> &MintStatus {
        &self.status
    }

    pub fn fee_wei(&self) -> Wei {
        self.fee_wei
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn tx_hash(&self) -> Option<&TxHash> {
        self.tx_hash.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn degraded_warning(&self) -> Option<&str> {
        self.degraded_warning.as_deref()
    }

    pub fn flag_degraded(&mut self, warning: impl Into<String>) {
        self.degraded_warning = Some(warning.into());
    }

    /// `pending -> success` with the receipt hash.
    pub fn succeed(&mut self, tx_hash: TxHash) -> Result<(), DomainError> {
        if self.status != MintStatus::Pending {
            return Err(DomainError::InvalidStateTransition(format!(
                "cannot succeed from {}",
                self.status
            )));
        }
        self.status = MintStatus::Success;
        self.tx_hash = Some(tx_hash);
        Ok(())
    }

    /// `pending -> error` with a classified user-facing message.
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), DomainError> {
        if self.status != MintStatus::Pending {
            return Err(DomainError::InvalidStateTransition(format!(
                "cannot fail from {}",
                self.status
            )));
        }
        self.status = MintStatus::Error;
        self.error_message = Some(message.into());
        Ok(())
    }
}

/// Outcome of publishing metadata to content-addressed storage.
///
/// `uri` is always populated: either the real pinned URI or a locally
/// derived fallback. An empty URI is a programming error, never a
/// user-facing state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub success: bool,
    pub uri: String,
    pub warning: Option<String>,
}

impl UploadResult {
    pub fn pinned(uri: impl Into<String>) -> Self {
        Self {
            success: true,
            uri: uri.into(),
            warning: None,
        }
    }

    pub fn fallback(uri: impl Into<String>, warning: impl Into<String>) -> Self {
        Self {
            success: false,
            uri: uri.into(),
            warning: Some(warning.into()),
        }
    }

    pub fn used_fallback(&self) -> bool {
        !self.success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempt_succeeds_only_from_pending() {
        let mut attempt = MintAttempt::begin(Wei(1), Utc::now());
        attempt.succeed(TxHash::new("0xabc")).unwrap();
        assert_eq!(*attempt.status(), MintStatus::Success);
        assert_eq!(attempt.tx_hash().map(TxHash::as_str), Some("0xabc"));
        assert!(attempt.succeed(TxHash::new("0xdef")).is_err());
    }

    #[test]
    fn attempt_failure_is_terminal() {
        let mut attempt = MintAttempt::begin(Wei(1), Utc::now());
        attempt.fail("wallet rejected").unwrap();
        assert_eq!(*attempt.status(), MintStatus::Error);
        assert!(attempt.fail("again").is_err());
        assert!(attempt.tx_hash().is_none());
    }

    #[test]
    fn fallback_result_always_carries_warning() {
        let r = UploadResult::fallback("ipfs://QmFallbackX", "pin service down");
        assert!(r.used_fallback());
        assert!(!r.uri.is_empty());
        assert!(r.warning.is_some());
    }
}
